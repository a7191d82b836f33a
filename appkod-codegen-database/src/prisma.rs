//! Prisma schema templates.

use appkod_blueprint::{DefaultValue, Entity, Field, Index};
use appkod_codegen::builder::{CodeFragment, Renderable, quoted};
use appkod_core::TypeRegistry;

/// The whole `schema.prisma` file.
pub struct PrismaSchema<'a> {
    entities: &'a [Entity],
    types: &'a TypeRegistry,
}

impl<'a> PrismaSchema<'a> {
    pub fn new(entities: &'a [Entity], types: &'a TypeRegistry) -> Self {
        Self { entities, types }
    }
}

impl Renderable for PrismaSchema<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::comment("//", "Auto-generated Prisma schema from Blueprint"),
            CodeFragment::comment("//", "DO NOT EDIT - regenerate from Blueprint"),
            CodeFragment::blank(),
        ];
        fragments.extend(Datasource.to_fragments());

        for entity in self.entities {
            fragments.push(CodeFragment::blank());
            fragments.extend(PrismaModel::new(entity, self.types).to_fragments());
        }
        fragments
    }
}

/// The client generator and PostgreSQL datasource blocks.
pub struct Datasource;

impl Renderable for Datasource {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::block(
                "generator client {",
                vec![CodeFragment::line("provider = \"prisma-client-js\"")],
                Some("}".to_string()),
            ),
            CodeFragment::blank(),
            CodeFragment::block(
                "datasource db {",
                vec![
                    CodeFragment::line("provider = \"postgresql\""),
                    CodeFragment::line("url      = env(\"DATABASE_URL\")"),
                ],
                Some("}".to_string()),
            ),
        ]
    }
}

/// One `model` block.
pub struct PrismaModel<'a> {
    entity: &'a Entity,
    types: &'a TypeRegistry,
}

impl<'a> PrismaModel<'a> {
    pub fn new(entity: &'a Entity, types: &'a TypeRegistry) -> Self {
        Self { entity, types }
    }

    fn columns(&self) -> Vec<PrismaField> {
        let entity = self.entity;
        let mut columns: Vec<_> = entity
            .fields
            .iter()
            .map(|f| PrismaField::declared(f, self.types))
            .collect();

        if entity.timestamps {
            columns.push(PrismaField::implicit(
                "createdAt",
                "DateTime",
                ["@default(now())", "@map(\"created_at\")"],
            ));
            columns.push(PrismaField::implicit(
                "updatedAt",
                "DateTime",
                ["@updatedAt", "@map(\"updated_at\")"],
            ));
        }
        if entity.soft_delete {
            columns.push(PrismaField::implicit(
                "deletedAt",
                "DateTime?",
                ["@map(\"deleted_at\")"],
            ));
        }
        if entity.tenant_scoped {
            columns.push(PrismaField::implicit(
                "tenantId",
                "String",
                ["@map(\"tenant_id\")"],
            ));
        }
        columns
    }

    fn block_attributes(&self) -> Vec<String> {
        let entity = self.entity;
        let mut attrs = Vec::new();
        if entity.tenant_scoped {
            attrs.push("@@index([tenantId])".to_string());
        }
        attrs.extend(entity.indexes.iter().map(index_attribute));
        attrs.push(format!("@@map({})", quoted(&entity.table_name())));
        attrs
    }
}

impl Renderable for PrismaModel<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(description) = &self.entity.description {
            fragments.push(CodeFragment::comment("///", description.trim()));
        }

        let mut body: Vec<_> = self
            .columns()
            .iter()
            .flat_map(|column| column.to_fragments())
            .collect();
        if !body.is_empty() {
            body.push(CodeFragment::blank());
        }
        body.extend(self.block_attributes().into_iter().map(CodeFragment::line));

        fragments.push(CodeFragment::block(
            format!("model {} {{", self.entity.type_name()),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}

/// One field line of a model, with its optional doc comment.
pub struct PrismaField {
    name: String,
    ty: String,
    attrs: Vec<String>,
    doc: Option<String>,
}

impl PrismaField {
    /// A field declared in the blueprint.
    pub fn declared(field: &Field, types: &TypeRegistry) -> Self {
        let mapped = types.schema_type(&field.ty);
        let ty = if field.is_optional() {
            types.schema().optional(mapped)
        } else {
            mapped.to_string()
        };

        let mut attrs = Vec::new();
        if field.primary {
            if field.is_uuid() {
                attrs.push("@id @default(uuid())".to_string());
            } else {
                attrs.push("@id @default(autoincrement())".to_string());
            }
        } else if let Some(default) = &field.default {
            attrs.push(format!("@default({})", default_literal(default)));
        }
        if field.unique {
            attrs.push("@unique".to_string());
        }
        if field.has_column_override() {
            attrs.push(format!("@map({})", quoted(&field.column_name())));
        }

        Self {
            name: field.name.clone(),
            ty,
            attrs,
            doc: field.description.as_ref().map(|d| d.trim().to_string()),
        }
    }

    /// A column added by a table option.
    fn implicit<const N: usize>(name: &str, ty: &str, attrs: [&str; N]) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            attrs: attrs.iter().map(|a| a.to_string()).collect(),
            doc: None,
        }
    }
}

impl Renderable for PrismaField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment("///", doc.as_str()));
        }

        let mut line = format!("{} {}", self.name, self.ty);
        for attr in &self.attrs {
            line.push(' ');
            line.push_str(attr);
        }
        fragments.push(CodeFragment::line(line));
        fragments
    }
}

fn default_literal(default: &DefaultValue) -> String {
    match default {
        DefaultValue::Now => "now()".to_string(),
        DefaultValue::String(s) => quoted(s),
        DefaultValue::Integer(i) => i.to_string(),
        DefaultValue::Float(f) => f.to_string(),
        DefaultValue::Bool(b) => b.to_string(),
    }
}

fn index_attribute(index: &Index) -> String {
    let kind = if index.unique { "@@unique" } else { "@@index" };
    let fields = index.fields.join(", ");
    match &index.name {
        Some(name) => format!("{}([{}], map: {})", kind, fields, quoted(name)),
        None => format!("{}([{}])", kind, fields),
    }
}
