//! SQLModel class templates.

use appkod_blueprint::{DefaultValue, Entity, Field, Index};
use appkod_codegen::builder::{CodeFragment, Renderable, quoted};
use appkod_core::TypeRegistry;

/// The whole `models.py` module.
pub struct SqlModelModule<'a> {
    entities: &'a [Entity],
    types: &'a TypeRegistry,
}

impl<'a> SqlModelModule<'a> {
    pub fn new(entities: &'a [Entity], types: &'a TypeRegistry) -> Self {
        Self { entities, types }
    }

    fn imports(&self) -> Vec<CodeFragment> {
        let mut imports = vec![
            CodeFragment::line("from datetime import datetime"),
            CodeFragment::line("from typing import Optional"),
            CodeFragment::line("from uuid import UUID, uuid4"),
            CodeFragment::blank(),
        ];
        if self.entities.iter().any(|e| !e.indexes.is_empty()) {
            imports.push(CodeFragment::line("from sqlalchemy import Index"));
        }
        imports.push(CodeFragment::line("from sqlmodel import Field, SQLModel"));
        imports
    }
}

impl Renderable for SqlModelModule<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::line("\"\"\"Auto-generated SQLModel models from Blueprint\"\"\""),
            CodeFragment::comment("#", "DO NOT EDIT - regenerate from Blueprint"),
            CodeFragment::blank(),
        ];
        fragments.extend(self.imports());

        for entity in self.entities {
            fragments.push(CodeFragment::blank());
            fragments.push(CodeFragment::blank());
            fragments.extend(SqlModelClass::new(entity, self.types).to_fragments());
        }
        fragments
    }
}

/// One `class X(SQLModel, table=True)` definition.
pub struct SqlModelClass<'a> {
    entity: &'a Entity,
    types: &'a TypeRegistry,
}

impl<'a> SqlModelClass<'a> {
    pub fn new(entity: &'a Entity, types: &'a TypeRegistry) -> Self {
        Self { entity, types }
    }

    fn columns(&self) -> Vec<SqlModelField> {
        let entity = self.entity;
        let mut columns: Vec<_> = entity
            .fields
            .iter()
            .map(|f| SqlModelField::declared(f, self.types))
            .collect();

        if entity.timestamps {
            columns.push(SqlModelField::implicit(
                "created_at",
                "datetime",
                "Field(default_factory=datetime.utcnow)",
            ));
            columns.push(SqlModelField::implicit(
                "updated_at",
                "datetime",
                "Field(default_factory=datetime.utcnow)",
            ));
        }
        if entity.soft_delete {
            columns.push(SqlModelField::implicit(
                "deleted_at",
                "Optional[datetime]",
                "None",
            ));
        }
        if entity.tenant_scoped {
            columns.push(SqlModelField::implicit(
                "tenant_id",
                "UUID",
                "Field(index=True)",
            ));
        }
        columns
    }

    fn table_args(&self) -> Option<CodeFragment> {
        let entity = self.entity;
        if entity.indexes.is_empty() {
            return None;
        }

        let table = entity.table_name();
        let entries = entity
            .indexes
            .iter()
            .map(|index| CodeFragment::line(format!("{},", index_call(entity, &table, index))))
            .collect();
        Some(CodeFragment::block(
            "__table_args__ = (",
            entries,
            Some(")".to_string()),
        ))
    }
}

impl Renderable for SqlModelClass<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let entity = self.entity;
        let mut body = Vec::new();
        if let Some(description) = &entity.description {
            body.push(CodeFragment::docstring(description));
        }
        body.push(CodeFragment::line(format!(
            "__tablename__ = {}",
            quoted(&entity.table_name())
        )));
        body.extend(self.table_args());

        let columns = self.columns();
        if !columns.is_empty() {
            body.push(CodeFragment::blank());
        }
        body.extend(columns.iter().flat_map(|column| column.to_fragments()));

        vec![CodeFragment::block(
            format!("class {}(SQLModel, table=True):", entity.type_name()),
            body,
            None,
        )]
    }
}

/// One annotated class attribute, with its optional comment.
pub struct SqlModelField {
    name: String,
    ty: String,
    /// Right-hand side of the assignment, if any
    value: Option<String>,
    comment: Option<String>,
}

impl SqlModelField {
    /// A field declared in the blueprint.
    pub fn declared(field: &Field, types: &TypeRegistry) -> Self {
        let mapped = types.model_type(&field.ty);
        let optional = field.is_optional();
        let ty = if optional {
            types.model().optional(mapped)
        } else {
            mapped.to_string()
        };

        let mut args = Vec::new();
        let mut column_kwargs = Vec::new();
        if field.primary {
            if field.is_uuid() {
                args.push("default_factory=uuid4".to_string());
                args.push("primary_key=True".to_string());
            } else {
                args.push("primary_key=True".to_string());
                column_kwargs.push("\"autoincrement\": True".to_string());
            }
        }
        if field.unique {
            args.push("unique=True".to_string());
        }
        if !field.primary {
            match &field.default {
                Some(default) => args.push(default_argument(default)),
                None if optional => args.push("default=None".to_string()),
                None => {}
            }
        }
        if field.has_column_override() {
            column_kwargs.push(format!("\"name\": {}", quoted(&field.column_name())));
        }
        if !column_kwargs.is_empty() {
            args.push(format!("sa_column_kwargs={{{}}}", column_kwargs.join(", ")));
        }

        let value = match args.as_slice() {
            [] => None,
            [only] if only == "default=None" => Some("None".to_string()),
            _ => Some(format!("Field({})", args.join(", "))),
        };

        Self {
            name: field.name.clone(),
            ty,
            value,
            comment: field.description.as_ref().map(|d| d.trim().to_string()),
        }
    }

    /// A column added by a table option.
    fn implicit(name: &str, ty: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            value: Some(value.to_string()),
            comment: None,
        }
    }
}

impl Renderable for SqlModelField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(comment) = &self.comment {
            fragments.push(CodeFragment::comment("#", comment.as_str()));
        }

        let line = match &self.value {
            Some(value) => format!("{}: {} = {}", self.name, self.ty, value),
            None => format!("{}: {}", self.name, self.ty),
        };
        fragments.push(CodeFragment::line(line));
        fragments
    }
}

fn default_argument(default: &DefaultValue) -> String {
    match default {
        DefaultValue::Now => "default_factory=datetime.utcnow".to_string(),
        DefaultValue::String(s) => format!("default={}", quoted(s)),
        DefaultValue::Integer(i) => format!("default={}", i),
        DefaultValue::Float(f) => format!("default={:?}", f),
        DefaultValue::Bool(true) => "default=True".to_string(),
        DefaultValue::Bool(false) => "default=False".to_string(),
    }
}

/// `Index("name", "col", ...)`, keyed by database column names.
fn index_call(entity: &Entity, table: &str, index: &Index) -> String {
    let columns: Vec<String> = index
        .fields
        .iter()
        .map(|name| {
            entity
                .fields
                .iter()
                .find(|f| &f.name == name)
                .map(|f| f.column_name())
                .unwrap_or_else(|| name.clone())
        })
        .collect();

    let name = index.name.clone().unwrap_or_else(|| {
        let prefix = if index.unique { "uq" } else { "ix" };
        format!("{}_{}_{}", prefix, table, columns.join("_"))
    });

    let mut args = vec![quoted(&name)];
    args.extend(columns.iter().map(|c| quoted(c)));
    if index.unique {
        args.push("unique=True".to_string());
    }
    format!("Index({})", args.join(", "))
}
