use appkod_blueprint::{Blueprint, Entity};
use appkod_core::{TypeRegistry, to_pascal_case, to_snake_case};

/// The model an endpoint operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// SQLModel class name
    pub model: String,
    /// Canonical table name, used in handler names
    pub table: String,
    pub key: KeyColumn,
}

impl Target {
    /// Resolve a table reference through the declared entities.
    ///
    /// Undeclared tables still get a model name derived from the reference,
    /// so the route file stays reviewable.
    pub fn resolve(table: &str, blueprint: &Blueprint, types: &TypeRegistry) -> Self {
        match blueprint.entity(table) {
            Some(entity) => Self {
                model: entity.type_name(),
                table: entity.table_name(),
                key: KeyColumn::of(entity, types),
            },
            None => Self {
                model: to_pascal_case(table),
                table: to_snake_case(table),
                key: KeyColumn::default(),
            },
        }
    }
}

/// The primary key attribute single-record handlers look up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyColumn {
    pub name: String,
    /// Python type of the path parameter
    pub ty: String,
}

impl KeyColumn {
    fn of(entity: &Entity, types: &TypeRegistry) -> Self {
        entity
            .primary_fields()
            .next()
            .map(|field| Self {
                name: field.name.clone(),
                ty: types.model_type(&field.ty).to_string(),
            })
            .unwrap_or_default()
    }
}

impl Default for KeyColumn {
    fn default() -> Self {
        Self {
            name: "id".to_string(),
            ty: "UUID".to_string(),
        }
    }
}
