use appkod_core::{FieldType, to_pascal_case, to_snake_case};
use serde::Deserialize;

use super::default_true;

/// A table definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Adds `created_at` / `updated_at` columns
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Adds a nullable `deleted_at` column
    #[serde(default)]
    pub soft_delete: bool,
    /// Adds an indexed `tenant_id` column
    #[serde(default = "default_true")]
    pub tenant_scoped: bool,
    #[serde(default)]
    pub indexes: Vec<Index>,
}

impl Entity {
    /// Type name used by every target (e.g. "order_items" -> "OrderItems").
    pub fn type_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Canonical table name in the database.
    pub fn table_name(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Fields flagged as primary keys.
    pub fn primary_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.primary)
    }
}

/// A column definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,
    /// Raw type tag; unknown tags are kept and mapped leniently
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub unique: bool,
    pub default: Option<DefaultValue>,
    pub description: Option<String>,
}

impl Field {
    /// The parsed field type, if the tag is recognized.
    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::from_tag(&self.ty)
    }

    pub fn is_uuid(&self) -> bool {
        self.field_type() == Some(FieldType::Uuid)
    }

    /// Primary fields are implicitly required.
    pub fn is_optional(&self) -> bool {
        !self.required && !self.primary
    }

    /// Database column name.
    pub fn column_name(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Whether the column name differs from the declared name.
    pub fn has_column_override(&self) -> bool {
        self.column_name() != self.name
    }
}

/// A declared default value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawDefault")]
pub enum DefaultValue {
    /// The `now()` sentinel: current timestamp at insert time
    Now,
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDefault {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl From<RawDefault> for DefaultValue {
    fn from(raw: RawDefault) -> Self {
        match raw {
            RawDefault::String(s) if s == "now()" => DefaultValue::Now,
            RawDefault::String(s) => DefaultValue::String(s),
            RawDefault::Integer(i) => DefaultValue::Integer(i),
            RawDefault::Float(f) => DefaultValue::Float(f),
            RawDefault::Bool(b) => DefaultValue::Bool(b),
        }
    }
}

/// A secondary index over one or more fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Index {
    pub name: Option<String>,
    pub fields: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}
