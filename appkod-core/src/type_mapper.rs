//! Type mapping between blueprint field types and target type systems.

use std::fmt;

/// Field types a blueprint may declare.
///
/// This is the language-agnostic representation of a column type. Use a
/// [`TypeMapper`] to convert it to a target-specific type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Text,
    Number,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    Timestamp,
    Uuid,
    Email,
    Url,
    Phone,
    Json,
    Jsonb,
}

impl FieldType {
    /// Every supported field type, in declaration order.
    pub const ALL: [FieldType; 15] = [
        FieldType::String,
        FieldType::Text,
        FieldType::Number,
        FieldType::Integer,
        FieldType::Float,
        FieldType::Boolean,
        FieldType::Date,
        FieldType::DateTime,
        FieldType::Timestamp,
        FieldType::Uuid,
        FieldType::Email,
        FieldType::Url,
        FieldType::Phone,
        FieldType::Json,
        FieldType::Jsonb,
    ];

    /// Parse a blueprint type tag. Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(tag))
    }

    /// Get the blueprint tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Timestamp => "timestamp",
            FieldType::Uuid => "uuid",
            FieldType::Email => "email",
            FieldType::Url => "url",
            FieldType::Phone => "phone",
            FieldType::Json => "json",
            FieldType::Jsonb => "jsonb",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for mapping blueprint field types to target-specific type strings.
///
/// Implement this trait once per target type system.
pub trait TypeMapper: Send + Sync {
    /// The target type system name
    fn target(&self) -> &'static str;

    /// Map a field type to a target type string
    fn map(&self, field_type: FieldType) -> &'static str;

    /// The most general string-like type, used for unrecognized tags
    fn fallback(&self) -> &'static str;

    /// Wrap a type string in the target's optionality marker
    fn optional(&self, ty: &str) -> String;

    /// Map a raw blueprint tag, falling back for unknown tags
    fn map_tag(&self, tag: &str) -> &'static str {
        FieldType::from_tag(tag)
            .map(|ty| self.map(ty))
            .unwrap_or_else(|| self.fallback())
    }
}

/// Prisma schema language types.
pub struct PrismaTypeMapper;

impl TypeMapper for PrismaTypeMapper {
    fn target(&self) -> &'static str {
        "prisma"
    }

    fn map(&self, field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::String | FieldType::Text => "String",
            FieldType::Number | FieldType::Float => "Float",
            FieldType::Integer => "Int",
            FieldType::Boolean => "Boolean",
            FieldType::Date | FieldType::DateTime | FieldType::Timestamp => "DateTime",
            FieldType::Uuid | FieldType::Email | FieldType::Url | FieldType::Phone => "String",
            FieldType::Json | FieldType::Jsonb => "Json",
        }
    }

    fn fallback(&self) -> &'static str {
        "String"
    }

    fn optional(&self, ty: &str) -> String {
        format!("{}?", ty)
    }
}

/// Python types used by SQLModel classes.
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn target(&self) -> &'static str {
        "python"
    }

    fn map(&self, field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::String | FieldType::Text => "str",
            FieldType::Number | FieldType::Float => "float",
            FieldType::Integer => "int",
            FieldType::Boolean => "bool",
            FieldType::Date | FieldType::DateTime | FieldType::Timestamp => "datetime",
            FieldType::Uuid => "UUID",
            FieldType::Email | FieldType::Url | FieldType::Phone => "str",
            FieldType::Json | FieldType::Jsonb => "dict",
        }
    }

    fn fallback(&self) -> &'static str {
        "str"
    }

    fn optional(&self, ty: &str) -> String {
        format!("Optional[{}]", ty)
    }
}

/// Immutable set of type tables handed to every generator.
///
/// Built once per run; holds one mapper for the schema-definition layer and
/// one for the model layer.
pub struct TypeRegistry {
    schema: Box<dyn TypeMapper>,
    model: Box<dyn TypeMapper>,
}

impl TypeRegistry {
    pub fn new(schema: impl TypeMapper + 'static, model: impl TypeMapper + 'static) -> Self {
        Self {
            schema: Box::new(schema),
            model: Box::new(model),
        }
    }

    /// Mapper for the schema-definition artifact.
    pub fn schema(&self) -> &dyn TypeMapper {
        self.schema.as_ref()
    }

    /// Mapper for the model-layer artifact.
    pub fn model(&self) -> &dyn TypeMapper {
        self.model.as_ref()
    }

    pub fn schema_type(&self, tag: &str) -> &'static str {
        self.schema.map_tag(tag)
    }

    pub fn model_type(&self, tag: &str) -> &'static str {
        self.model.map_tag(tag)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new(PrismaTypeMapper, PythonTypeMapper)
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("schema", &self.schema.target())
            .field("model", &self.model.target())
            .finish()
    }
}
