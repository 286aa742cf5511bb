//! Schema model: plain data holders for tables, views, fields and constraints.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub tables: Vec<Table>,
    pub views: Vec<View>,
}

impl Schema {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.views.is_empty()
    }
}

/// Attributes shared by every schema object.
///
/// A timestamp equal to `NaiveDateTime::default()` is treated as unset and is not
/// written out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseSchemaObject {
    pub schema: String,
    pub catalog: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BaseSchemaObject {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub base: BaseSchemaObject,
    pub fields: Vec<Field>,
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub base: BaseSchemaObject,
    pub fields: Vec<Field>,
    /// SQL text of the view
    pub definition: String,
    pub check_option: String,
    pub is_updatable: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    pub base: BaseSchemaObject,
    /// Name of the owning table or view
    pub table: String,
    pub field_type: FieldType,
    /// Provider specific type name, e.g. `varchar` or `int4`
    pub db_type: String,
    pub is_key: bool,
    pub length: i32,
    pub is_required: bool,
    pub format: String,
    pub ordinal_position: i32,
    pub default: String,
    pub is_identity: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraint {
    pub base: BaseSchemaObject,
    pub table: String,
    pub column: String,
    pub constraint_type: ConstraintType,
    pub position: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldType {
    #[default]
    Unknown,
    String,
    Integer,
    Long,
    Decimal,
    Double,
    Boolean,
    Date,
    DateTime,
    Time,
    Binary,
    Guid,
}

impl FieldType {
    const ALL: [Self; 12] = [
        Self::Unknown,
        Self::String,
        Self::Integer,
        Self::Long,
        Self::Decimal,
        Self::Double,
        Self::Boolean,
        Self::Date,
        Self::DateTime,
        Self::Time,
        Self::Binary,
        Self::Guid,
    ];

    /// Case-insensitive lookup by name. Unrecognized names map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .unwrap_or(Self::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Time => "Time",
            Self::Binary => "Binary",
            Self::Guid => "Guid",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConstraintType {
    #[default]
    Unknown,
    PrimaryKey,
    ForeignKey,
    Unique,
    Check,
    Default,
}

impl ConstraintType {
    const ALL: [Self; 6] = [
        Self::Unknown,
        Self::PrimaryKey,
        Self::ForeignKey,
        Self::Unique,
        Self::Check,
        Self::Default,
    ];

    /// Case-insensitive lookup by name. Unrecognized names map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .unwrap_or(Self::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::PrimaryKey => "PrimaryKey",
            Self::ForeignKey => "ForeignKey",
            Self::Unique => "Unique",
            Self::Check => "Check",
            Self::Default => "Default",
        }
    }
}
