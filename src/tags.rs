//! Element and attribute names of the schema document. Matching is case-sensitive.

pub const ROOT: &str = "Schema";
pub const TABLE: &str = "Table";
pub const VIEW: &str = "View";
pub const FIELD: &str = "Field";
pub const CONSTRAINT: &str = "Constraint";

pub const SCHEMA: &str = "Schema";
pub const CATALOG: &str = "Catalog";
pub const NAME: &str = "Name";
pub const DESCRIPTION: &str = "Description";
pub const CREATED_AT: &str = "CreatedAt";
pub const UPDATED_AT: &str = "UpdateAt";

pub const DEFINITION: &str = "Definition";
pub const CHECK_OPTION: &str = "CheckOption";
pub const UPDATABLE: &str = "Updatable";

pub const TYPE: &str = "Type";
pub const DB_TYPE: &str = "DbType";
pub const IS_KEY: &str = "IsKey";
pub const LENGTH: &str = "Length";
pub const REQUIRED: &str = "Required";
pub const FORMAT: &str = "Format";
pub const POSITION: &str = "Position";
pub const DEFAULT: &str = "Default";
pub const IDENTITY: &str = "Identity";
