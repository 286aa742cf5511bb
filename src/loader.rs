//! Builds a schema model from a markup tree.
//!
//! Missing or malformed values never fail the load; each one falls back to a
//! default (empty string, `false`, `0`, `Unknown`, or the load time for timestamps).

use chrono::NaiveDateTime;

use crate::convert;
use crate::markup::MarkupNode;
use crate::model::{
    BaseSchemaObject, Constraint, ConstraintType, Field, FieldType, Schema, Table, View,
};
use crate::tags;

pub struct SchemaLoader {
    now: NaiveDateTime,
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLoader {
    pub fn new() -> Self {
        Self::with_now(convert::now())
    }

    /// Loader that uses `now` for every missing or unparsable timestamp.
    pub fn with_now(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn load<N: MarkupNode>(&self, root: &N) -> Schema {
        let mut schema = Schema::default();

        if root.name() != tags::ROOT {
            tracing::debug!(root = root.name(), "root is not a schema node, nothing loaded");
            return schema;
        }

        for node in root.children() {
            match node.name() {
                tags::TABLE => schema.tables.push(self.load_table(node)),
                tags::VIEW => schema.views.push(self.load_view(node)),
                other => tracing::debug!(tag = other, "ignoring unknown schema node"),
            }
        }

        schema
    }

    fn load_table<N: MarkupNode>(&self, node: &N) -> Table {
        Table {
            base: self.load_base(node),
            fields: self.load_fields(node),
            constraints: self.load_constraints(node),
        }
    }

    fn load_view<N: MarkupNode>(&self, node: &N) -> View {
        View {
            base: self.load_base(node),
            definition: convert::to_string(node.child_text(tags::DEFINITION)),
            check_option: convert::to_string(node.attribute(tags::CHECK_OPTION)),
            is_updatable: convert::to_bool(node.attribute(tags::UPDATABLE)),
            fields: self.load_fields(node),
        }
    }

    fn load_fields<N: MarkupNode>(&self, parent: &N) -> Vec<Field> {
        parent
            .children_named(tags::FIELD)
            .map(|node| Field {
                base: self.load_base(node),
                table: convert::to_string(node.attribute(tags::TABLE)),
                field_type: node
                    .attribute(tags::TYPE)
                    .map(FieldType::parse)
                    .unwrap_or_default(),
                db_type: convert::to_string(node.attribute(tags::DB_TYPE)),
                is_key: convert::to_bool(node.attribute(tags::IS_KEY)),
                length: convert::to_int(node.attribute(tags::LENGTH), 0),
                is_required: convert::to_bool(node.attribute(tags::REQUIRED)),
                format: convert::to_string(node.attribute(tags::FORMAT)),
                ordinal_position: convert::to_int(node.attribute(tags::POSITION), 0),
                default: convert::to_string(node.child_text(tags::DEFAULT)),
                is_identity: convert::to_bool(node.attribute(tags::IDENTITY)),
            })
            .collect()
    }

    /// Table, column, type and position come from the enclosing node's attributes,
    /// not from the constraint node itself.
    fn load_constraints<N: MarkupNode>(&self, parent: &N) -> Vec<Constraint> {
        parent
            .children_named(tags::CONSTRAINT)
            .map(|node| Constraint {
                base: self.load_base(node),
                table: convert::to_string(parent.attribute(tags::TABLE)),
                column: convert::to_string(parent.attribute(tags::FIELD)),
                constraint_type: parent
                    .attribute(tags::TYPE)
                    .map(ConstraintType::parse)
                    .unwrap_or_default(),
                position: convert::to_int(parent.attribute(tags::POSITION), 0),
            })
            .collect()
    }

    fn load_base<N: MarkupNode>(&self, node: &N) -> BaseSchemaObject {
        BaseSchemaObject {
            schema: convert::to_string(node.attribute(tags::SCHEMA)),
            catalog: convert::to_string(node.attribute(tags::CATALOG)),
            name: convert::to_string(node.attribute(tags::NAME)),
            description: convert::to_string(node.child_text(tags::DESCRIPTION)),
            created_at: convert::to_timestamp(node.attribute(tags::CREATED_AT), self.now),
            updated_at: convert::to_timestamp(node.attribute(tags::UPDATED_AT), self.now),
        }
    }
}

/// Build a schema from a tree whose root should be a `Schema` node.
pub fn load_schema<N: MarkupNode>(root: &N) -> Schema {
    SchemaLoader::new().load(root)
}
