//! Serializer for converting a schema model to a markup tree.

use crate::convert;
use crate::markup::{Document, Element};
use crate::model::{
    BaseSchemaObject, Constraint, ConstraintType, Field, FieldType, Schema, Table, View,
};
use crate::tags;

/// Serialize a Schema to a document rooted at a `Schema` element.
///
/// Empty strings, zero integers, `Unknown` enums and unset timestamps are left
/// out. Booleans are always written.
pub fn serialize_schema(schema: &Schema) -> Document {
    let mut root = Element::new(tags::ROOT);

    for table in &schema.tables {
        root.push_child(serialize_table(table));
    }
    for view in &schema.views {
        root.push_child(serialize_view(view));
    }

    Document { root }
}

fn serialize_table(table: &Table) -> Element {
    let mut node = base_node(tags::TABLE, &table.base);

    for field in &table.fields {
        node.push_child(serialize_field(field));
    }
    for constraint in &table.constraints {
        node.push_child(serialize_constraint(constraint));
    }

    node
}

fn serialize_view(view: &View) -> Element {
    let mut node = base_node(tags::VIEW, &view.base);

    node.push_text_child_if_not_empty(tags::DEFINITION, &view.definition);
    node.push_attribute_if_not_empty(tags::CHECK_OPTION, &view.check_option);
    node.push_attribute(tags::UPDATABLE, view.is_updatable);

    for field in &view.fields {
        node.push_child(serialize_field(field));
    }

    node
}

fn serialize_field(field: &Field) -> Element {
    let mut node = base_node(tags::FIELD, &field.base);

    node.push_attribute_if_not_empty(tags::TABLE, &field.table);
    if field.field_type != FieldType::Unknown {
        node.push_attribute(tags::TYPE, field.field_type.as_str());
    }
    node.push_attribute_if_not_empty(tags::DB_TYPE, &field.db_type);
    node.push_attribute(tags::IS_KEY, field.is_key);
    push_int_if_not_zero(&mut node, tags::LENGTH, field.length);
    node.push_attribute(tags::REQUIRED, field.is_required);
    node.push_attribute_if_not_empty(tags::FORMAT, &field.format);
    push_int_if_not_zero(&mut node, tags::POSITION, field.ordinal_position);
    node.push_text_child_if_not_empty(tags::DEFAULT, &field.default);
    node.push_attribute(tags::IDENTITY, field.is_identity);

    node
}

// Written on the constraint node itself; the loader reads these from the parent.
fn serialize_constraint(constraint: &Constraint) -> Element {
    let mut node = base_node(tags::CONSTRAINT, &constraint.base);

    node.push_attribute_if_not_empty(tags::TABLE, &constraint.table);
    node.push_attribute_if_not_empty(tags::FIELD, &constraint.column);
    if constraint.constraint_type != ConstraintType::Unknown {
        node.push_attribute(tags::TYPE, constraint.constraint_type.as_str());
    }
    push_int_if_not_zero(&mut node, tags::POSITION, constraint.position);

    node
}

fn base_node(tag: &str, base: &BaseSchemaObject) -> Element {
    let mut node = Element::new(tag);

    node.push_attribute_if_not_empty(tags::SCHEMA, &base.schema);
    node.push_attribute_if_not_empty(tags::CATALOG, &base.catalog);
    node.push_attribute_if_not_empty(tags::NAME, &base.name);
    node.push_text_child_if_not_empty(tags::DESCRIPTION, &base.description);
    if !convert::is_unset_timestamp(&base.created_at) {
        node.push_attribute(tags::CREATED_AT, convert::format_timestamp(&base.created_at));
    }
    if !convert::is_unset_timestamp(&base.updated_at) {
        node.push_attribute(tags::UPDATED_AT, convert::format_timestamp(&base.updated_at));
    }

    node
}

fn push_int_if_not_zero(node: &mut Element, name: &str, value: i32) {
    if value != 0 {
        node.push_attribute(name, value);
    }
}
