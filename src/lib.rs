pub mod convert;
pub mod error;
pub mod loader;
pub mod markup;
pub mod model;
pub mod serializer;
pub mod tags;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use wasm_bindgen::prelude::*;

pub use error::SchemaXmlError;
pub use loader::{SchemaLoader, load_schema};
pub use markup::{MarkupError, WriteOptions};
pub use model::{
    BaseSchemaObject, Constraint, ConstraintType, Field, FieldType, Schema, Table, View,
};
pub use serializer::serialize_schema;

use markup::XmlWriter;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Load a schema from an XML file.
///
/// A missing path, or one that is not a regular file, yields an empty schema.
/// A file that exists but is not well-formed XML in its declared encoding is an
/// error.
pub fn load(path: impl AsRef<Path>) -> Result<Schema, SchemaXmlError> {
    let path = path.as_ref();

    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => {
            tracing::info!(path = %path.display(), "schema path is not a file, using empty schema");
            return Ok(Schema::default());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "schema file not found, using empty schema");
            return Ok(Schema::default());
        }
        Err(source) => {
            return Err(SchemaXmlError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let bytes = fs::read(path).map_err(|source| SchemaXmlError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let schema = from_xml_bytes(&bytes).map_err(|source| SchemaXmlError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        tables = schema.tables.len(),
        views = schema.views.len(),
        "loaded schema"
    );
    Ok(schema)
}

/// Save a schema to an XML file, replacing any existing file.
pub fn save(schema: &Schema, path: impl AsRef<Path>) -> Result<(), SchemaXmlError> {
    save_with(schema, path, &WriteOptions::default())
}

pub fn save_with(
    schema: &Schema,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<(), SchemaXmlError> {
    let path = path.as_ref();
    let xml = to_xml_string_with(schema, options);

    fs::write(path, xml).map_err(|source| SchemaXmlError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        tables = schema.tables.len(),
        views = schema.views.len(),
        "saved schema"
    );
    Ok(())
}

/// Parse XML text into a schema.
pub fn from_xml_str(source: &str) -> Result<Schema, MarkupError> {
    let document = markup::parse(source)?;
    Ok(load_schema(&document.root))
}

/// Parse raw XML bytes into a schema, decoding them per the XML declaration.
pub fn from_xml_bytes(bytes: &[u8]) -> Result<Schema, MarkupError> {
    from_xml_str(&markup::decode(bytes)?)
}

pub fn to_xml_string(schema: &Schema) -> String {
    to_xml_string_with(schema, &WriteOptions::default())
}

pub fn to_xml_string_with(schema: &Schema, options: &WriteOptions) -> String {
    let document = serialize_schema(schema);
    XmlWriter::new(options.clone()).render(&document)
}

/// Parse a schema document and write it back in canonical form
#[wasm_bindgen(js_name = "normalizeSchemaXml")]
pub fn normalize_schema_xml(source: &str) -> Result<String, String> {
    let schema = from_xml_str(source).map_err(|e| e.to_string())?;
    Ok(to_xml_string(&schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 30)
            .unwrap()
    }

    fn base(name: &str, day: u32) -> BaseSchemaObject {
        BaseSchemaObject {
            schema: "sales".into(),
            catalog: "erp".into(),
            name: name.into(),
            description: format!("{name} description"),
            created_at: ts(2023, 1, day, 9),
            updated_at: ts(2024, 6, day, 17),
        }
    }

    fn sample_schema() -> Schema {
        Schema {
            tables: vec![
                Table {
                    base: base("customers", 1),
                    fields: vec![
                        Field {
                            base: base("id", 2),
                            table: "customers".into(),
                            field_type: FieldType::Integer,
                            db_type: "int".into(),
                            is_key: true,
                            length: 4,
                            is_required: true,
                            format: "D".into(),
                            ordinal_position: 1,
                            default: "0".into(),
                            is_identity: true,
                        },
                        Field {
                            base: base("name", 3),
                            table: "customers".into(),
                            field_type: FieldType::String,
                            db_type: "nvarchar".into(),
                            is_key: true,
                            length: 200,
                            is_required: true,
                            format: "text & <markup>".into(),
                            ordinal_position: 2,
                            default: "'anonymous'".into(),
                            is_identity: true,
                        },
                    ],
                    constraints: vec![Constraint {
                        base: base("pk_customers", 4),
                        ..Constraint::default()
                    }],
                },
                Table {
                    base: base("orders", 5),
                    fields: vec![],
                    constraints: vec![],
                },
            ],
            views: vec![View {
                base: base("big_customers", 6),
                fields: vec![Field {
                    base: base("id", 7),
                    table: "big_customers".into(),
                    field_type: FieldType::Long,
                    db_type: "bigint".into(),
                    is_key: true,
                    length: 8,
                    is_required: true,
                    format: "N0".into(),
                    ordinal_position: 1,
                    default: "1".into(),
                    is_identity: true,
                }],
                definition: "SELECT id FROM customers WHERE total > 1000".into(),
                check_option: "LOCAL".into(),
                is_updatable: true,
            }],
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.xml");
        let schema = sample_schema();

        save(&schema, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, schema);
    }

    #[test]
    fn test_constraint_values_do_not_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("constraints.xml");
        let mut schema = Schema::default();
        schema.tables.push(Table {
            base: base("orders", 1),
            fields: vec![],
            constraints: vec![Constraint {
                base: base("fk_orders_customers", 2),
                table: "orders".into(),
                column: "customer_id".into(),
                constraint_type: ConstraintType::ForeignKey,
                position: 1,
            }],
        });

        save(&schema, &path).unwrap();
        let xml = fs::read_to_string(&path).unwrap();
        assert!(xml.contains(r#"Field="customer_id""#));

        let loaded = load(&path).unwrap();
        let constraint = &loaded.tables[0].constraints[0];
        assert_eq!(constraint.base, schema.tables[0].constraints[0].base);
        assert_eq!(constraint.table, "");
        assert_eq!(constraint.column, "");
        assert_eq!(constraint.constraint_type, ConstraintType::Unknown);
        assert_eq!(constraint.position, 0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let schema = load(dir.path().join("nonexistent.xml")).unwrap();
        assert!(schema.tables.is_empty());
        assert!(schema.views.is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xml");
        fs::write(&path, "<Schema><Table></Schema>").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(
            err,
            SchemaXmlError::Malformed {
                source: MarkupError::Xml(_),
                ..
            }
        ));
        assert!(err.to_string().contains("broken.xml"));
    }

    #[test]
    fn test_load_directory_is_empty_schema() {
        let dir = tempfile::tempdir().unwrap();
        let schema = load(dir.path()).unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_load_latin1_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.xml");
        fs::write(
            &path,
            b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<Schema><Table Name=\"caf\xe9\" /></Schema>",
        )
        .unwrap();

        let schema = load(&path).unwrap();
        assert_eq!(schema.tables[0].base.name, "caf\u{e9}");
    }

    #[test]
    fn test_load_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_utf8.xml");
        fs::write(&path, b"<Schema><Table Name=\"caf\xe9\" /></Schema>").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(
            err,
            SchemaXmlError::Malformed {
                source: MarkupError::InvalidEncoding(_),
                ..
            }
        ));
    }

    #[test]
    fn test_load_crlf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.xml");
        fs::write(
            &path,
            "<Schema>\r\n<View Name=\"v\">\r\n<Definition>SELECT a\r\nFROM t</Definition>\r\n</View>\r\n</Schema>\r\n",
        )
        .unwrap();

        let schema = load(&path).unwrap();
        assert_eq!(schema.views[0].definition, "SELECT a\nFROM t");
    }

    #[test]
    fn test_load_deeply_nested_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.xml");
        let depth = 200_000;
        fs::write(
            &path,
            format!("<Schema>{}{}</Schema>", "<a>".repeat(depth), "</a>".repeat(depth)),
        )
        .unwrap();

        assert!(matches!(
            load(&path),
            Err(SchemaXmlError::Malformed { .. })
        ));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.xml");
        fs::write(&path, "old content that is much longer than needed").unwrap();

        save(&Schema::default(), &path).unwrap();
        let xml = fs::read_to_string(&path).unwrap();
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Schema />\n");
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("schema.xml");

        let err = save(&Schema::default(), &path).unwrap_err();
        assert!(matches!(err, SchemaXmlError::Write { .. }));
    }

    #[test]
    fn test_load_reads_fixture_text() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<Schema>
  <Table Schema="dbo" Catalog="shop" Name="products" CreatedAt="2022-10-01T00:00:00" UpdateAt="2022-10-02T00:00:00">
    <Description>Sellable products</Description>
    <Field Table="products" Type="Decimal" DbType="money" IsKey="false" Length="8"
           Required="true" Format="C2" Position="3" Identity="false" Name="price">
      <Default>0</Default>
    </Field>
  </Table>
  <Routine Name="ignored" />
  <View Schema="dbo" Name="cheap_products" CheckOption="NONE" Updatable="false">
    <Definition>SELECT * FROM products WHERE price &lt; 10</Definition>
    <Field Name="price" Type="Decimal" />
  </View>
</Schema>
"#;
        let schema = from_xml_str(xml).unwrap();
        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.views.len(), 1);

        let price = &schema.tables[0].fields[0];
        assert_eq!(price.base.name, "price");
        assert_eq!(price.field_type, FieldType::Decimal);
        assert_eq!(price.length, 8);
        assert_eq!(price.format, "C2");
        assert_eq!(price.ordinal_position, 3);
        assert_eq!(price.default, "0");

        let view = &schema.views[0];
        assert_eq!(view.definition, "SELECT * FROM products WHERE price < 10");
        assert_eq!(view.check_option, "NONE");
        assert!(!view.is_updatable);
    }

    #[test]
    fn test_normalize_schema_xml() {
        let xml = r#"<Schema><Table Name="t"><Field Name="c" Type="bogus"/></Table></Schema>"#;
        let normalized = normalize_schema_xml(xml).unwrap();
        assert!(normalized.contains(r#"<Table Name="t""#));
        assert!(!normalized.contains("bogus"));

        assert!(normalize_schema_xml("<Schema>").is_err());
    }
}
