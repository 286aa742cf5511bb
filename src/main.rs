use schemaxml::{Schema, WriteOptions};
use std::env;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.xml> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -o, --output <file>   Output file (default: stdout)");
        eprintln!("  --indent <n>          Spaces per nesting level (default: 2)");
        eprintln!("  --no-declaration      Omit the <?xml ...?> declaration");
        eprintln!("  --summary             Print tables and views instead of XML");
        process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path: Option<String> = None;
    let mut options = WriteOptions::default();
    let mut summary = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "--indent" => {
                i += 1;
                if i < args.len() {
                    options.indent = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid indent: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            "--no-declaration" => options.declaration = false,
            "--summary" => summary = true,
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let schema = match schemaxml::load(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let output = if summary {
        render_summary(&schema)
    } else {
        schemaxml::to_xml_string_with(&schema, &options)
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &output) {
                eprintln!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("schemaxml=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_summary(schema: &Schema) -> String {
    let mut output = String::new();

    for table in &schema.tables {
        output.push_str(&format!(
            "table {} ({} fields, {} constraints)\n",
            qualified_name(&table.base.schema, &table.base.name),
            table.fields.len(),
            table.constraints.len()
        ));
    }
    for view in &schema.views {
        output.push_str(&format!(
            "view {} ({} fields{})\n",
            qualified_name(&view.base.schema, &view.base.name),
            view.fields.len(),
            if view.is_updatable { ", updatable" } else { "" }
        ));
    }

    output
}

fn qualified_name(schema: &str, name: &str) -> String {
    if schema.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", schema, name)
    }
}
