//! Example listing the input classes generated from a GraphQL schema.
//!
//! Run with: `cargo run --example generate -- path/to/schema.graphql`
//!
//! Without an argument a small built-in schema is used.

use inputgen::prelude::*;
use std::path::Path;

const DEMO_SCHEMA: &str = r#"
scalar DateTime

enum Order { ASC DESC }

input SearchInput {
    query: String!
    filters: [FilterInput!] = []
    sortOrder: Order = ASC
    createdAfter: DateTime
}

input FilterInput {
    field: String!
    values: [String]!
    nested: FilterInput
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GeneratorConfig::new().scalar(
        "DateTime",
        ScalarData::new("datetime").with_import("datetime"),
    );

    let module = match std::env::args().nth(1) {
        Some(path) => generate_from_file(Path::new(&path), &config)?,
        None => generate_from_sdl(DEMO_SCHEMA, &config)?,
    };

    for import in module.imports() {
        println!(
            "from {}{} import {}",
            ".".repeat(import.level as usize),
            import.module,
            import.names.join(", ")
        );
    }

    for class_def in module.class_defs() {
        println!("\nclass {}:", class_def.name);
        for field in class_def.fields() {
            let default = if field.value.is_some() { " = ..." } else { "" };
            println!("    {}{}", field.target, default);
        }
    }

    Ok(())
}
