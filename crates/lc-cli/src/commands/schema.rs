use lc_schema::SchemaRegistry;

use crate::cli::{GlobalFlags, OutputFormat, SchemaArgs};
use crate::output;

/// Handle `lifecourse schema [NAME]`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let rendered = render(&registry, args.name.as_deref(), flags.format)?;
    output::emit(&rendered, flags.quiet);
    Ok(())
}

fn render(
    registry: &SchemaRegistry,
    name: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match name {
        Some(name) => {
            let schema = registry.get(name).ok_or_else(|| {
                anyhow::anyhow!("Schema not found: {name} (run 'lifecourse schema' to list names)")
            })?;
            output::render(schema, format)
        }
        None => {
            let names: Vec<_> = registry.names().collect();
            if format == OutputFormat::Text {
                Ok(names.join("\n"))
            } else {
                output::render(&names, format)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_names_one_per_line() {
        let registry = SchemaRegistry::new();
        let text = render(&registry, None, OutputFormat::Text).unwrap();
        assert!(text.lines().any(|line| line == "questions"));
        assert_eq!(text.lines().count(), registry.len());
    }

    #[test]
    fn unknown_schema_is_an_error() {
        let registry = SchemaRegistry::new();
        let error = render(&registry, Some("nope"), OutputFormat::Json).unwrap_err();
        assert!(error.to_string().contains("nope"));
    }

    #[test]
    fn known_schema_renders_as_json() {
        let registry = SchemaRegistry::new();
        let text = render(&registry, Some("graph"), OutputFormat::Raw).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.is_object());
    }
}
