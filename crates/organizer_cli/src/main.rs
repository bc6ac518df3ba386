//! CLI probe for `organizer_core`.
//!
//! # Responsibility
//! - Print the core version and the DTO catalog with field metadata.
//! - Start file logging when `ORGANIZER_LOG_DIR` is set.

use log::info;
use organizer_core::{catalog, core_version, FieldFormat, LoggingConfig};
use serde_json::json;

fn main() {
    let config = LoggingConfig::from_env();
    match config.apply() {
        Ok(true) => info!(
            "event=cli_start module=cli status=ok level={}",
            config.level
        ),
        Ok(false) => {}
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    println!("organizer_core version={}", core_version());
    for entry in catalog() {
        let fields: Vec<_> = entry
            .fields
            .iter()
            .map(|field| {
                json!({
                    "property": field.property,
                    "json": field.json_name,
                    "required": field.required.map(|rule| rule.message),
                    "range": field.range.map(|rule| json!({
                        "min": rule.min,
                        "max": rule.max,
                        "message": rule.message,
                    })),
                    "format": field.format.map(|format| match format {
                        FieldFormat::EmailAddress { message } => json!({
                            "kind": "emailAddress",
                            "message": message,
                        }),
                    }),
                })
            })
            .collect();
        println!("{} {}", entry.kind, json!(fields));
    }
}
