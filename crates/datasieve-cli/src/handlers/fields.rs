use crate::types::OutputFormat;
use anyhow::Result;
use datasieve_types::ResponseField;

pub fn handle(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let fields: Vec<_> = ResponseField::DISPLAY_ORDER
                .into_iter()
                .map(|field| serde_json::json!({ "name": field.key(), "label": field.label() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
        OutputFormat::Plain => {
            println!("{:<30} LABEL", "FIELD");
            println!("{}", "-".repeat(60));
            for field in ResponseField::DISPLAY_ORDER {
                println!("{:<30} {}", field.key(), field.label());
            }
        }
    }

    Ok(())
}
