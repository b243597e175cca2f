use crate::presentation::views::ProjectionView;
use crate::types::{FieldArg, OutputFormat};
use anyhow::Result;
use datasieve_client::SieveClient;
use datasieve_core::{project, validate};
use datasieve_types::Selection;
use std::path::Path;

pub fn handle(
    endpoint: &str,
    file: Option<&Path>,
    select: &[FieldArg],
    format: OutputFormat,
) -> Result<()> {
    let raw = super::validate::read_payload_text(file)?;

    // Validation gate: nothing goes on the wire unless the payload parses.
    let payload = validate(&raw)?;

    let selection = if select.is_empty() {
        Selection::all()
    } else {
        select.iter().map(|field| field.into_field()).collect()
    };

    let client = SieveClient::new(endpoint)?;
    let response = client.submit(&payload)?;

    match format {
        OutputFormat::Json => {
            let rows: serde_json::Map<String, serde_json::Value> = project(&response, &selection)
                .map(|row| {
                    (
                        row.field.key().to_string(),
                        serde_json::json!(row.values),
                    )
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Plain => print!("{}", ProjectionView::new(&response, &selection)),
    }

    Ok(())
}
