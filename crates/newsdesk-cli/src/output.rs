use crate::cli::OutputFormat;
use crate::commands::ResponseEnvelope;
use crate::error::CliError;

pub fn render(
    envelope: &ResponseEnvelope,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(envelope)?,
    }

    Ok(())
}

fn render_table(envelope: &ResponseEnvelope) -> Result<(), CliError> {
    println!("request_id: {}", envelope.request_id);
    println!("latency_ms: {}", envelope.latency_ms);

    println!("data:");
    let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
    for line in pretty_data.lines() {
        println!("  {line}");
    }

    Ok(())
}
