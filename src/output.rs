use crate::errors::AppResult;
use crate::models::{Notice, OutputFormat};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Renders notices as pretty JSON (two-space indent) or YAML.
///
/// Every field is written, empty strings included.
pub fn render(notices: &[Notice], format: OutputFormat) -> AppResult<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(notices)?,
        OutputFormat::Yaml => serde_yaml::to_string(notices)?,
    };
    Ok(rendered)
}

/// Reads back a notice sequence produced by [`render`].
pub fn parse(text: &str, format: OutputFormat) -> AppResult<Vec<Notice>> {
    let notices = match format {
        OutputFormat::Json => serde_json::from_str(text)?,
        OutputFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(notices)
}

/// Writes rendered output to `path`, or to stdout when no path is given.
pub async fn write(rendered: &str, path: Option<&Path>) -> AppResult<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, rendered).await?;
            info!(
                bytes = rendered.len(),
                path = %path.display(),
                "Output written"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
