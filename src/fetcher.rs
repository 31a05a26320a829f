use crate::errors::AppResult;
use std::path::Path;
use tracing::info;
use url::Url;

/// Fetches the result page source.
///
/// The page is downloaded once; there is no retry.
///
/// # Errors
///
/// Returns an error if:
/// - The URL cannot be parsed
/// - The HTTP request fails or returns an error status
pub async fn fetch_page(client: &reqwest::Client, input_url: &str) -> AppResult<String> {
    let url = Url::parse(input_url)?;

    info!(url = url.as_str(), "Fetching result page");
    let body = client
        .get(url.as_str())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    info!(bytes = body.len(), "Result page fetched");

    Ok(body)
}

/// Reads a previously saved result page from disk.
pub async fn read_page(path: &Path) -> AppResult<String> {
    let body = tokio::fs::read_to_string(path).await?;
    info!(path = %path.display(), bytes = body.len(), "Result page read");
    Ok(body)
}
