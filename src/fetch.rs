use crate::error::ExtractError;
use reqwest::header::USER_AGENT;
use reqwest::Url;
use tracing::debug;

/// One GET request, built once per invocation.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: Url,
    pub user_agent: String,
}

impl FetchRequest {
    pub fn new(url: &str, user_agent: &str) -> Result<Self, ExtractError> {
        let url = Url::parse(url).map_err(|e| ExtractError::InvalidUrl(e.to_string()))?;
        Ok(FetchRequest {
            url,
            user_agent: user_agent.to_string(),
        })
    }
}

/// Fetches the page and decodes the body as strict UTF-8.
///
/// Any non-2xx status is an error, matching what a plain `urlopen` style
/// fetch does. The body is read as raw bytes first so an invalid byte
/// sequence surfaces as a decode error instead of being replaced silently.
pub async fn fetch_page(
    client: &reqwest::Client,
    request: &FetchRequest,
) -> Result<String, ExtractError> {
    debug!("Visit {}", request.url);

    let response = client
        .get(request.url.clone())
        .header(USER_AGENT, request.user_agent.as_str())
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractError::Status(status));
    }

    let bytes = response.bytes().await?;
    debug!("Fetched {} bytes from {}", bytes.len(), request.url);

    Ok(String::from_utf8(bytes.to_vec())?)
}
