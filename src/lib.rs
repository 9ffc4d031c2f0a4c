use tracing::info;

mod error;
mod extract;
mod fetch;

pub use error::ExtractError;
pub use extract::{extract_links, ExtractionQuery};
pub use fetch::{fetch_page, FetchRequest};

/// Generic browser identity, enough to get past trivial bot-blocking.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Fetches one page and pulls out the hrefs of anchors labelled with a
/// target text. One outbound request per `extract` call, nothing cached.
#[derive(Debug, Clone)]
pub struct PageLinkExtractor {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for PageLinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLinkExtractor {
    pub fn new() -> Self {
        PageLinkExtractor {
            client: reqwest::Client::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Fetch `url`, decode the body and return the href of every anchor
    /// whose text starts with `anchor_text`, in document order. An empty
    /// result is not an error; only the fetch itself can fail.
    pub async fn extract(
        &self,
        url: &str,
        anchor_text: &str,
    ) -> Result<Vec<String>, ExtractError> {
        let request = FetchRequest::new(url, &self.user_agent)?;
        let html = fetch_page(&self.client, &request).await?;

        let query = ExtractionQuery::new(anchor_text);
        let links = extract_links(&html, &query);
        info!("Extracted {} link(s) for {:?}", links.len(), anchor_text);

        Ok(links)
    }
}
