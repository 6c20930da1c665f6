use crate::domain::model::Entry;
use crate::domain::ports::RosterSource;
use crate::utils::error::{DropfillError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches the roster with a plain GET. A non-2xx status is a failure, same
/// as a network error; the caller decides whether that surfaces.
pub struct HttpRosterSource {
    client: Client,
    url: Url,
}

impl HttpRosterSource {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Resolves a page-relative roster path (e.g. `idjson.txt`) against the
    /// hosting page's URL.
    pub fn from_page(page: &Url, relative: &str) -> Result<Self> {
        Ok(Self::new(page.join(relative)?))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl RosterSource for HttpRosterSource {
    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        tracing::debug!("Requesting roster from: {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        tracing::debug!("Roster response status: {}", response.status());
        if !response.status().is_success() {
            return Err(DropfillError::HttpStatusError {
                status: response.status().as_u16(),
                url: self.url.to_string(),
            });
        }

        let entries: Vec<Entry> = response.json().await?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page_joins_relative_path() {
        let page = Url::parse("https://example.com/group/page.html").unwrap();
        let source = HttpRosterSource::from_page(&page, "idjson.txt").unwrap();
        assert_eq!(source.url().as_str(), "https://example.com/group/idjson.txt");
    }

    #[test]
    fn test_from_page_accepts_absolute_url() {
        let page = Url::parse("https://example.com/page.html").unwrap();
        let source = HttpRosterSource::from_page(&page, "https://other.net/roster.json").unwrap();
        assert_eq!(source.url().as_str(), "https://other.net/roster.json");
    }
}
