use async_trait::async_trait;
use crate::Result;

/// A successfully retrieved page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    /// UTF-8 bytes. Fetchers transcode from the charset the server declares.
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Body as a string, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET a page; transport failures and non-success statuses are errors
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}
