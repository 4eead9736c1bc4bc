use platebook_application::{ApplicationError, PageSource};
use platebook_domain::PageDocument;
use url::Url;

use crate::resource::read_text;

/// The published `pages.json` data resource.
#[derive(Debug, Clone)]
pub struct JsonPageSource {
    location: Url,
}

impl JsonPageSource {
    pub fn new(location: Url) -> Self {
        Self { location }
    }
}

impl PageSource for JsonPageSource {
    fn describe(&self) -> String {
        self.location.to_string()
    }

    fn load_pages(&self) -> Result<PageDocument, ApplicationError> {
        let body = read_text(&self.location)?;
        parse_page_document(&body)
    }
}

pub fn parse_page_document(body: &str) -> Result<PageDocument, ApplicationError> {
    serde_json::from_str(body).map_err(|error| ApplicationError::Parse(error.to_string()))
}
