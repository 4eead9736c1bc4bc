use platebook_application::{ApplicationError, PageSource};
use platebook_domain::PageDocument;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use url::Url;

use crate::resource::read_text;

/// Page data embedded in the hosting document, e.g.
/// `<script id="pages-inline" type="application/json">{"pages": [...]}</script>`.
#[derive(Debug, Clone)]
pub struct InlinePageSource {
    document: Url,
    element_id: String,
}

impl InlinePageSource {
    pub fn new(document: Url, element_id: impl Into<String>) -> Self {
        Self {
            document,
            element_id: element_id.into(),
        }
    }

    pub fn parse_document(&self, html: &str) -> Result<PageDocument, ApplicationError> {
        let text = extract_element_text(html, &self.element_id)?.ok_or_else(|| {
            ApplicationError::MissingData(format!(
                "no element with id {} in {}",
                self.element_id, self.document
            ))
        })?;

        let value: Value = serde_json::from_str(text.trim())
            .map_err(|error| ApplicationError::Parse(format!("inline data: {error}")))?;
        if value.get("pages").map_or(true, Value::is_null) {
            return Err(ApplicationError::MissingData(
                "inline data has no pages field".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|error| ApplicationError::Parse(format!("inline data: {error}")))
    }
}

impl PageSource for InlinePageSource {
    fn describe(&self) -> String {
        format!("{}#{}", self.document, self.element_id)
    }

    fn load_pages(&self) -> Result<PageDocument, ApplicationError> {
        let html = read_text(&self.document)?;
        self.parse_document(&html)
    }
}

/// Raw text content of the first element carrying `id="<element_id>"`.
pub fn extract_element_text<'a>(
    html: &'a str,
    element_id: &str,
) -> Result<Option<&'a str>, ApplicationError> {
    let opening = case_insensitive(&format!(
        r#"<([a-z][a-z0-9-]*)\b[^>]*\bid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(element_id)
    ))?;
    let Some(captures) = opening.captures(html) else {
        return Ok(None);
    };
    let (Some(tag), Some(whole)) = (captures.get(1), captures.get(0)) else {
        return Ok(None);
    };

    let rest = &html[whole.end()..];
    let closing = case_insensitive(&format!(r"</\s*{}\s*>", regex::escape(tag.as_str())))?;
    Ok(closing.find(rest).map(|end| &rest[..end.start()]))
}

fn case_insensitive(pattern: &str) -> Result<Regex, ApplicationError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|error| ApplicationError::InvalidInput(error.to_string()))
}
