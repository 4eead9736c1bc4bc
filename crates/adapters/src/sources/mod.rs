mod inline;
mod json;

pub use inline::{extract_element_text, InlinePageSource};
pub use json::{parse_page_document, JsonPageSource};
