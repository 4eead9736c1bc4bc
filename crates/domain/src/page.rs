use serde::{Deserialize, Deserializer, Serialize};

use crate::DomainError;

/// Display ordinal of a plate. Always positive; not required to be contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PageIndex(u32);

impl PageIndex {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        u32::try_from(value)
            .ok()
            .filter(|ordinal| *ordinal > 0)
            .map(Self)
            .ok_or(DomainError::InvalidPageIndex(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for PageIndex {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageIndex> for i64 {
    fn from(value: PageIndex) -> Self {
        i64::from(value.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub index: PageIndex,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Page {
    pub fn new(index: PageIndex, image: impl Into<String>) -> Self {
        Self {
            index,
            image: image.into(),
            text: None,
        }
    }

    /// Grid label, ordinal padded to two digits.
    pub fn card_label(&self) -> String {
        format!("Plate {:02}", self.index.get())
    }

    /// Alt text and overlay badge.
    pub fn plate_label(&self) -> String {
        format!("Plate {}", self.index.get())
    }

    pub fn caption(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// The `{ "pages": [...] }` payload shared by the data resource and the inline fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pages: Vec<Page>,
}

/// `"pages": null` reads the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Page>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Page>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PageDocument {
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self {
            title: None,
            page_count: None,
            pages,
        }
    }
}
