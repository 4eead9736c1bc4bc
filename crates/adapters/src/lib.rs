pub mod presenters;
pub mod resource;
pub mod site;
pub mod sources;

pub use presenters::{present_origin, present_page_row, GridContent, SurfaceModel};
pub use site::SiteLocation;
pub use sources::{extract_element_text, InlinePageSource, JsonPageSource};
