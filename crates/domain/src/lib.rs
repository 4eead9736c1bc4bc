mod error;
mod gallery;
mod page;

pub use error::DomainError;
pub use gallery::{clamp_position, GalleryState, OverlayPhase};
pub use page::{Page, PageDocument, PageIndex};
