mod error;
mod events;
mod grid;
mod loader;
mod overlay;
mod ports;
mod session;

pub use error::ApplicationError;
pub use events::{dispatch, GalleryEvent, Key, OverlayTarget};
pub use grid::{build_cards, render_grid, GridCard};
pub use loader::{LoadedPages, PageLoader, PageOrigin};
pub use overlay::OverlaySlide;
pub use ports::{GalleryControls, GalleryView, PageSource};
pub use session::{GallerySession, LoadStatus};
