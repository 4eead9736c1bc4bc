use platebook_domain::{Page, PageDocument};

use crate::{ApplicationError, GridCard, OverlaySlide};

pub trait PageSource {
    /// Human-readable location, used in logs.
    fn describe(&self) -> String;

    fn load_pages(&self) -> Result<PageDocument, ApplicationError>;
}

/// Output surface the session writes into. Implementations keep whatever
/// retained state the window needs to paint.
pub trait GalleryView {
    fn render_grid(&mut self, cards: Vec<GridCard>);

    fn show_grid_error(&mut self, message: &str);

    fn set_hero_image(&mut self, image: &str);

    fn set_title(&mut self, title: Option<&str>);

    fn show_overlay(&mut self, slide: OverlaySlide);

    fn hide_overlay(&mut self);

    fn set_scroll_locked(&mut self, locked: bool);
}

/// Operations the input layer drives.
pub trait GalleryControls {
    /// Replaces the gallery's pages and redraws the grid from them.
    fn render(&mut self, pages: &[Page]);

    fn open_at(&mut self, index: i64);

    fn close(&mut self);

    fn navigate(&mut self, offset: i64);

    fn is_overlay_open(&self) -> bool;
}
