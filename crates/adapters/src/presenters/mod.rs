use platebook_application::{GalleryView, GridCard, OverlaySlide, PageOrigin};
use platebook_domain::Page;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GridContent {
    #[default]
    Loading,
    Cards(Vec<GridCard>),
    Error(String),
}

/// Retained view state the window paints from every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceModel {
    title: Option<String>,
    grid: GridContent,
    hero_image: Option<String>,
    slide: Option<OverlaySlide>,
    overlay_visible: bool,
    scroll_locked: bool,
}

impl SurfaceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn grid(&self) -> &GridContent {
        &self.grid
    }

    pub fn hero_image(&self) -> Option<&str> {
        self.hero_image.as_deref()
    }

    /// The slide on screen, if the overlay is visible.
    pub fn visible_slide(&self) -> Option<&OverlaySlide> {
        self.slide.as_ref().filter(|_| self.overlay_visible)
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl GalleryView for SurfaceModel {
    fn render_grid(&mut self, cards: Vec<GridCard>) {
        self.grid = GridContent::Cards(cards);
    }

    fn show_grid_error(&mut self, message: &str) {
        self.grid = GridContent::Error(message.to_string());
    }

    fn set_hero_image(&mut self, image: &str) {
        self.hero_image = Some(image.to_string());
    }

    fn set_title(&mut self, title: Option<&str>) {
        self.title = title.map(str::to_string);
    }

    fn show_overlay(&mut self, slide: OverlaySlide) {
        self.slide = Some(slide);
        self.overlay_visible = true;
    }

    fn hide_overlay(&mut self) {
        self.overlay_visible = false;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

pub fn present_page_row(position: usize, page: &Page) -> String {
    format!("{}\t{}\t{}", position, page.card_label(), page.image)
}

pub fn present_origin(origin: PageOrigin, page_count: usize) -> String {
    let source = match origin {
        PageOrigin::Remote => "data resource",
        PageOrigin::Embedded => "inline fallback",
    };
    format!("{page_count} pages from {source}")
}

#[cfg(test)]
mod tests {
    use platebook_application::{
        GalleryControls, GalleryEvent, GallerySession, LoadedPages, OverlayTarget,
    };
    use platebook_domain::{PageDocument, PageIndex};

    use super::*;

    fn page(index: i64) -> Page {
        Page::new(
            PageIndex::new(index).expect("index"),
            format!("pages/page-{index:02}.jpg"),
        )
    }

    fn session(indices: &[i64]) -> GallerySession<SurfaceModel> {
        let mut session = GallerySession::new(SurfaceModel::new());
        session.finish_load(Ok(LoadedPages {
            origin: PageOrigin::Embedded,
            document: PageDocument {
                title: Some("presentation".to_string()),
                page_count: Some(indices.len()),
                pages: indices.iter().copied().map(page).collect(),
            },
        }));
        session
    }

    #[test]
    fn starts_out_loading() {
        let surface = SurfaceModel::new();
        assert_eq!(surface.grid(), &GridContent::Loading);
        assert!(surface.visible_slide().is_none());
    }

    #[test]
    fn session_projects_into_surface() {
        let mut session = session(&[7, 3]);
        let surface = session.view();
        assert_eq!(surface.title(), Some("presentation"));
        assert_eq!(surface.hero_image(), Some("pages/page-07.jpg"));
        let GridContent::Cards(cards) = surface.grid() else {
            panic!("grid should hold cards");
        };
        assert_eq!(cards.len(), 2);

        session.handle(GalleryEvent::CardActivated(1));
        let slide = session.view().visible_slide().expect("overlay visible");
        assert_eq!(slide.badge, "Plate 3");
        assert!(session.view().is_scroll_locked());

        session.handle(GalleryEvent::OverlayClicked(OverlayTarget::Scrim));
        assert!(session.view().visible_slide().is_none());
        assert!(!session.view().is_scroll_locked());
    }

    #[test]
    fn hidden_overlay_keeps_last_slide_for_reopen() {
        let mut session = session(&[1, 2, 3]);
        session.open_at(2);
        session.close();
        assert!(!session.view().is_overlay_visible());

        session.open_at(2);
        assert_eq!(
            session.view().visible_slide().map(|slide| slide.badge.as_str()),
            Some("Plate 3")
        );
    }

    #[test]
    fn failed_load_shows_error_text() {
        let mut session = GallerySession::new(SurfaceModel::new());
        session.finish_load(Err(platebook_application::ApplicationError::Network(
            "status code 500".to_string(),
        )));
        assert_eq!(
            session.view().grid(),
            &GridContent::Error("network error: status code 500".to_string())
        );
    }

    #[test]
    fn page_rows_are_tab_separated() {
        assert_eq!(
            present_page_row(0, &page(4)),
            "0\tPlate 04\tpages/page-04.jpg"
        );
        assert_eq!(
            present_origin(PageOrigin::Embedded, 2),
            "2 pages from inline fallback"
        );
    }
}
