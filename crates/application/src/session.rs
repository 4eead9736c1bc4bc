use platebook_domain::{GalleryState, Page, PageDocument};
use tracing::debug;

use crate::{
    dispatch, render_grid, ApplicationError, GalleryControls, GalleryEvent, GalleryView,
    LoadedPages, OverlaySlide, PageLoader, PageOrigin,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded(PageOrigin),
    Failed,
}

/// Owns the gallery state and the view it is projected into.
pub struct GallerySession<V: GalleryView> {
    state: GalleryState,
    view: V,
    load_status: LoadStatus,
}

impl<V: GalleryView> GallerySession<V> {
    pub fn new(view: V) -> Self {
        Self {
            state: GalleryState::new(),
            view,
            load_status: LoadStatus::Pending,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    pub fn load_with(&mut self, loader: &PageLoader) {
        let result = loader.load();
        self.finish_load(result);
    }

    pub fn finish_load(&mut self, result: Result<LoadedPages, ApplicationError>) {
        match result {
            Ok(LoadedPages { origin, document }) => {
                let PageDocument { title, pages, .. } = document;
                self.view.set_title(title.as_deref());
                self.apply_pages(pages);
                if let Some(first) = self.state.pages().first() {
                    self.view.set_hero_image(&first.image);
                }
                self.load_status = LoadStatus::Loaded(origin);
            }
            Err(error) => {
                self.state.replace_pages(Vec::new());
                self.view.hide_overlay();
                self.view.set_scroll_locked(false);
                self.view.show_grid_error(&error.to_string());
                self.load_status = LoadStatus::Failed;
            }
        }
    }

    pub fn handle(&mut self, event: GalleryEvent) {
        debug!(?event, "gallery event");
        dispatch(self, event);
    }

    /// Grid cards and overlay positions always refer to the same list.
    fn apply_pages(&mut self, pages: Vec<Page>) {
        let was_open = self.state.is_open();
        self.state.replace_pages(pages);
        render_grid(&mut self.view, self.state.pages());
        if self.state.is_open() {
            self.show_current();
        } else if was_open {
            self.view.hide_overlay();
            self.view.set_scroll_locked(false);
        }
    }

    fn show_current(&mut self) {
        let position = self.state.current();
        let total = self.state.len();
        let Some(page) = self.state.current_page() else {
            return;
        };
        self.view.show_overlay(OverlaySlide::new(position, total, page));
        self.view.set_scroll_locked(true);
    }
}

impl<V: GalleryView> GalleryControls for GallerySession<V> {
    fn render(&mut self, pages: &[Page]) {
        self.apply_pages(pages.to_vec());
    }

    fn open_at(&mut self, index: i64) {
        if self.state.open(index).is_some() {
            self.show_current();
        }
    }

    fn close(&mut self) {
        self.state.close();
        self.view.hide_overlay();
        self.view.set_scroll_locked(false);
    }

    fn navigate(&mut self, offset: i64) {
        if self.state.navigate(offset).is_some() {
            self.show_current();
        }
    }

    fn is_overlay_open(&self) -> bool {
        self.state.is_open()
    }
}
