use crate::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Open,
}

/// Clamps `requested` into `[0, len - 1]`. `None` when there is nothing to clamp into.
pub fn clamp_position(requested: i64, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    let last = i64::try_from(last).unwrap_or(i64::MAX);
    usize::try_from(requested.clamp(0, last)).ok()
}

/// Page list plus overlay cursor for one viewing session.
///
/// `pages` is only ever replaced wholesale. While the overlay is closed,
/// `current` holds the last viewed position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    pages: Vec<Page>,
    current: usize,
    phase: OverlayPhase,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_pages(&mut self, pages: Vec<Page>) {
        self.pages = pages;
        match self.pages.len().checked_sub(1) {
            Some(last) => self.current = self.current.min(last),
            None => {
                self.current = 0;
                self.phase = OverlayPhase::Closed;
            }
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    /// Opens at the clamped position and returns it; no-op on an empty list.
    pub fn open(&mut self, requested: i64) -> Option<usize> {
        let position = clamp_position(requested, self.pages.len())?;
        self.current = position;
        self.phase = OverlayPhase::Open;
        Some(position)
    }

    /// Returns whether the overlay was open before the call.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.phase = OverlayPhase::Closed;
        was_open
    }

    pub fn navigate(&mut self, offset: i64) -> Option<usize> {
        if self.pages.is_empty() {
            return None;
        }
        let current = i64::try_from(self.current).unwrap_or(i64::MAX);
        self.open(current.saturating_add(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PageIndex;

    fn pages(count: i64) -> Vec<Page> {
        (1..=count)
            .map(|index| {
                Page::new(
                    PageIndex::new(index).expect("index"),
                    format!("pages/page-{index:02}.jpg"),
                )
            })
            .collect()
    }

    fn loaded(count: i64) -> GalleryState {
        let mut state = GalleryState::new();
        state.replace_pages(pages(count));
        state
    }

    #[test]
    fn clamp_position_bounds_requests() {
        assert_eq!(clamp_position(0, 0), None);
        assert_eq!(clamp_position(-3, 4), Some(0));
        assert_eq!(clamp_position(2, 4), Some(2));
        assert_eq!(clamp_position(99, 4), Some(3));
        assert_eq!(clamp_position(i64::MIN, 1), Some(0));
        assert_eq!(clamp_position(i64::MAX, 1), Some(0));
    }

    #[test]
    fn open_clamps_every_request() {
        for len in 1..=5_i64 {
            let mut state = loaded(len);
            for requested in -7..=12_i64 {
                let expected = requested.max(0).min(len - 1) as usize;
                assert_eq!(state.open(requested), Some(expected));
                assert_eq!(state.current(), expected);
                assert!(state.is_open());
            }
        }
    }

    #[test]
    fn empty_gallery_ignores_every_operation() {
        let mut state = GalleryState::new();
        assert_eq!(state.open(0), None);
        assert_eq!(state.navigate(1), None);
        assert_eq!(state.navigate(-1), None);
        assert!(!state.close());
        assert_eq!(state, GalleryState::new());
    }

    #[test]
    fn navigation_holds_at_the_bounds() {
        let mut state = loaded(4);
        state.open(1);

        let mut previous = state.current();
        for _ in 0..10 {
            let position = state.navigate(1).expect("non-empty");
            assert!(position >= previous);
            previous = position;
        }
        assert_eq!(state.current(), 3);

        for _ in 0..10 {
            let position = state.navigate(-1).expect("non-empty");
            assert!(position <= previous);
            previous = position;
        }
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn navigate_accepts_large_offsets() {
        let mut state = loaded(3);
        assert_eq!(state.navigate(i64::MAX), Some(2));
        assert_eq!(state.navigate(i64::MIN), Some(0));
    }

    #[test]
    fn close_is_idempotent_and_keeps_last_viewed() {
        let mut state = loaded(3);
        state.open(2);
        assert!(state.close());
        assert!(!state.close());
        assert_eq!(state.phase(), OverlayPhase::Closed);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn replacing_pages_reclamps_current() {
        let mut state = loaded(5);
        state.open(4);
        state.replace_pages(pages(2));
        assert_eq!(state.current(), 1);
        assert!(state.is_open());

        state.replace_pages(Vec::new());
        assert_eq!(state.current(), 0);
        assert!(!state.is_open());
        assert!(state.current_page().is_none());
    }
}
