use platebook_domain::Page;

/// What the overlay shows for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySlide {
    pub position: usize,
    pub total: usize,
    pub image: String,
    pub alt: String,
    pub badge: String,
    pub caption: Option<String>,
}

impl OverlaySlide {
    pub fn new(position: usize, total: usize, page: &Page) -> Self {
        Self {
            position,
            total,
            image: page.image.clone(),
            alt: page.plate_label(),
            badge: page.plate_label(),
            caption: page.caption().map(str::to_string),
        }
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.position + 1, self.total)
    }
}
