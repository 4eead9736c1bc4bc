use platebook_domain::Page;

use crate::GalleryView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCard {
    /// Position in the page list; activation opens the overlay here.
    pub position: usize,
    pub image: String,
    pub label: String,
    pub alt: String,
}

pub fn build_cards(pages: &[Page]) -> Vec<GridCard> {
    pages
        .iter()
        .enumerate()
        .map(|(position, page)| GridCard {
            position,
            image: page.image.clone(),
            label: page.card_label(),
            alt: page.plate_label(),
        })
        .collect()
}

pub fn render_grid<V: GalleryView + ?Sized>(view: &mut V, pages: &[Page]) {
    view.render_grid(build_cards(pages));
}

#[cfg(test)]
mod tests {
    use platebook_domain::PageIndex;

    use super::*;

    fn page(index: i64, image: &str) -> Page {
        Page::new(PageIndex::new(index).expect("index"), image)
    }

    #[test]
    fn cards_follow_list_order_not_ordinals() {
        let cards = build_cards(&[page(7, "b.jpg"), page(3, "a.jpg")]);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].position, 0);
        assert_eq!(cards[0].label, "Plate 07");
        assert_eq!(cards[0].image, "b.jpg");
        assert_eq!(cards[1].position, 1);
        assert_eq!(cards[1].label, "Plate 03");
        assert_eq!(cards[1].alt, "Plate 3");
    }

    #[test]
    fn empty_pages_yield_empty_grid() {
        assert!(build_cards(&[]).is_empty());
    }
}
