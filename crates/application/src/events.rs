use crate::GalleryControls;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    Scrim,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    CardActivated(usize),
    OpenDeckClicked,
    CloseClicked,
    OverlayClicked(OverlayTarget),
    PrevClicked,
    NextClicked,
    KeyPressed(Key),
}

/// Maps a raw input event onto the gallery controls.
pub fn dispatch<C: GalleryControls + ?Sized>(controls: &mut C, event: GalleryEvent) {
    match event {
        GalleryEvent::CardActivated(position) => {
            controls.open_at(i64::try_from(position).unwrap_or(i64::MAX));
        }
        GalleryEvent::OpenDeckClicked => controls.open_at(0),
        GalleryEvent::CloseClicked | GalleryEvent::OverlayClicked(OverlayTarget::Scrim) => {
            controls.close();
        }
        GalleryEvent::OverlayClicked(OverlayTarget::Content) => {}
        GalleryEvent::PrevClicked => controls.navigate(-1),
        GalleryEvent::NextClicked => controls.navigate(1),
        GalleryEvent::KeyPressed(key) => {
            if !controls.is_overlay_open() {
                return;
            }
            match key {
                Key::Escape => controls.close(),
                Key::ArrowRight => controls.navigate(1),
                Key::ArrowLeft => controls.navigate(-1),
                Key::Other => {}
            }
        }
    }
}
