use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use eframe::egui::{
    self, Align, Align2, Color32, FontId, Layout, Pos2, Rect, RichText, Sense, UiBuilder, Vec2,
};
use platebook_adapters::{GridContent, SiteLocation, SurfaceModel};
use platebook_application::{
    ApplicationError, GalleryEvent, GallerySession, GridCard, Key, LoadedPages, OverlaySlide,
    OverlayTarget, PageLoader,
};
use tracing::debug;

use crate::config::AppConfig;

const CARD_WIDTH: f32 = 220.0;
const CARD_IMAGE_HEIGHT: f32 = 290.0;
const CARD_LABEL_HEIGHT: f32 = 34.0;
const CARD_GAP: f32 = 16.0;
const CARD_INSET: f32 = 6.0;
const HERO_HEIGHT: f32 = 260.0;
const OVERLAY_MARGIN: f32 = 40.0;
const CONTROL_BAR_HEIGHT: f32 = 56.0;
const INK: Color32 = Color32::from_rgb(0x1B, 0x1F, 0x26);
const PAPER: Color32 = Color32::from_rgb(0xFB, 0xFA, 0xF7);
const PAPER_HOVER: Color32 = Color32::from_rgb(0xF0, 0xE3, 0xD0);
const ERROR_RED: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);

type LoadResult = Result<LoadedPages, ApplicationError>;

struct GalleryApp {
    session: GallerySession<SurfaceModel>,
    site: SiteLocation,
    pending: Option<Receiver<LoadResult>>,
}

impl GalleryApp {
    fn new(ctx: &egui::Context, site: SiteLocation, loader: PageLoader) -> Self {
        let (sender, receiver) = mpsc::channel();
        let repaint = ctx.clone();
        thread::spawn(move || {
            let result = loader.load();
            if sender.send(result).is_err() {
                debug!("window closed before pages arrived");
            }
            repaint.request_repaint();
        });

        Self {
            session: GallerySession::new(SurfaceModel::new()),
            site,
            pending: Some(receiver),
        }
    }

    fn poll_load(&mut self) {
        let Some(receiver) = &self.pending else {
            return;
        };
        match receiver.try_recv() {
            Ok(result) => {
                self.session.finish_load(result);
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.session.finish_load(Err(ApplicationError::Io(
                    "page loader stopped without a result".to_string(),
                )));
                self.pending = None;
            }
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        let mut events = key_events(ctx);
        let surface = self.session.view();
        let title = surface.title().unwrap_or("Plates");

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(title);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Open deck").clicked() {
                        events.push(GalleryEvent::OpenDeckClicked);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .enable_scrolling(!surface.is_scroll_locked())
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    paint_hero(ui, &self.site, title, surface.hero_image());
                    ui.add_space(CARD_GAP);
                    paint_grid(ui, &self.site, surface.grid(), &mut events);
                });
        });

        if let Some(slide) = surface.visible_slide() {
            paint_overlay(ctx, &self.site, slide, &mut events);
        }

        for event in events {
            self.session.handle(event);
        }

        if self.pending.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

pub fn launch_window(
    config: &AppConfig,
    site: SiteLocation,
    loader: PageLoader,
) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("platebook")
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "platebook",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(GalleryApp::new(&cc.egui_ctx, site, loader)))
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}

fn key_events(ctx: &egui::Context) -> Vec<GalleryEvent> {
    ctx.input(|input| {
        input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => Some(GalleryEvent::KeyPressed(map_key(*key))),
                _ => None,
            })
            .collect()
    })
}

fn map_key(key: egui::Key) -> Key {
    match key {
        egui::Key::Escape => Key::Escape,
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::ArrowRight => Key::ArrowRight,
        _ => Key::Other,
    }
}

fn paint_hero(ui: &mut egui::Ui, site: &SiteLocation, title: &str, hero: Option<&str>) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, HERO_HEIGHT), Sense::hover());
    ui.painter().rect_filled(rect, 12.0, INK);

    if let Some(image) = hero {
        let hero_image = egui::Image::new(site.resolve_image_uri(image))
            .fit_to_exact_size(rect.size())
            .tint(Color32::from_white_alpha(110));
        paint_fitted(ui, hero_image, rect);
    }

    ui.painter().text(
        rect.left_bottom() + Vec2::new(24.0, -24.0),
        Align2::LEFT_BOTTOM,
        title,
        FontId::proportional(34.0),
        Color32::WHITE,
    );
}

fn paint_grid(
    ui: &mut egui::Ui,
    site: &SiteLocation,
    grid: &GridContent,
    events: &mut Vec<GalleryEvent>,
) {
    match grid {
        GridContent::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading plates");
            });
        }
        GridContent::Error(message) => {
            ui.label(RichText::new(message).color(ERROR_RED).strong());
        }
        GridContent::Cards(cards) => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(CARD_GAP);
                for card in cards {
                    if paint_card(ui, site, card).clicked() {
                        events.push(GalleryEvent::CardActivated(card.position));
                    }
                }
            });
        }
    }
}

fn paint_card(ui: &mut egui::Ui, site: &SiteLocation, card: &GridCard) -> egui::Response {
    let size = Vec2::new(CARD_WIDTH, CARD_IMAGE_HEIGHT + CARD_LABEL_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    // Off-screen cards never request their image.
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let fill = if response.hovered() { PAPER_HOVER } else { PAPER };
    ui.painter().rect_filled(rect, 10.0, fill);

    let image_area = Rect::from_min_size(rect.min, Vec2::new(CARD_WIDTH, CARD_IMAGE_HEIGHT))
        .shrink(CARD_INSET);
    let image = egui::Image::new(site.resolve_image_uri(&card.image))
        .fit_to_exact_size(image_area.size());
    paint_fitted(ui, image, image_area);

    let label_y = rect.bottom() - CARD_LABEL_HEIGHT / 2.0;
    ui.painter().text(
        Pos2::new(rect.left() + 12.0, label_y),
        Align2::LEFT_CENTER,
        &card.label,
        FontId::proportional(15.0),
        INK,
    );
    ui.painter().text(
        Pos2::new(rect.right() - 12.0, label_y),
        Align2::RIGHT_CENTER,
        "↗",
        FontId::proportional(15.0),
        INK,
    );

    response.on_hover_text(card.alt.clone())
}

fn paint_overlay(
    ctx: &egui::Context,
    site: &SiteLocation,
    slide: &OverlaySlide,
    events: &mut Vec<GalleryEvent>,
) {
    egui::Area::new(egui::Id::new("plate-overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(Pos2::ZERO)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            let scrim = ui.allocate_rect(screen, Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, Color32::from_black_alpha(225));

            let content = screen.shrink(OVERLAY_MARGIN);
            let stage = Rect::from_min_max(
                content.min,
                Pos2::new(content.max.x, content.max.y - CONTROL_BAR_HEIGHT),
            );
            let image = egui::Image::new(site.resolve_image_uri(&slide.image))
                .fit_to_exact_size(stage.size());
            let image_rect = paint_fitted(ui, image, stage);
            let image_response = ui
                .interact(image_rect, ui.id().with("overlay-image"), Sense::click())
                .on_hover_text(slide.alt.clone());

            let bar = Rect::from_min_max(
                Pos2::new(content.min.x, content.max.y - CONTROL_BAR_HEIGHT),
                content.max,
            );
            let bar_response = ui.interact(bar, ui.id().with("overlay-bar"), Sense::click());
            let mut bar_ui = ui.new_child(
                UiBuilder::new()
                    .max_rect(bar)
                    .layout(Layout::left_to_right(Align::Center)),
            );
            paint_control_bar(&mut bar_ui, slide, events);

            if image_response.clicked() || bar_response.clicked() {
                events.push(GalleryEvent::OverlayClicked(OverlayTarget::Content));
            } else if scrim.clicked() {
                events.push(GalleryEvent::OverlayClicked(OverlayTarget::Scrim));
            }
        });
}

fn paint_control_bar(ui: &mut egui::Ui, slide: &OverlaySlide, events: &mut Vec<GalleryEvent>) {
    ui.label(
        RichText::new(&slide.badge)
            .strong()
            .size(18.0)
            .color(Color32::WHITE),
    );
    ui.label(RichText::new(slide.counter()).color(Color32::LIGHT_GRAY));
    if let Some(first_line) = slide.caption.as_deref().and_then(|text| text.lines().next()) {
        ui.label(RichText::new(first_line).color(Color32::GRAY));
    }

    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        if ui.button("Close").clicked() {
            events.push(GalleryEvent::CloseClicked);
        }
        if ui.button("Next →").clicked() {
            events.push(GalleryEvent::NextClicked);
        }
        if ui.button("← Prev").clicked() {
            events.push(GalleryEvent::PrevClicked);
        }
    });
}

/// Paints `image` centred in `area`, aspect preserved. Returns the painted rect.
fn paint_fitted(ui: &egui::Ui, image: egui::Image<'_>, area: Rect) -> Rect {
    let size = image
        .load_and_calc_size(ui, area.size())
        .unwrap_or(area.size());
    let target = Rect::from_center_size(area.center(), size);
    image.paint_at(ui, target);
    target
}
