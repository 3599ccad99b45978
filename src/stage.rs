use std::path::Path;
use raylib::prelude::*;
use log::info;
use time::macros::format_description;
use time::OffsetDateTime;

use slidemenu::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, HAPTIC_PULSE_DURATION};
use slidemenu::{DisplaySurface, Haptics, LoadError, Origin, ResourceLoader, ResourceRef, SlideId};

use crate::texture_loader::load_slide_texture;

const OVERLAY_HEIGHT: i32 = 28;               // Clock strip at the bottom of the display
const OVERLAY_FONT_SIZE: i32 = 20;

/// What the simulated display currently shows, apart from the bitmap itself.
#[derive(Debug, Default)]
pub struct Stage {
    attached: Option<(SlideId, Origin)>,
    overlay_visible: bool,
    pulse_timer: f32,
}

impl Stage {
    pub fn update(&mut self, dt: f32) {
        self.pulse_timer = (self.pulse_timer - dt).max(0.0);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, texture: Option<&Texture2D>, scale: i32) {
        d.clear_background(Color::BLACK);

        if let (Some((_, origin)), Some(texture)) = (self.attached, texture) {
            d.draw_texture_ex(
                texture,
                Vector2::new((origin.x * scale) as f32, (origin.y * scale) as f32),
                0.0,
                scale as f32,
                Color::WHITE,
            );
        }

        if self.overlay_visible {
            let top = (DISPLAY_HEIGHT - OVERLAY_HEIGHT) * scale;
            d.draw_rectangle(0, top, DISPLAY_WIDTH * scale, OVERLAY_HEIGHT * scale, Color::BLACK);
            d.draw_text(
                &clock_text(local_now()),
                4 * scale,
                top + 4 * scale,
                OVERLAY_FONT_SIZE * scale,
                Color::WHITE,
            );
        }

        // A vibration shows up as a flashing frame around the panel.
        if self.pulse_timer > 0.0 {
            for inset in 0..2 * scale {
                d.draw_rectangle_lines(
                    inset,
                    inset,
                    DISPLAY_WIDTH * scale - 2 * inset,
                    DISPLAY_HEIGHT * scale - 2 * inset,
                    Color::WHITE,
                );
            }
        }
    }
}

/// Wall-clock time, or UTC when the local offset cannot be determined.
fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// `HH:MM` for the overlay strip.
fn clock_text(now: OffsetDateTime) -> String {
    now.format(format_description!("[hour]:[minute]")).unwrap_or_default()
}

/// Borrowed view of the raylib window used as the menu's host for one event.
pub struct RaylibHost<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
    pub assets: &'a Path,
    pub stage: &'a mut Stage,
}

impl ResourceLoader for RaylibHost<'_> {
    type Resource = Texture2D;

    fn decode(&mut self, resource: &ResourceRef) -> Result<Texture2D, LoadError> {
        load_slide_texture(self.rl, self.thread, &self.assets.join(resource.as_str()))
            .map_err(|reason| LoadError::new(resource.as_str(), reason))
    }
}

impl DisplaySurface for RaylibHost<'_> {
    fn attach(&mut self, slide: SlideId, origin: Origin) {
        self.stage.attached = Some((slide, origin));
    }

    fn detach(&mut self) {
        self.stage.attached = None;
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.stage.overlay_visible = visible;
    }
}

impl Haptics for RaylibHost<'_> {
    fn short_pulse(&mut self) {
        info!("Vibe: short pulse");
        self.stage.pulse_timer = HAPTIC_PULSE_DURATION;
    }
}
