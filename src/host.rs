//! Seams between the navigation core and the platform it runs on.

use crate::error::LoadError;
use crate::graph::{ResourceRef, SlideId};

/// Top-left anchor of the image region on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}

impl Origin {
    pub const TOP_LEFT: Origin = Origin { x: 0, y: 0 };
}

/// Decodes slide bitmaps into device memory.
///
/// Dropping a `Resource` must release the memory it occupies.
pub trait ResourceLoader {
    type Resource;

    fn decode(&mut self, resource: &ResourceRef) -> Result<Self::Resource, LoadError>;
}

/// The display surface the resident image is shown on.
pub trait DisplaySurface {
    fn attach(&mut self, slide: SlideId, origin: Origin);
    fn detach(&mut self);
    fn set_overlay_visible(&mut self, visible: bool);
}

pub trait Haptics {
    fn short_pulse(&mut self);
}
