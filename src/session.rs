use log::{info, warn};

use crate::buttons::ButtonEvent;
use crate::error::SwapError;
use crate::graph::{Direction, NavigationGraph, SlideId};
use crate::host::{DisplaySurface, Haptics, ResourceLoader};
use crate::slot::ImageSlot;

/// What a dispatched event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: SlideId, to: SlideId },
    NoTarget { at: SlideId },
    Overlay { visible: bool },
}

/// Navigation state of one running menu: the graph, the current slide,
/// the image slot and the clock overlay flag.
pub struct NavigationSession<R> {
    graph: NavigationGraph,
    current: SlideId,
    slot: ImageSlot<R>,
    overlay_visible: bool,
}

impl<R> NavigationSession<R> {
    pub fn new(graph: NavigationGraph) -> Self {
        Self::with_slot(graph, ImageSlot::default())
    }

    pub fn with_slot(graph: NavigationGraph, slot: ImageSlot<R>) -> Self {
        Self {
            graph,
            current: SlideId::ROOT,
            slot,
            overlay_visible: false,
        }
    }

    pub fn graph(&self) -> &NavigationGraph {
        &self.graph
    }

    pub fn current(&self) -> SlideId {
        self.current
    }

    pub fn slot(&self) -> &ImageSlot<R> {
        &self.slot
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Draws the root slide and hides the overlay.
    pub fn start<H>(&mut self, host: &mut H) -> Result<(), SwapError>
    where
        H: ResourceLoader<Resource = R> + DisplaySurface,
    {
        info!("Starting menu with {} slides", self.graph.len());
        host.set_overlay_visible(self.overlay_visible);
        self.current = self.graph.reset();
        self.slot.swap(self.current, &self.graph, host)
    }

    pub fn dispatch<H>(&mut self, event: ButtonEvent, host: &mut H) -> Result<Transition, SwapError>
    where
        H: ResourceLoader<Resource = R> + DisplaySurface + Haptics,
    {
        let target = match event {
            ButtonEvent::UpShort => self.graph.advance(self.current, Direction::Previous),
            ButtonEvent::UpLong => self.graph.reset(),
            ButtonEvent::DownShort => self.graph.advance(self.current, Direction::Next),
            ButtonEvent::SelectShort => match self.graph.jump(self.current) {
                Ok(target) => target,
                Err(e) => {
                    warn!("{e}");
                    host.short_pulse();
                    return Ok(Transition::NoTarget { at: self.current });
                }
            },
            ButtonEvent::SelectLong => {
                self.overlay_visible = !self.overlay_visible;
                host.set_overlay_visible(self.overlay_visible);
                return Ok(Transition::Overlay {
                    visible: self.overlay_visible,
                });
            }
        };

        self.go_to(target, host)
    }

    /// Swaps to `target` and makes it current. On failure the current slide
    /// follows whatever the slot could keep on screen, and stays put when
    /// the screen is left blank.
    fn go_to<H>(&mut self, target: SlideId, host: &mut H) -> Result<Transition, SwapError>
    where
        H: ResourceLoader<Resource = R> + DisplaySurface,
    {
        let from = self.current;
        match self.slot.swap(target, &self.graph, host) {
            Ok(()) => {
                self.current = target;
                info!("Slide {from} -> {target}");
                Ok(Transition::Moved { from, to: target })
            }
            Err(e) => {
                if let Some(loaded) = self.slot.loaded_id() {
                    self.current = loaded;
                }
                Err(e)
            }
        }
    }

    /// Releases the resident bitmap.
    pub fn shutdown<H: DisplaySurface>(&mut self, host: &mut H) {
        info!("Shutting down menu on slide {}", self.current);
        self.slot.clear(host);
    }
}
