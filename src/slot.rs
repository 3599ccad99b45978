use log::{debug, error, warn};

use crate::error::SwapError;
use crate::graph::{NavigationGraph, SlideId};
use crate::host::{DisplaySurface, Origin, ResourceLoader};

struct Resident<R> {
    slide: SlideId,
    resource: R,
}

/// Holds the one decoded bitmap allowed in device memory.
///
/// The previous resource is always dropped before the next one is decoded,
/// so two bitmaps are never resident together.
pub struct ImageSlot<R> {
    origin: Origin,
    resident: Option<Resident<R>>,
}

impl<R> Default for ImageSlot<R> {
    fn default() -> Self {
        Self::new(Origin::TOP_LEFT)
    }
}

impl<R> ImageSlot<R> {
    pub fn new(origin: Origin) -> Self {
        Self {
            origin,
            resident: None,
        }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn loaded_id(&self) -> Option<SlideId> {
        self.resident.as_ref().map(|resident| resident.slide)
    }

    pub fn resident(&self) -> Option<&R> {
        self.resident.as_ref().map(|resident| &resident.resource)
    }

    pub fn is_empty(&self) -> bool {
        self.resident.is_none()
    }

    /// Replaces the displayed slide with `target`.
    ///
    /// Asking for the slide that is already loaded only re-attaches it. When
    /// the new bitmap fails to decode the previous slide is decoded again;
    /// if that fails as well the slot is left empty and detached.
    pub fn swap<H>(
        &mut self,
        target: SlideId,
        graph: &NavigationGraph,
        host: &mut H,
    ) -> Result<(), SwapError>
    where
        H: ResourceLoader<Resource = R> + DisplaySurface,
    {
        let resource = graph.resource(target).ok_or(SwapError::UnknownSlide(target))?;

        if self.loaded_id() == Some(target) {
            debug!("Slide {target} already resident, re-attaching");
            host.detach();
            host.attach(target, self.origin);
            return Ok(());
        }

        // Detach, then release the old bitmap before decoding the new one.
        host.detach();
        let previous = self.resident.take().map(|resident| resident.slide);
        if let Some(previous) = previous {
            debug!("Released slide {previous}");
        }

        let source = match host.decode(resource) {
            Ok(decoded) => {
                self.install(target, decoded, host);
                return Ok(());
            }
            Err(e) => e,
        };

        let restored = match previous.and_then(|p| graph.resource(p).map(|r| (p, r))) {
            Some((previous, resource)) => match host.decode(resource) {
                Ok(decoded) => {
                    warn!("Slide {target} failed to load, restored slide {previous}: {source}");
                    self.install(previous, decoded, host);
                    true
                }
                Err(e) => {
                    error!("Slide {target} failed to load and slide {previous} could not be restored: {e}");
                    false
                }
            },
            None => {
                error!("Slide {target} failed to load: {source}");
                false
            }
        };

        Err(SwapError::ResourceLoad {
            slide: target,
            restored,
            source,
        })
    }

    /// Detaches and releases whatever is resident.
    pub fn clear<H: DisplaySurface>(&mut self, host: &mut H) {
        if let Some(resident) = self.resident.take() {
            host.detach();
            debug!("Released slide {}", resident.slide);
        }
    }

    fn install<H: DisplaySurface>(&mut self, slide: SlideId, resource: R, host: &mut H) {
        self.resident = Some(Resident { slide, resource });
        host.attach(slide, self.origin);
        debug!("Slide {slide} resident at ({}, {})", self.origin.x, self.origin.y);
    }
}
