//! Recording host used by the unit tests.

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::LoadError;
use crate::graph::{ResourceRef, SlideId};
use crate::host::{DisplaySurface, Haptics, Origin, ResourceLoader};

#[derive(Debug, Default)]
struct Residency {
    live: Cell<usize>,
    peak: Cell<usize>,
}

#[derive(Debug)]
pub struct FakeBitmap {
    pub name: String,
    residency: Rc<Residency>,
}

impl Drop for FakeBitmap {
    fn drop(&mut self) {
        self.residency.live.set(self.residency.live.get() - 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Decode(String),
    Attach(SlideId, Origin),
    Detach,
    Overlay(bool),
    Pulse,
}

#[derive(Debug, Default)]
pub struct FakeHost {
    residency: Rc<Residency>,
    failing: HashSet<String>,
    pub calls: Vec<SurfaceCall>,
    pub decoded: usize,
    pub attached: Option<SlideId>,
    pub overlay_visible: Option<bool>,
    pub pulses: usize,
}

impl FakeHost {
    pub fn failing(names: &[&str]) -> Self {
        let mut host = Self::default();
        host.fail_on(names);
        host
    }

    pub fn fail_on(&mut self, names: &[&str]) {
        self.failing = names.iter().map(|name| name.to_string()).collect();
    }

    /// Bitmaps currently alive.
    pub fn live(&self) -> usize {
        self.residency.live.get()
    }

    /// Most bitmaps ever alive at once.
    pub fn peak(&self) -> usize {
        self.residency.peak.get()
    }
}

impl ResourceLoader for FakeHost {
    type Resource = FakeBitmap;

    fn decode(&mut self, resource: &ResourceRef) -> Result<FakeBitmap, LoadError> {
        self.calls.push(SurfaceCall::Decode(resource.to_string()));
        if self.failing.contains(resource.as_str()) {
            return Err(LoadError::new(resource.as_str(), "corrupt bitmap"));
        }

        self.decoded += 1;
        let live = self.residency.live.get() + 1;
        self.residency.live.set(live);
        self.residency.peak.set(self.residency.peak.get().max(live));

        Ok(FakeBitmap {
            name: resource.to_string(),
            residency: Rc::clone(&self.residency),
        })
    }
}

impl DisplaySurface for FakeHost {
    fn attach(&mut self, slide: SlideId, origin: Origin) {
        self.calls.push(SurfaceCall::Attach(slide, origin));
        self.attached = Some(slide);
    }

    fn detach(&mut self) {
        self.calls.push(SurfaceCall::Detach);
        self.attached = None;
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.calls.push(SurfaceCall::Overlay(visible));
        self.overlay_visible = Some(visible);
    }
}

impl Haptics for FakeHost {
    fn short_pulse(&mut self) {
        self.calls.push(SurfaceCall::Pulse);
        self.pulses += 1;
    }
}
