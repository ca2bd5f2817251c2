use std::fmt::Debug;
use std::hash::Hash;

use ahash::HashMap;
use itertools::Itertools as _;

use crate::drag_scroll::{
    ConfigurationError, DeviceCapabilities, DragScrollController, DragScrollOptions, PointerEvent,
    PointerId, PointerResponse, ScrollContainer,
};

/// Result of [`DragScrollRegistry::attach`] for a valid target.
#[derive(Debug)]
pub enum AttachOutcome<C> {
    /// A controller now drives the container.
    Attached,

    /// The key was already registered. Nothing changed; the new handle is handed back.
    AlreadyAttached(C),

    /// The device has no precise pointer, so drag-scrolling is not installed.
    /// See [`DragScrollRegistry::capability_marker`].
    SkippedCoarsePointer(C),
}

/// Owns the drag-scroll controllers of many containers, keyed by a host-side id
/// (element id, `egui::Id`, ...).
///
/// Registering the same key twice is a no-op, so setup code can run more than once.
/// The device check happens once, at construction.
#[derive(Debug)]
pub struct DragScrollRegistry<K, C> {
    device: DeviceCapabilities,
    controllers: HashMap<K, DragScrollController<C>>,
    marker_announced: bool,
}

impl<K, C> DragScrollRegistry<K, C>
where
    K: Hash + Eq + Clone + Debug,
    C: ScrollContainer,
{
    pub fn new(device: DeviceCapabilities) -> Self {
        Self {
            device,
            controllers: HashMap::default(),
            marker_announced: false,
        }
    }

    pub fn device(&self) -> DeviceCapabilities {
        self.device
    }

    /// Marker the host should expose (e.g. as a body class) when drag-scrolling is unavailable.
    pub fn capability_marker(&self) -> Option<&'static str> {
        self.device.capability_marker()
    }

    /// Install a controller for `key`, unless it already has one or the device is coarse.
    ///
    /// # Errors
    ///
    /// Same as [`DragScrollController::attach`]; target and options are checked before the
    /// device gate.
    pub fn attach(
        &mut self,
        key: K,
        container: Option<C>,
        options: DragScrollOptions,
    ) -> Result<AttachOutcome<C>, ConfigurationError> {
        let controller = DragScrollController::attach(container, options)?;

        if self.controllers.contains_key(&key) {
            log::debug!("drag-scroll already attached to {key:?}");
            return Ok(AttachOutcome::AlreadyAttached(controller.detach()));
        }

        if let Some(marker) = self.device.capability_marker() {
            if !self.marker_announced {
                self.marker_announced = true;
                log::info!("no fine pointer: drag-scroll disabled, exposing marker `{marker}`");
            }
            return Ok(AttachOutcome::SkippedCoarsePointer(controller.detach()));
        }

        self.controllers.insert(key, controller);
        Ok(AttachOutcome::Attached)
    }

    /// Attach every target. A bad target is logged and skipped; the others are unaffected.
    pub fn attach_all(
        &mut self,
        targets: impl IntoIterator<Item = (K, Option<C>)>,
        options: &DragScrollOptions,
    ) -> Vec<(K, ConfigurationError)> {
        targets
            .into_iter()
            .filter_map(|(key, container)| {
                match self.attach(key.clone(), container, options.clone()) {
                    Ok(_) => None,
                    Err(err) => {
                        log::error!("drag-scroll: skipping target {key:?}: {err}");
                        Some((key, err))
                    }
                }
            })
            .collect_vec()
    }

    /// Remove the controller for `key` and hand its container back.
    pub fn detach(&mut self, key: &K) -> Option<C> {
        self.controllers.remove(key).map(DragScrollController::detach)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.controllers.contains_key(key)
    }

    pub fn controller(&self, key: &K) -> Option<&DragScrollController<C>> {
        self.controllers.get(key)
    }

    pub fn controller_mut(&mut self, key: &K) -> Option<&mut DragScrollController<C>> {
        self.controllers.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn on_pointer_down(&mut self, key: &K, event: PointerEvent) -> PointerResponse {
        self.controllers
            .get_mut(key)
            .map_or(PointerResponse::Ignored, |c| c.on_pointer_down(event))
    }

    pub fn on_pointer_move(&mut self, key: &K, event: PointerEvent) -> PointerResponse {
        self.controllers
            .get_mut(key)
            .map_or(PointerResponse::Ignored, |c| c.on_pointer_move(event))
    }

    pub fn on_pointer_up(&mut self, key: &K, pointer: PointerId) -> PointerResponse {
        self.controllers
            .get_mut(key)
            .map_or(PointerResponse::Ignored, |c| c.on_pointer_up(pointer))
    }

    pub fn on_pointer_cancel(&mut self, key: &K, pointer: PointerId) -> PointerResponse {
        self.controllers
            .get_mut(key)
            .map_or(PointerResponse::Ignored, |c| c.on_pointer_cancel(pointer))
    }

    pub fn on_lost_pointer_capture(&mut self, key: &K, pointer: PointerId) -> PointerResponse {
        self.controllers
            .get_mut(key)
            .map_or(PointerResponse::Ignored, |c| c.on_lost_pointer_capture(pointer))
    }

    /// Broadcast a document-wide release. Returns how many gestures it ended.
    pub fn on_document_release(&mut self, pointer: Option<PointerId>) -> usize {
        self.controllers
            .values_mut()
            .map(|c| c.on_document_release(pointer))
            .filter(|r| r.is_handled())
            .count()
    }

    /// Advance every momentum scroll. Returns whether any is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.controllers
            .values_mut()
            .fold(false, |animating, c| c.tick(dt) | animating)
    }

    pub fn is_animating(&self) -> bool {
        self.controllers.values().any(DragScrollController::is_animating)
    }
}
