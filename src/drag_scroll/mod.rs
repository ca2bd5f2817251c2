use std::collections::VecDeque;

use egui::Vec2;

mod container;
mod debug;
mod device;
mod error;
mod momentum;
mod options;
mod pointer;
mod session;


pub use container::{ScrollContainer, ScrollTarget};
pub use device::{COARSE_POINTER_MARKER, DeviceCapabilities};
pub use error::ConfigurationError;
pub use momentum::MomentumAnimation;
pub use options::DragScrollOptions;
pub use pointer::{PointerButton, PointerEvent, PointerId, PointerKind, PointerResponse};

use session::DragSession;

/// Click-and-drag scrolling ("grab to pan") for one scrollable container.
///
/// Pointer flow:
/// - Press (mouse, primary button): captures the pointer and remembers where the pointer and the
///   scroll offsets were.
/// - Move: scrolls instantly by the opposite of the pointer displacement.
/// - Release / cancel / lost capture: ends the gesture and, if `momentum_ratio > 0`, starts an eased
///   scroll that continues by `momentum_ratio` times the distance scrolled during the drag.
///
/// Also feed [`Self::on_document_release`] from a document/window-wide release signal: a pointer
/// can go up somewhere the container never hears about, and the gesture must still end.
///
/// Momentum is advanced by [`Self::tick`] from the host's animation loop. Any new press or move
/// cancels it before touching the scroll offsets, so two animations never race.
#[derive(Debug)]
pub struct DragScrollController<C> {
    options: DragScrollOptions,
    container: C,
    session: DragSession,
    debug_log: VecDeque<String>,
}

impl<C: ScrollContainer> DragScrollController<C> {
    /// Attach to `container`, which must be present and a valid scroll target.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::MissingTarget`] for `None`, [`ConfigurationError::InvalidTarget`]
    /// if [`ScrollContainer::is_valid_target`] says no, and
    /// [`ConfigurationError::InvalidOption`] if `options` don't validate.
    pub fn attach(container: Option<C>, options: DragScrollOptions) -> Result<Self, ConfigurationError> {
        let container = container.ok_or(ConfigurationError::MissingTarget)?;
        if !container.is_valid_target() {
            return Err(ConfigurationError::InvalidTarget);
        }
        options.validate()?;

        Ok(Self {
            options,
            container,
            session: DragSession::default(),
            debug_log: VecDeque::new(),
        })
    }

    pub fn options(&self) -> &DragScrollOptions {
        &self.options
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// Stop driving the container and hand it back. An active gesture releases its capture.
    pub fn detach(mut self) -> C {
        if let Some(pointer) = self.session.pointer() {
            self.end_gesture(pointer, "detach", true);
        }
        self.session.take_momentum();
        self.container
    }

    /// True between press and release.
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// The pointer owning the current gesture.
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.session.pointer()
    }

    /// A momentum scroll is in flight; the host should keep calling [`Self::tick`].
    pub fn is_animating(&self) -> bool {
        self.session.momentum().is_some()
    }

    pub fn momentum(&self) -> Option<&MomentumAnimation> {
        self.session.momentum()
    }

    pub fn on_pointer_down(&mut self, event: PointerEvent) -> PointerResponse {
        if !event.kind.is_mouse() || event.button != PointerButton::Primary {
            return PointerResponse::Ignored;
        }
        if self.session.is_active() {
            // Another pointer already owns the gesture.
            return PointerResponse::Ignored;
        }

        self.cancel_momentum_with_reason("press");

        let origin_scroll = self.container.scroll_offset();
        let Some(line) = self.session.begin(event.id, event.pos, origin_scroll) else {
            return PointerResponse::Ignored;
        };
        self.container.set_pointer_capture(event.id);
        self.debug_log_event(line);

        PointerResponse::Handled {
            prevent_default: true,
        }
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent) -> PointerResponse {
        let Some(active) = self.session.owned_by(event.id).copied() else {
            return PointerResponse::Ignored;
        };

        self.cancel_momentum_with_reason("move");

        let delta: Vec2 = active.anchor - event.pos;
        let offset = active.origin_scroll + delta;
        let target = ScrollTarget::masked(offset, self.options.track_x(), self.options.track_y());
        if !target.is_empty() {
            log::trace!(
                "drag move pointer={} left={:?} top={:?}",
                event.id.0,
                target.left,
                target.top
            );
            self.container.scroll_to(target);
        }
        self.session.record_move();

        PointerResponse::Handled {
            prevent_default: false,
        }
    }

    pub fn on_pointer_up(&mut self, pointer: PointerId) -> PointerResponse {
        self.end_gesture(pointer, "up", true)
    }

    pub fn on_pointer_cancel(&mut self, pointer: PointerId) -> PointerResponse {
        self.end_gesture(pointer, "cancel", true)
    }

    /// The container lost capture without a release (e.g. the host stole it).
    pub fn on_lost_pointer_capture(&mut self, pointer: PointerId) -> PointerResponse {
        self.end_gesture(pointer, "lost_capture", false)
    }

    /// Document-wide release/cancel fallback.
    ///
    /// `None` means "some pointer went up, identity unknown" (e.g. the window lost focus) and
    /// ends whatever gesture is active.
    pub fn on_document_release(&mut self, pointer: Option<PointerId>) -> PointerResponse {
        let Some(pointer) = pointer.or_else(|| self.session.pointer()) else {
            return PointerResponse::Ignored;
        };
        self.end_gesture(pointer, "document_release", true)
    }

    /// Stop the in-flight momentum scroll, leaving the offsets wherever it got to.
    pub fn cancel_momentum(&mut self) -> bool {
        self.cancel_momentum_with_reason("explicit")
    }

    /// Advance the momentum scroll by `dt` seconds. Returns whether it is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(animation) = self.session.momentum_mut() else {
            return false;
        };
        let target = animation.advance(dt);
        let finished = animation.is_finished();
        if !target.is_empty() {
            self.container.scroll_to(target);
        }
        if finished {
            self.session.take_momentum();
            self.debug_log_event("momentum DONE");
        }
        !finished
    }

    fn cancel_momentum_with_reason(&mut self, reason: &'static str) -> bool {
        let Some(animation) = self.session.take_momentum() else {
            return false;
        };
        self.debug_log_event(format!(
            "momentum CANCEL reason={reason} progress={:.2}",
            animation.progress()
        ));
        true
    }

    fn end_gesture(
        &mut self,
        pointer: PointerId,
        kind: &'static str,
        release_capture: bool,
    ) -> PointerResponse {
        let Some((ended, line)) = self.session.end(pointer, kind) else {
            return PointerResponse::Ignored;
        };
        if release_capture {
            self.container.release_pointer_capture(pointer);
        }
        self.debug_log_event(line);

        if self.options.momentum_enabled() {
            self.start_momentum(ended.origin_scroll);
        }

        PointerResponse::Handled {
            prevent_default: false,
        }
    }

    fn start_momentum(&mut self, origin_scroll: Vec2) {
        let track_x = self.options.track_x();
        let track_y = self.options.track_y();

        // Positive when the content was scrolled forward, i.e. the pointer was dragged backward.
        let current = self.container.scroll_offset();
        let net = current - origin_scroll;
        let net = Vec2::new(
            if track_x { net.x } else { 0.0 },
            if track_y { net.y } else { 0.0 },
        );
        if net == Vec2::ZERO {
            return;
        }

        let target = current + net * self.options.momentum_ratio;
        self.session.set_momentum(MomentumAnimation::new(
            current,
            target,
            self.options.momentum_duration,
            track_x,
            track_y,
        ));
        self.debug_log_event(format!(
            "momentum START from=({}, {}) to=({}, {})",
            current.x, current.y, target.x, target.y
        ));
    }
}
