use std::hash::Hash;

use egui::scroll_area::{ScrollAreaOutput, ScrollSource};
use egui::{Context, CursorIcon, Event, Id, Pos2, Rect, ScrollArea, TouchPhase, Ui, Vec2};

use crate::drag_scroll::{
    ConfigurationError, DeviceCapabilities, DragScrollController, DragScrollOptions,
    PointerButton, PointerEvent, PointerId, ScrollContainer, ScrollTarget,
};

/// [`ScrollContainer`] backed by an `egui::ScrollArea`'s offset.
///
/// Writes are buffered and applied to the area on its next `show` (egui is immediate mode),
/// and the real offset is synced back afterwards so native wheel scrolling is picked up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollAreaHandle {
    offset: Vec2,
    max_offset: Option<Vec2>,
    pending: bool,
    captured: Option<PointerId>,
}

impl ScrollAreaHandle {
    pub fn new(offset: Vec2) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    /// Pointer currently routed to this area regardless of its bounds.
    pub fn captured(&self) -> Option<PointerId> {
        self.captured
    }

    /// Offset written since the last `show`, if any.
    pub fn take_pending_offset(&mut self) -> Option<Vec2> {
        std::mem::take(&mut self.pending).then_some(self.offset)
    }

    pub fn has_pending_offset(&self) -> bool {
        self.pending
    }

    /// Adopt what the area actually displayed this frame.
    pub fn sync_from_area(&mut self, offset: Vec2, content_size: Vec2, viewport_size: Vec2) {
        self.max_offset = Some((content_size - viewport_size).max(Vec2::ZERO));
        if !self.pending {
            self.offset = offset;
        }
    }

    fn clamp(&self, value: f32, max: Option<f32>) -> f32 {
        match max {
            Some(max) => value.clamp(0.0, max),
            None => value.max(0.0),
        }
    }
}

impl ScrollContainer for ScrollAreaHandle {
    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn scroll_to(&mut self, target: ScrollTarget) {
        if let Some(left) = target.left {
            self.offset.x = self.clamp(left, self.max_offset.map(|m| m.x));
            self.pending = true;
        }
        if let Some(top) = target.top {
            self.offset.y = self.clamp(top, self.max_offset.map(|m| m.y));
            self.pending = true;
        }
    }

    fn set_pointer_capture(&mut self, pointer: PointerId) {
        self.captured = Some(pointer);
    }

    fn release_pointer_capture(&mut self, pointer: PointerId) {
        if self.captured == Some(pointer) {
            self.captured = None;
        }
    }
}

fn map_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Pointer id used for everything egui derives from touch input.
///
/// egui backends emulate `PointerButton`/`PointerMoved` for the first finger, so those events
/// are re-tagged as touch with this id. It never owns a gesture, and it never matches a mouse
/// gesture either.
pub const TOUCH_POINTER: PointerId = PointerId(u64::MAX);

/// Best-effort device check for the egui path: a host that reports a touch screen is treated
/// as having no fine pointer.
pub fn device_capabilities(ctx: &Context) -> DeviceCapabilities {
    if ctx.input(|i| i.has_touch_screen()) {
        DeviceCapabilities::coarse()
    } else {
        DeviceCapabilities::fine()
    }
}

/// Translate this pass's `egui` input events into controller calls.
///
/// Presses only count inside `rect`; moves and releases are always delivered, the controller
/// filters them by the captured pointer. `PointerGone` and losing window focus act as the
/// document-wide release. Pointer events emulated from a touch are delivered as
/// [`PointerKind::Touch`](crate::PointerKind::Touch) on [`TOUCH_POINTER`], so a finger never
/// starts or moves a drag. Returns true if any event drove the drag.
pub fn feed_egui_events<C: ScrollContainer>(
    ctx: &Context,
    rect: Rect,
    controller: &mut DragScrollController<C>,
) -> bool {
    let (events, mut touching) = ctx.input(|i| (i.events.clone(), i.any_touches()));
    let mut handled = false;

    let pointer_event = |touching: bool, pos: Pos2| {
        if touching {
            PointerEvent::touch(TOUCH_POINTER, pos)
        } else {
            PointerEvent::mouse(PointerId::MOUSE, pos)
        }
    };
    let pointer_id = |touching: bool| if touching { TOUCH_POINTER } else { PointerId::MOUSE };

    for event in &events {
        let response = match event {
            Event::Touch { phase, pos, .. } => {
                touching = true;
                if *phase != TouchPhase::Start || !rect.contains(*pos) {
                    continue;
                }
                controller.on_pointer_down(PointerEvent::touch(TOUCH_POINTER, *pos))
            }
            Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } => {
                if !rect.contains(*pos) {
                    continue;
                }
                controller.on_pointer_down(
                    pointer_event(touching, *pos).with_button(map_button(*button)),
                )
            }
            Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => controller.on_pointer_up(pointer_id(touching)),
            Event::PointerMoved(pos) => controller.on_pointer_move(pointer_event(touching, *pos)),
            Event::PointerGone => controller.on_document_release(Some(pointer_id(touching))),
            Event::WindowFocused(false) => controller.on_document_release(None),
            _ => continue,
        };
        handled |= response.is_handled();
    }

    handled
}

/// An `egui::ScrollArea` that can be panned by click-and-drag, with release momentum.
///
/// egui's own drag-to-scroll is turned off for the area; this replaces it for mice. On a
/// coarse-pointer device nothing is installed: the area keeps egui's default scroll sources and
/// [`Self::capability_marker`] reports [`crate::COARSE_POINTER_MARKER`].
///
/// egui has no native default action for a press, so [`crate::PointerResponse::prevent_default`]
/// has nothing to suppress here. Child widgets still see the press that starts a drag; make
/// labels non-selectable (`Label::selectable(false)`) if text selection would compete with it.
#[derive(Debug)]
pub struct DragScrollArea {
    id_salt: Id,
    device: DeviceCapabilities,
    controller: Option<DragScrollController<ScrollAreaHandle>>,
}

impl DragScrollArea {
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidOption`] if `options` don't validate, even when the
    /// device gate leaves the area without a controller.
    pub fn new(
        id_salt: impl Hash,
        options: DragScrollOptions,
        device: DeviceCapabilities,
    ) -> Result<Self, ConfigurationError> {
        let controller = DragScrollController::attach(Some(ScrollAreaHandle::default()), options)?;
        let controller = if device.fine_pointer {
            Some(controller)
        } else {
            log::info!(
                "no fine pointer: drag-scroll disabled, exposing marker `{}`",
                crate::COARSE_POINTER_MARKER
            );
            None
        };

        Ok(Self {
            id_salt: Id::new(id_salt),
            device,
            controller,
        })
    }

    /// Marker the host should expose when drag-scrolling was not installed.
    pub fn capability_marker(&self) -> Option<&'static str> {
        self.device.capability_marker()
    }

    /// `None` on coarse-pointer devices.
    pub fn controller(&self) -> Option<&DragScrollController<ScrollAreaHandle>> {
        self.controller.as_ref()
    }

    pub fn controller_mut(&mut self) -> Option<&mut DragScrollController<ScrollAreaHandle>> {
        self.controller.as_mut()
    }

    pub fn show<R>(
        &mut self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> ScrollAreaOutput<R> {
        let Some(controller) = &mut self.controller else {
            return ScrollArea::both().id_salt(self.id_salt).show(ui, add_contents);
        };
        let ctx = ui.ctx().clone();

        let dt = ctx.input(|i| i.stable_dt);
        controller.tick(dt);

        let options = controller.options();
        let mut area = ScrollArea::new([options.track_x(), options.track_y()])
            .id_salt(self.id_salt)
            .scroll_source(ScrollSource {
                drag: false,
                ..ScrollSource::ALL
            });
        if let Some(offset) = controller.container_mut().take_pending_offset() {
            area = area.scroll_offset(offset);
        }

        let output = area.show(ui, add_contents);
        controller.container_mut().sync_from_area(
            output.state.offset,
            output.content_size,
            output.inner_rect.size(),
        );

        feed_egui_events(&ctx, output.inner_rect, controller);

        if controller.is_dragging() {
            ctx.set_cursor_icon(CursorIcon::Grabbing);
        } else if ctx.rect_contains_pointer(ui.layer_id(), output.inner_rect) {
            ctx.set_cursor_icon(CursorIcon::Grab);
        }

        if controller.is_animating() || controller.container().has_pending_offset() {
            ctx.request_repaint();
        }

        output
    }
}
