//! Click-and-drag scrolling ("grab to pan") for scrollable containers, with an eased momentum
//! scroll after release. [`DragScrollController`] is the per-container state machine;
//! [`DragScrollArea`] wires it into an `egui::ScrollArea`.

#![forbid(unsafe_code)]

pub mod drag_scroll;
pub mod egui_adapter;
pub mod registry;

pub use drag_scroll::{
    COARSE_POINTER_MARKER, ConfigurationError, DeviceCapabilities, DragScrollController,
    DragScrollOptions, MomentumAnimation, PointerButton, PointerEvent, PointerId, PointerKind,
    PointerResponse, ScrollContainer, ScrollTarget,
};
pub use egui_adapter::{
    DragScrollArea, ScrollAreaHandle, TOUCH_POINTER, device_capabilities, feed_egui_events,
};
pub use registry::{AttachOutcome, DragScrollRegistry};
