use egui::Vec2;

use super::pointer::PointerId;

/// Per-axis scroll request. `None` leaves that axis untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTarget {
    pub left: Option<f32>,
    pub top: Option<f32>,
}

impl ScrollTarget {
    /// Keep only the axes that are enabled.
    pub fn masked(offset: Vec2, track_x: bool, track_y: bool) -> Self {
        Self {
            left: track_x.then_some(offset.x),
            top: track_y.then_some(offset.y),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none()
    }
}

/// A scrollable element a [`super::DragScrollController`] can drive.
///
/// The host owns the actual element; the controller only reads offsets, writes them
/// instantly (no smoothing) and asks for exclusive pointer capture.
pub trait ScrollContainer {
    /// Current scroll offsets: `x` is the left offset, `y` the top offset.
    fn scroll_offset(&self) -> Vec2;

    /// Jump to the requested offsets without animating. Axes set to `None` must not be written.
    fn scroll_to(&mut self, target: ScrollTarget);

    /// Route all following events of `pointer` to this container, even outside its bounds.
    fn set_pointer_capture(&mut self, pointer: PointerId);

    fn release_pointer_capture(&mut self, pointer: PointerId);

    /// Whether this container can host drag-scrolling at all. Checked once, at attach time.
    fn is_valid_target(&self) -> bool {
        true
    }
}
