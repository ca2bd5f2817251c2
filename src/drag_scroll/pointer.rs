use egui::Pos2;

/// Identifies one physical pointer for the duration of a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PointerId(pub u64);

impl PointerId {
    /// The id hosts with a single mouse cursor (like egui) use for it.
    pub const MOUSE: Self = Self(1);
}

/// Kind of device that produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A precise pointing device. The only kind that can start a drag.
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    #[inline]
    pub fn is_mouse(self) -> bool {
        matches!(self, Self::Mouse)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
    Other,
}

/// A single pointer sample, in viewport-relative coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub button: PointerButton,
    pub pos: Pos2,
}

impl PointerEvent {
    /// Primary-button mouse event.
    pub fn mouse(id: PointerId, pos: Pos2) -> Self {
        Self {
            id,
            kind: PointerKind::Mouse,
            button: PointerButton::Primary,
            pos,
        }
    }

    pub fn touch(id: PointerId, pos: Pos2) -> Self {
        Self {
            id,
            kind: PointerKind::Touch,
            button: PointerButton::Primary,
            pos,
        }
    }

    pub fn pen(id: PointerId, pos: Pos2) -> Self {
        Self {
            id,
            kind: PointerKind::Pen,
            button: PointerButton::Primary,
            pos,
        }
    }

    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// What the controller did with a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerResponse {
    /// The event was outside the expected state-machine transitions and was dropped.
    /// The host should let it run its default action.
    Ignored,

    /// The event drove the drag. If `prevent_default` is set, the host must suppress the
    /// native default action (text selection, native drag-and-drop).
    Handled { prevent_default: bool },
}

impl PointerResponse {
    #[inline]
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    #[inline]
    pub fn prevent_default(self) -> bool {
        matches!(
            self,
            Self::Handled {
                prevent_default: true
            }
        )
    }
}
