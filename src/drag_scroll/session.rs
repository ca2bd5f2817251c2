use egui::{Pos2, Vec2};

use super::momentum::MomentumAnimation;
use super::pointer::PointerId;

/// Interaction state of one controller: at most one active gesture, plus the momentum
/// animation left behind by the previous one.
#[derive(Debug, Default)]
pub(super) struct DragSession {
    next_id: u64,
    active: Option<ActiveSession>,
    pending_momentum: Option<MomentumAnimation>,
}

/// Snapshot taken at engagement. Overwritten on every new engagement, never reused.
#[derive(Clone, Copy, Debug)]
pub(super) struct ActiveSession {
    pub(super) id: u64,
    pub(super) pointer: PointerId,
    pub(super) anchor: Pos2,
    pub(super) origin_scroll: Vec2,
    pub(super) moves: u64,
}

impl DragSession {
    pub(super) fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub(super) fn pointer(&self) -> Option<PointerId> {
        self.active.as_ref().map(|a| a.pointer)
    }

    /// The active gesture, if `pointer` owns it.
    pub(super) fn owned_by(&self, pointer: PointerId) -> Option<&ActiveSession> {
        self.active.as_ref().filter(|a| a.pointer == pointer)
    }

    /// Start a gesture. Returns `None` if one is already running.
    pub(super) fn begin(
        &mut self,
        pointer: PointerId,
        anchor: Pos2,
        origin_scroll: Vec2,
    ) -> Option<String> {
        if self.active.is_some() {
            return None;
        }

        let id = self.next_id.max(1);
        self.next_id = id.saturating_add(1);
        self.active = Some(ActiveSession {
            id,
            pointer,
            anchor,
            origin_scroll,
            moves: 0,
        });
        Some(format!(
            "session START id={id} pointer={} anchor=({}, {}) origin=({}, {})",
            pointer.0, anchor.x, anchor.y, origin_scroll.x, origin_scroll.y
        ))
    }

    pub(super) fn record_move(&mut self) {
        if let Some(active) = &mut self.active {
            active.moves = active.moves.saturating_add(1);
        }
    }

    /// End the gesture owned by `pointer`. Duplicate or foreign terminal events return `None`.
    pub(super) fn end(
        &mut self,
        pointer: PointerId,
        kind: &'static str,
    ) -> Option<(ActiveSession, String)> {
        self.owned_by(pointer)?;
        let ended = self.active.take()?;
        let line = format!(
            "session END id={} kind={kind} pointer={} moves={}",
            ended.id, ended.pointer.0, ended.moves
        );
        Some((ended, line))
    }

    pub(super) fn momentum(&self) -> Option<&MomentumAnimation> {
        self.pending_momentum.as_ref()
    }

    pub(super) fn momentum_mut(&mut self) -> Option<&mut MomentumAnimation> {
        self.pending_momentum.as_mut()
    }

    /// Replace any in-flight animation. There is never more than one.
    pub(super) fn set_momentum(&mut self, animation: MomentumAnimation) {
        self.pending_momentum = Some(animation);
    }

    pub(super) fn take_momentum(&mut self) -> Option<MomentumAnimation> {
        self.pending_momentum.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_while_active() {
        let mut session = DragSession::default();
        assert!(session.begin(PointerId(1), Pos2::ZERO, Vec2::ZERO).is_some());
        assert!(session.begin(PointerId(2), Pos2::ZERO, Vec2::ZERO).is_none());
        assert_eq!(session.pointer(), Some(PointerId(1)));
    }

    #[test]
    fn end_is_idempotent_and_pointer_scoped() {
        let mut session = DragSession::default();
        session.begin(PointerId(7), Pos2::ZERO, Vec2::ZERO);

        assert!(session.end(PointerId(8), "up").is_none());
        assert!(session.is_active());

        let (ended, line) = session.end(PointerId(7), "up").unwrap();
        assert_eq!(ended.id, 1);
        assert!(line.contains("kind=up"));
        assert!(!session.is_active());
        assert_eq!(session.pointer(), None);

        assert!(session.end(PointerId(7), "up").is_none());
    }

    #[test]
    fn session_ids_increase_per_gesture() {
        let mut session = DragSession::default();
        session.begin(PointerId(1), Pos2::ZERO, Vec2::ZERO);
        session.end(PointerId(1), "up");
        session.begin(PointerId(1), Pos2::ZERO, Vec2::ZERO);
        let (ended, _) = session.end(PointerId(1), "cancel").unwrap();
        assert_eq!(ended.id, 2);
    }
}
