use std::collections::VecDeque;

use super::DragScrollController;

impl<C> DragScrollController<C> {
    /// Forward a session event to the `log` facade, and to the ring buffer if enabled.
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{message}");
        if !self.options.debug_event_log {
            return;
        }
        push_bounded(
            &mut self.debug_log,
            message,
            self.options.debug_event_log_capacity,
        );
    }

    /// Recorded session events, one per line, oldest first.
    ///
    /// Empty unless [`super::DragScrollOptions::debug_event_log`] is set.
    pub fn debug_log_text(&self) -> String {
        self.debug_log
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }
}

fn push_bounded(log: &mut VecDeque<String>, line: String, capacity: usize) {
    let cap = capacity.clamp(1, 10_000);
    while log.len() >= cap {
        log.pop_front();
    }
    log.push_back(line);
}
