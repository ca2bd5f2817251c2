use super::error::ConfigurationError;

/// Options for [`super::DragScrollController`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragScrollOptions {
    /// Fraction of the drag's net displacement that is additionally "flung" on release.
    ///
    /// - `0.0`: no momentum, releasing simply stops tracking.
    /// - `0.3` (default): the container keeps going by 30% of the distance it was dragged.
    pub momentum_ratio: f32,

    /// If true, the horizontal scroll offset is never written.
    pub ignore_x: bool,

    /// If true, the vertical scroll offset is never written.
    pub ignore_y: bool,

    /// Duration (in seconds) of the eased momentum scroll after release.
    pub momentum_duration: f32,

    /// If true, record session events (start/end/momentum) in a small ring buffer,
    /// readable through [`super::DragScrollController::debug_log_text`].
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for DragScrollOptions {
    fn default() -> Self {
        Self {
            momentum_ratio: 0.3,
            ignore_x: false,
            ignore_y: false,
            momentum_duration: 0.35,
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}

impl DragScrollOptions {
    #[inline]
    pub fn track_x(&self) -> bool {
        !self.ignore_x
    }

    #[inline]
    pub fn track_y(&self) -> bool {
        !self.ignore_y
    }

    /// Whether releasing a drag starts a momentum scroll at all.
    #[inline]
    pub fn momentum_enabled(&self) -> bool {
        self.momentum_ratio > 0.0
    }

    /// # Errors
    ///
    /// [`ConfigurationError::InvalidOption`] naming the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.momentum_ratio.is_finite() || self.momentum_ratio < 0.0 {
            return Err(ConfigurationError::InvalidOption {
                name: "momentum_ratio",
                value: self.momentum_ratio,
            });
        }
        if !self.momentum_duration.is_finite() || self.momentum_duration <= 0.0 {
            return Err(ConfigurationError::InvalidOption {
                name: "momentum_duration",
                value: self.momentum_duration,
            });
        }
        Ok(())
    }
}
