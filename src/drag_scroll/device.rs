/// Marker exposed to the host when the device has no precise pointer, so styling and UX
/// can branch (e.g. show regular scrollbars instead of a grab cursor).
pub const COARSE_POINTER_MARKER: &str = "dragscroll-coarse-pointer";

/// User-agent tokens of handheld browsers without a mouse.
const MOBILE_USER_AGENT_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Input capabilities of the host, decided once when attaching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DeviceCapabilities {
    /// The device has a precise pointing device (a mouse).
    pub fine_pointer: bool,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self::fine()
    }
}

impl DeviceCapabilities {
    pub const fn fine() -> Self {
        Self { fine_pointer: true }
    }

    pub const fn coarse() -> Self {
        Self {
            fine_pointer: false,
        }
    }

    /// Best-effort guess for hosts that can't query pointer precision directly.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let user_agent = user_agent.to_ascii_lowercase();
        let is_mobile = MOBILE_USER_AGENT_TOKENS
            .iter()
            .any(|token| user_agent.contains(token));
        Self {
            fine_pointer: !is_mobile,
        }
    }

    /// The marker the host should expose, if any.
    pub fn capability_marker(&self) -> Option<&'static str> {
        (!self.fine_pointer).then_some(COARSE_POINTER_MARKER)
    }
}
