/// Why a drag-scroll controller could not be attached to a target.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigurationError {
    /// No container was provided.
    MissingTarget,

    /// The container exists but can't host drag-scrolling (e.g. it is not scrollable).
    InvalidTarget,

    /// An option is out of its valid range.
    InvalidOption { name: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTarget => {
                write!(f, "you must provide a valid scrollable container to attach to")
            }
            Self::InvalidTarget => write!(f, "target is not a valid scrollable container"),
            Self::InvalidOption { name, value } => {
                write!(f, "invalid drag-scroll option `{name}`: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
