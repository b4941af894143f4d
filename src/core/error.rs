/// Errors surfaced by the display layer.
///
/// Event overflow is deliberately absent: a full queue drops the event and
/// bumps a counter instead of failing the producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// Event loop, window or off-screen surface could not be created.
    AllocationFailure(String),

    /// An argument the operation cannot act on (e.g. an empty pixel buffer).
    InvalidArgument(&'static str),

    /// Pixel buffer length does not match the current surface.
    SizeMismatch { expected: usize, actual: usize },

    /// The platform failed to show a frame.
    Present(String),

    /// Configuration could not be read or parsed.
    Config(String),
}

impl std::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllocationFailure(e) => write!(f, "Allocation failed: {}", e),
            Self::InvalidArgument(what) => write!(f, "Invalid argument: {}", what),
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "Invalid pixel buffer size: expected {} bytes, got {}",
                expected, actual
            ),
            Self::Present(e) => write!(f, "Present failed: {}", e),
            Self::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for DisplayError {}

pub type Result<T> = std::result::Result<T, DisplayError>;
