//! Error types for frame export.

/// Frame export error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The sequence holds no frames
    NoFrames,
    /// A frame's dimensions differ from the first frame's
    FrameSizeMismatch {
        index: usize,
        expected: (u32, u32),
        found: (u32, u32),
    },
    /// A frame's pixel buffer does not match its dimensions
    InvalidFrame {
        width: u32,
        height: u32,
        len: usize,
    },
    /// Image encoding failed
    Encode(String),
    /// IO error
    Io(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFrames => write!(
                f,
                "No frames in the sequence, push at least one frame before exporting"
            ),
            Self::FrameSizeMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "Frame {} is {}x{}, expected {}x{}",
                index, found.0, found.1, expected.0, expected.1
            ),
            Self::InvalidFrame { width, height, len } => write!(
                f,
                "Invalid frame: {}x{} needs {} bytes, got {}",
                width,
                height,
                *width as usize * *height as usize * 4,
                len
            ),
            Self::Encode(msg) => write!(f, "Image encoding failed: {}", msg),
            Self::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type for frame export.
pub type ExportResult<T> = Result<T, ExportError>;
