/// Errors raised by slider entry points.
///
/// Precondition violations are reported to the caller immediately; nothing is
/// clamped. Errors raised inside timer callbacks never reach this type, they
/// are logged and absorbed by teardown instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderError {
    /// A required argument was absent or malformed.
    InvalidArgument { reason: &'static str },
    /// A real position outside `[0, len)`.
    IndexOutOfRange { index: i64, len: usize },
    /// The operation needs state the slider does not have yet.
    IllegalState { reason: &'static str },
}

impl SliderError {
    pub(crate) fn out_of_range(index: i64, len: usize) -> Self {
        SliderError::IndexOutOfRange { index, len }
    }
}

impl std::fmt::Display for SliderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliderError::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            SliderError::IndexOutOfRange { index, len } => {
                write!(f, "trying to access position {index} where size is {len}")
            }
            SliderError::IllegalState { reason } => write!(f, "illegal state: {reason}"),
        }
    }
}

impl std::error::Error for SliderError {}
