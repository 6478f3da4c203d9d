use std::fmt;

/// Failure building a [`crate::Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// `capacity` was zero; a context always needs room for at least the
    /// root state.
    CapacityTooSmall,
    /// The padded grid (`raw_width + 2` by `raw_height + 2`) would not fit
    /// in the 16-bit position budget the rest of the engine assumes.
    DimensionsTooLarge,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::CapacityTooSmall => write!(f, "capacity must be at least 1"),
            ContextError::DimensionsTooLarge => {
                write!(f, "padded grid area exceeds the 16-bit position budget")
            }
        }
    }
}

impl std::error::Error for ContextError {}
