//! Errors from parsing configuration and attribute values.
//!
//! Layout itself never fails: every missing input just disables flattening.

/// A value could not be parsed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Dimension value does not start with a digit and is not `auto`.
    #[error("invalid length: expected digits with optional fraction and `%`")]
    InvalidLength,
    /// `scrolling` value is not one of `yes`, `auto`, `no`, `noscroll`, `off`.
    #[error("invalid scrolling value: expected yes|auto|no|noscroll|off")]
    InvalidScrolling,
    /// Strategy name is not recognized.
    #[error("unknown flattening strategy: expected frameset|setting|setting-or-frameset|never")]
    UnknownStrategy,
}
