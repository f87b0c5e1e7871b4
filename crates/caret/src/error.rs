//! Errors surfaced by caret reads and writes.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum CaretError {
    /// A raw caret position that is negative, fractional or not finite.
    InvalidArgument { value: f64 },
    /// The host reports no active selection to measure from.
    NoActiveSelection,
    /// The host exposes no editing surface for the node.
    NotEditable,
}

impl fmt::Display for CaretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaretError::InvalidArgument { value } => {
                write!(f, "invalid caret position {value}: expected a non-negative integer")
            }
            CaretError::NoActiveSelection => {
                f.write_str("no active selection to read the caret from")
            }
            CaretError::NotEditable => {
                f.write_str("node exposes no text entry, text range or editable tree")
            }
        }
    }
}

impl std::error::Error for CaretError {}

/// Validate a caret position arriving as a plain number (e.g. from a script
/// binding) before it reaches [`set_caret_position`](crate::set_caret_position).
pub fn caret_position_from_f64(value: f64) -> Result<usize, CaretError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= usize::MAX as f64 {
        return Err(CaretError::InvalidArgument { value });
    }
    Ok(value as usize)
}

/// Integer flavour of [`caret_position_from_f64`].
pub fn caret_position_from_i64(value: i64) -> Result<usize, CaretError> {
    usize::try_from(value).map_err(|_| CaretError::InvalidArgument {
        value: value as f64,
    })
}
