use std::fmt;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ArgumentError>;

/// The category of an [`ArgumentError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// The argument cannot be passed to the wrapped function.
    InvalidType,
    /// The value is not one of the accepted choices.
    InvalidChoice,
    /// A numeric parameter is outside its accepted range.
    OffRange,
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentKind::InvalidType => write!(f, "invalid type"),
            ArgumentKind::InvalidChoice => write!(f, "invalid choice"),
            ArgumentKind::OffRange => write!(f, "argument off range"),
        }
    }
}

/// The single error raised by the toolkit.
///
/// Numeric faults such as a zero step or a vanishing second derivative are
/// not reported here; they surface as non-finite values in the result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid argument entry{}", hint_suffix(.hint))]
pub struct ArgumentError {
    kind: ArgumentKind,
    hint: Option<String>,
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(": {hint}"),
        None => ".".to_string(),
    }
}

impl ArgumentError {
    /// Creates an error of the given kind without a hint.
    pub fn new(kind: ArgumentKind) -> Self {
        Self { kind, hint: None }
    }

    /// Creates an error of the given kind carrying a hint for the caller.
    pub fn with_hint(kind: ArgumentKind, hint: impl Into<String>) -> Self {
        Self {
            kind,
            hint: Some(hint.into()),
        }
    }

    pub(crate) fn invalid_type(hint: impl Into<String>) -> Self {
        Self::with_hint(ArgumentKind::InvalidType, hint)
    }

    pub(crate) fn invalid_choice(hint: impl Into<String>) -> Self {
        Self::with_hint(ArgumentKind::InvalidChoice, hint)
    }

    pub(crate) fn off_range(hint: impl Into<String>) -> Self {
        Self::with_hint(ArgumentKind::OffRange, hint)
    }

    /// Rejects iteration counts below one.
    pub(crate) fn check_iterations(iterations: usize) -> Result<()> {
        if iterations < 1 {
            return Err(Self::off_range("iterations >= 1"));
        }
        Ok(())
    }

    #[must_use]
    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}
