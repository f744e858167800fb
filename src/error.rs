//! Error types.
//!
//! Escaping itself has no error taxonomy by design: every representable
//! value has some textual rendering, and JSON mode substitutes `null` for
//! the rest. The variants below cover the three places a call can still
//! fail: the explicit recursion guard, the serde bridge, and the writer
//! convenience functions.

use std::fmt;
use thiserror::Error;

/// Represents all possible errors reported by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing escaped output
    #[error("IO error: {0}")]
    Io(String),

    /// Input nested deeper than `EscapeOptions::max_depth`
    #[error("maximum nesting depth of {limit} exceeded")]
    DepthLimit { limit: usize },

    /// Serde map with a non-string key
    #[error("object keys must be strings, found {0}")]
    NonStringKey(String),

    /// Type the serde bridge cannot represent
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jslit::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an unsupported type error for types the serde bridge
    /// cannot turn into a [`JsValue`](crate::JsValue).
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
