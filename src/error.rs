//! # Error Types
//!
//! This module defines all error types for the RTTTL crate.
//!
//! Every failure happens while reading text: either the ringtone itself or a
//! player configuration document. The player never fails once it has a parsed
//! [`Song`](crate::Song).
//!
//! ## Error Types
//! - `MalformedSections` - the text does not have exactly three `:`-separated sections
//! - `UnknownDefaultKey` - the defaults block names a key other than `d`, `o` or `b`
//! - `InvalidDefaultValue` - a default is missing, non-numeric or out of range
//! - `InvalidNoteToken` - a note token is malformed (1-based position in the note list)
//! - `ConfigError` - invalid YAML player configuration
//!
//! ## Usage
//! ```rust
//! use rtttl::{parse, RtttlError};
//!
//! match parse("x:d=4,o=5,b=63:4h6") {
//!     Ok(song) => println!("{} notes", song.notes.len()),
//!     Err(RtttlError::InvalidNoteToken { position, token }) => {
//!         eprintln!("bad note #{}: {:?}", position, token);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtttlError {
    /// The text did not split into `name:defaults:notes`.
    ///
    /// # Example
    /// ```
    /// # use rtttl::RtttlError;
    /// let err = RtttlError::MalformedSections { found: 2 };
    /// assert_eq!(err.to_string(), "Expected 3 ':'-separated sections, found 2");
    /// ```
    #[error("Expected 3 ':'-separated sections, found {found}")]
    MalformedSections { found: usize },

    /// A key in the defaults block other than `d`, `o` or `b`.
    #[error("Unknown default key: {key:?}")]
    UnknownDefaultKey { key: String },

    /// A default value that does not parse or falls outside its bounds.
    ///
    /// # Example
    /// ```
    /// # use rtttl::RtttlError;
    /// let err = RtttlError::InvalidDefaultValue {
    ///     key: 'd',
    ///     value: "3".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid value for default 'd': \"3\"");
    /// ```
    #[error("Invalid value for default '{key}': {value:?}")]
    InvalidDefaultValue { key: char, value: String },

    /// A malformed note token; `position` is 1-based within the note list.
    #[error("Invalid note token #{position}: {token:?}")]
    InvalidNoteToken { position: usize, token: String },

    /// Invalid player configuration.
    #[error("Invalid player config: {0}")]
    ConfigError(String),
}
