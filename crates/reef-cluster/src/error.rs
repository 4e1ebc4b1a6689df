//! Error types for the directory crate.

/// Errors produced when querying the peer directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The backing store could not be reached.
    #[error("unavailable")]
    Unavailable,

    /// A peer record could not be read back intact.
    #[error("corrupt peer record: {detail}")]
    Corrupt {
        /// Description of what failed to parse.
        detail: String,
    },
}
