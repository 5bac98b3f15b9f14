use thiserror::Error;

/// Errors raised by the editing layer itself.
///
/// Recoverable UI conditions (missing artwork, disabled inputs) are not
/// represented here; they travel through the `ERROR` action instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A section type string did not name any known section kind.
    #[error("Unknown section type '{0}'")]
    UnknownSectionType(String),

    /// An operation was applied to a section of the wrong kind.
    #[error("Expected {expected} section, found '{found}'")]
    SectionKindMismatch {
        expected: &'static str,
        found: String,
    },

    /// No section exists at the given position in the article.
    #[error("No section at index {0}")]
    SectionOutOfRange(usize),
}
