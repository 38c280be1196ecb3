use cursors::CursorError;
use thiserror::Error;

/// Error types for the firearm walk-through
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmoryError {
    /// The factory was asked for a firearm kind it does not know
    #[error("Unrecognized firearm discriminant: {discriminant}")]
    UnrecognizedVariant {
        /// Discriminant that was requested
        discriminant: u8,
    },
    /// A container or cursor rejected an operation
    #[error(transparent)]
    Cursor(#[from] CursorError),
    /// Writing the journal to the output failed
    #[error("Output error: {kind:?}")]
    Output {
        /// The kind of IO error reported by the writer
        kind: embedded_io::ErrorKind,
    },
}

pub type Result<T> = std::result::Result<T, ArmoryError>;
