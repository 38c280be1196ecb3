use thiserror::Error;

/// Error types for cursor and container operations
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CursorError {
    /// A cursor operation was invoked while the cursor is done
    #[error("Precondition violation: `{operation}` called on a finished cursor")]
    PreconditionViolation {
        /// Name of the rejected operation
        operation: &'static str,
    },
    /// A fixed-capacity container is full
    #[error("Capacity exceeded: container holds at most {capacity} items")]
    CapacityExceeded {
        /// Capacity configured at construction
        capacity: usize,
    },
    /// A fixed-capacity container was requested with an unusable capacity
    #[error("Invalid capacity: {capacity}")]
    InvalidCapacity {
        /// Requested capacity
        capacity: usize,
    },
}

impl CursorError {
    pub(crate) const fn done(operation: &'static str) -> Self {
        Self::PreconditionViolation { operation }
    }
}
