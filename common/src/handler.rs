//! [`Handler`] abstractions.

/// Executable handler.
///
/// Handlers are synchronous: everything they do is a pure computation over
/// in-memory data.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors with [`Handler::Err`] if the execution fails.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
