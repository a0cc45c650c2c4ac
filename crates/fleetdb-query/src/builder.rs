//! Shared entry point for the fluent builders in this crate.

/// Factory shape shared by chainable builders.
///
/// A builder starts empty via [`Builder::builder`]. Every mutating
/// operation takes the builder by value and hands it back (plainly, or
/// wrapped in a `Result` when the argument needs validating), so a chain
/// owns exactly one instance from construction through the terminal
/// extraction call.
pub trait Builder: Default {
    /// Start a fresh, empty builder.
    fn builder() -> Self {
        Self::default()
    }
}
