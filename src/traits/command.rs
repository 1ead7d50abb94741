use std::borrow::Cow;

/// A reversible unit of work applied to a context passed in at call time.
///
/// A command holds only the data it captured when it was built. The context it
/// mutates is handed to every call, so the context, not the command, owns the
/// current value.
///
/// # Associated Types
///
/// * `Context`: The type of the context in which the command operates.
/// * `Error`: The error returned when applying or reverting the command fails.
///
/// # Required Methods
///
/// * `execute(&self, ctx: &Self::Context)`: Applies the command to the given context.
/// * `undo(&self, ctx: &Self::Context)`: Reverts the command's effect on the given context.
///
/// # Provided Methods
///
/// * `redo(&self, ctx: &Self::Context)`: Re-applies the command by calling `execute`. This method can be overridden if needed.
/// * `description(&self) -> Cow<str>`: Returns a label for history lists. The default implementation returns "Unknown command".
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use std::cell::Cell;
/// use std::convert::Infallible;
/// use style_history::prelude::Command;
///
/// struct SetFlag {
///     previous: bool,
/// }
///
/// impl Command for SetFlag {
///     type Context = Cell<bool>;
///     type Error = Infallible;
///
///     fn execute(&self, ctx: &Self::Context) -> Result<(), Self::Error> {
///         ctx.set(!self.previous);
///         Ok(())
///     }
///
///     fn undo(&self, ctx: &Self::Context) -> Result<(), Self::Error> {
///         ctx.set(self.previous);
///         Ok(())
///     }
///
///     fn description(&self) -> Cow<'_, str> {
///         Cow::Borrowed("Flip flag")
///     }
/// }
///
/// let flag = Cell::new(false);
/// let cmd = SetFlag { previous: flag.get() };
/// cmd.execute(&flag).unwrap();
/// assert!(flag.get());
/// cmd.undo(&flag).unwrap();
/// assert!(!flag.get());
/// ```
pub trait Command {
    type Context;
    type Error;

    /// Applies the command to the given context.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the context refused the mutation.
    fn execute(&self, ctx: &Self::Context) -> Result<(), Self::Error>;

    /// Reverts the command's effect on the given context.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the context refused the mutation.
    fn undo(&self, ctx: &Self::Context) -> Result<(), Self::Error>;

    /// Re-applies the command by calling `execute`. This method can be overridden if needed.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the context refused the mutation.
    fn redo(&self, ctx: &Self::Context) -> Result<(), Self::Error> {
        self.execute(ctx)
    }

    /// Returns a description of the command. The default implementation returns "Unknown command".
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Unknown command")
    }
}
