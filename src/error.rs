/// Fault latched by the lamp controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The bus reported a failure while a word was in flight
    ///
    /// A bus that only spins can never raise it; a bus with a completion
    /// timeout reports the timeout here.
    Transfer,
}
