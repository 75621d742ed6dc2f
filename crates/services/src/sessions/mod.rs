mod loader;
mod runner;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use loader::SessionLoader;
pub use runner::{CompletionCallback, SessionIntent, SessionRunner};
