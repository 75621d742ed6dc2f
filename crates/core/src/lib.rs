#![forbid(unsafe_code)]

pub mod highlight;
pub mod model;
pub mod mora;
pub mod pitch;
pub mod session;

pub use session::{Graded, Mode, SessionAction, SessionProgress, SessionState, Verdict};
