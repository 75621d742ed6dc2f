#![forbid(unsafe_code)]

pub mod backend;
pub mod card_view;
pub mod config;
pub mod error;
pub mod http_backend;
pub mod sessions;

pub use kanji_core::{Graded, Mode, SessionProgress, Verdict};

pub use backend::{EntrySource, GradeCall, GradingBackend, RecordingBackend, SessionKind};
pub use card_view::{CardSection, CardView};
pub use config::BackendConfig;
pub use error::{BackendError, ConfigError, SessionError};
pub use http_backend::HttpBackend;
pub use sessions::{CompletionCallback, SessionIntent, SessionLoader, SessionRunner};
