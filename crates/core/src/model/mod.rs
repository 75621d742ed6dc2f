mod entry;
mod entry_type;
mod ids;
mod srs_stage;

pub use entry::{Constituent, DictionaryEntry, UserEntry};
pub use entry_type::{EntryType, ParseEntryTypeError};
pub use ids::{EntryId, ParseIdError};
pub use srs_stage::{ParseSrsStageError, SrsStage};
