pub mod files;
pub mod formatters;
pub mod forms;
pub mod guard;
pub mod ui;

pub use crate::domain::model::{Event, EventOutcome, FileDescriptor, FormKind};
pub use crate::domain::ports::{Clock, Document};
pub use guard::{attach_validators, FormGuard};
