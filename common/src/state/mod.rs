//! The console store.
//!
//! All screen state lives in [`Console`]. Views send [`Action`]s, `Console::update`
//! applies them synchronously and answers with [`Effect`]s; HTTP effects are run by
//! [`crate::runtime::perform`] and come back as settlement actions.

pub mod console;
pub mod job_panel;
pub mod person_list;
pub mod sequence;

pub use console::{Action, Call, Console, Effect, FetchPurpose, Mutation};
pub use job_panel::{JobPanel, JobRequest, UploadSelection};
pub use person_list::{EditState, PersonList};
pub use sequence::{RequestSequencer, Resource, Ticket};
