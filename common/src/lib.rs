//! Shared types for the person console.
//!
//! Everything the browser app needs that does not touch the DOM lives here: the
//! record and job models, the HTTP contract of the person/ETL backend, the client
//! traits, and the store that drives the whole screen through pure transitions.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod requests;
pub mod runtime;
pub mod state;

pub use api::{EtlClient, PersonClient};
pub use config::ConsoleConfig;
pub use error::{ApiError, ConfigError};
pub use runtime::perform;
pub use state::{Action, Console, Effect};
