//! Client seams for the two backend surfaces.
//!
//! The browser app implements these over `fetch`; tests implement them over an
//! in-memory store. Futures are not required to be `Send` because the console runs
//! on a single-threaded event loop.

#![allow(async_fn_in_trait)]

use crate::error::ApiError;
use crate::model::job::{JobInfo, JobResult};
use crate::model::person::{Person, PersonId};
use crate::model::upload::CsvFile;

/// CRUD calls against the person record store. One request per call, no retries.
pub trait PersonClient {
    /// `GET /person/all`, in server order.
    async fn list_all(&self) -> Result<Vec<Person>, ApiError>;

    /// `POST /person/create?name=..`; the response body is ignored.
    async fn create(&self, name: &str) -> Result<(), ApiError>;

    /// `PUT /person/{id}?name=..`; the response body is ignored.
    async fn update(&self, id: PersonId, name: &str) -> Result<(), ApiError>;

    /// `DELETE /person/{id}`.
    async fn remove(&self, id: PersonId) -> Result<(), ApiError>;

    /// `DELETE /person/all`.
    async fn remove_all(&self) -> Result<(), ApiError>;
}

/// Triggers for the external ETL job.
pub trait EtlClient {
    /// `POST /etl/run?file=data`: import the backend's bundled sample.
    async fn submit_sample(&self) -> Result<JobResult, ApiError>;

    /// `POST /etl/upload` with `file` as a multipart field. The name has already
    /// been checked by the caller; the bytes are sent untouched.
    async fn submit_upload(&self, file: &CsvFile) -> Result<JobResult, ApiError>;

    /// `GET /etl/info`.
    async fn job_info(&self) -> Result<JobInfo, ApiError>;
}
