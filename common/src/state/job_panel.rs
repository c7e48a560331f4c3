//! ETL panel state: source selection, the in-flight flag and the last summary.

use std::fmt;

use crate::error::ApiError;
use crate::model::job::{JobInfo, JobResult};
use crate::model::upload::{is_csv_filename, CsvFile, UploadMode};

pub const JOB_FAILED: &str = "Error executing ETL job";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadSelection {
    pub mode: UploadMode,
    /// Only ever `Some` in upload mode.
    pub file: Option<CsvFile>,
}

/// The job a run dispatches, fixed at the moment Run is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobRequest {
    Sample,
    Upload(CsvFile),
}

impl JobRequest {
    fn source_label(&self) -> String {
        match self {
            JobRequest::Sample => "sample data".to_string(),
            JobRequest::Upload(file) => format!("file: {}", file.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRejection {
    NotCsv(String),
}

impl fmt::Display for FileRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRejection::NotCsv(_) => f.write_str("Please select a CSV file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobPanel {
    pub selection: UploadSelection,
    pub in_flight: bool,
    /// Summary of the most recent run; cleared as soon as a new run starts.
    pub last_result: Option<JobResult>,
    pub info: Option<JobInfo>,
}

impl JobPanel {
    pub fn set_mode(&mut self, mode: UploadMode) {
        self.selection.mode = mode;
        if mode == UploadMode::Sample {
            self.selection.file = None;
        }
    }

    /// Stores `file` as the upload source. A non-CSV name is rejected and the
    /// previous selection is kept. Ignored outside upload mode.
    pub fn select_file(&mut self, file: CsvFile) -> Result<(), FileRejection> {
        if !is_csv_filename(&file.name) {
            return Err(FileRejection::NotCsv(file.name));
        }
        if self.selection.mode == UploadMode::Upload {
            self.selection.file = Some(file);
        }
        Ok(())
    }

    pub fn remove_file(&mut self) {
        self.selection.file = None;
    }

    pub fn can_run(&self) -> bool {
        !self.in_flight
            && !(self.selection.mode == UploadMode::Upload && self.selection.file.is_none())
    }

    /// Starts a run if allowed: marks the panel in flight, clears the previous
    /// summary and returns what to submit.
    pub fn begin_run(&mut self) -> Option<JobRequest> {
        if !self.can_run() {
            return None;
        }
        let request = match (&self.selection.mode, &self.selection.file) {
            (UploadMode::Upload, Some(file)) => JobRequest::Upload(file.clone()),
            _ => JobRequest::Sample,
        };
        self.in_flight = true;
        self.last_result = None;
        Some(request)
    }

    pub fn finish_run(&mut self, result: Option<JobResult>) {
        self.in_flight = false;
        self.last_result = result;
    }
}

/// Success line for a finished run. Duplicates are only mentioned when there were any.
pub fn success_message(request: &JobRequest, result: &JobResult) -> String {
    let counts = if result.duplicate_count > 0 {
        format!(
            "{} saved, {} duplicates skipped",
            result.write_count, result.duplicate_count
        )
    } else {
        format!("{} records saved", result.write_count)
    };
    format!("ETL job completed ({}): {}", request.source_label(), counts)
}

/// Error line for a failed run: the server's own message when it sent one.
pub fn failure_message(err: &ApiError) -> String {
    err.server_message().unwrap_or(JOB_FAILED).to_string()
}
