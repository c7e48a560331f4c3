use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status string the ETL backend reports for a clean run.
pub const STATUS_COMPLETED: &str = "COMPLETED";

/// Summary returned by `POST /etl/run` and `POST /etl/upload`.
///
/// The backend omits or nulls any field it has no value for, so every counter
/// defaults to zero and every list to empty. Only the most recent result is ever
/// kept by the console.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobResult {
    pub status: Option<String>,
    pub exit_status: Option<String>,
    pub message: Option<String>,
    pub job_id: Option<i64>,
    pub filename: Option<String>,
    /// Timestamps are carried through untouched; their encoding varies by server.
    pub start_time: Option<Value>,
    pub end_time: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub read_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub write_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub skip_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub duplicate_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub duplicates: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Color family for a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
}

impl JobResult {
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("N/A")
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_COMPLETED)
    }

    pub fn status_tone(&self) -> Tone {
        if self.is_completed() {
            Tone::Success
        } else {
            Tone::Warning
        }
    }

    pub fn skip_tone(&self) -> Tone {
        if self.skip_count > 0 {
            Tone::Warning
        } else {
            Tone::Success
        }
    }
}

/// Static description of the import job, served by `GET /etl/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    pub job_name: String,
    pub description: String,
    pub restartable: bool,
    pub architecture: String,
    pub chunk_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counters_default_to_zero() {
        let result: JobResult = serde_json::from_str(r#"{"writeCount":4}"#).unwrap();
        assert_eq!(result.status, None);
        assert_eq!(result.write_count, 4);
        assert_eq!(result.read_count, 0);
        assert_eq!(result.skip_count, 0);
        assert_eq!(result.duplicate_count, 0);
        assert!(result.errors.is_empty());
        assert_eq!(result.status_label(), "N/A");
        assert_eq!(result.status_tone(), Tone::Warning);
    }

    #[test]
    fn null_counters_read_as_zero() {
        let result: JobResult = serde_json::from_str(
            r#"{"status":"COMPLETED","readCount":null,"writeCount":3,
                "skipCount":null,"duplicates":null,"startTime":[2024,5,1,10,0,0]}"#,
        )
        .unwrap();
        assert!(result.is_completed());
        assert_eq!(result.read_count, 0);
        assert_eq!(result.write_count, 3);
        assert_eq!(result.skip_count, 0);
        assert!(result.duplicates.is_empty());
        assert!(result.start_time.is_some());
        assert_eq!(result.end_time, None);
    }

    #[test]
    fn upload_response_with_duplicates() {
        let body = r#"{
            "status": "COMPLETED_WITH_ERRORS",
            "exitStatus": "COMPLETED",
            "message": "Processed: 3 saved, 1 duplicates skipped",
            "filename": "people.csv",
            "readCount": 5,
            "writeCount": 3,
            "skipCount": 1,
            "duplicateCount": 1,
            "duplicates": ["Ada"],
            "errors": ["line 4: empty name"]
        }"#;
        let result: JobResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.filename.as_deref(), Some("people.csv"));
        assert_eq!(result.duplicates, vec!["Ada".to_string()]);
        assert_eq!(result.errors.len(), 1);
        assert!(!result.is_completed());
        assert_eq!(result.skip_tone(), Tone::Warning);
    }

    #[test]
    fn completed_status_is_success_tone() {
        let result = JobResult {
            status: Some(STATUS_COMPLETED.to_string()),
            ..JobResult::default()
        };
        assert_eq!(result.status_tone(), Tone::Success);
        assert_eq!(result.skip_tone(), Tone::Success);
    }

    #[test]
    fn job_info_uses_camel_case() {
        let info: JobInfo = serde_json::from_str(
            r#"{"jobName":"importPersonJob","description":"d","restartable":true,
                "architecture":"Reader -> Processor -> Writer","chunkSize":5}"#,
        )
        .unwrap();
        assert_eq!(info.job_name, "importPersonJob");
        assert_eq!(info.chunk_size, 5);
    }
}
