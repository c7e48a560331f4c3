//! Upload selection types for the ETL panel.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Where the next ETL run reads its rows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UploadMode {
    /// The dataset bundled with the backend (`POST /etl/run?file=data`).
    #[default]
    Sample,
    /// A CSV file chosen by the user (`POST /etl/upload`).
    Upload,
}

/// A user-selected CSV file, already read into memory.
///
/// The bytes are shared so the selection can be cloned into view props and
/// pending requests without copying the payload.
#[derive(Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub name: String,
    pub bytes: Rc<[u8]>,
}

impl CsvFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Rc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Size in kilobytes with two decimals, e.g. `"1.50 KB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size() as f64 / 1024.0)
    }
}

// The payload can be megabytes; keep it out of debug output.
impl std::fmt::Debug for CsvFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvFile")
            .field("name", &self.name)
            .field("size", &self.size())
            .finish()
    }
}

/// Returns true when `name` carries a `.csv` extension, ignoring ASCII case.
pub fn is_csv_filename(name: &str) -> bool {
    let name = name.trim();
    name.len() > ".csv".len() && name.to_ascii_lowercase().ends_with(".csv")
}
