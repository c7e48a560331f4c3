//! HTTP contract of the person/ETL backend.
//!
//! Names travel as query parameters and ids as path segments; the backend expects
//! exactly this shape, so every request the console makes is built here.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::model::person::PersonId;

/// Characters left as-is in query values, mirroring `encodeURIComponent`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Multipart field carrying the CSV bytes on `POST /etl/upload`.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        })
    }
}

/// One backend request: method plus path (with query, already encoded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
}

impl Endpoint {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    pub fn list_persons() -> Self {
        Self::new(HttpMethod::Get, "/person/all")
    }

    pub fn create_person(name: &str) -> Self {
        Self::new(
            HttpMethod::Post,
            format!("/person/create?name={}", encode(name)),
        )
    }

    pub fn update_person(id: PersonId, name: &str) -> Self {
        Self::new(HttpMethod::Put, format!("/person/{}?name={}", id, encode(name)))
    }

    pub fn delete_person(id: PersonId) -> Self {
        Self::new(HttpMethod::Delete, format!("/person/{}", id))
    }

    pub fn delete_all_persons() -> Self {
        Self::new(HttpMethod::Delete, "/person/all")
    }

    pub fn run_sample() -> Self {
        Self::new(HttpMethod::Post, "/etl/run?file=data")
    }

    pub fn upload_csv() -> Self {
        Self::new(HttpMethod::Post, "/etl/upload")
    }

    pub fn job_info() -> Self {
        Self::new(HttpMethod::Get, "/etl/info")
    }

    /// Absolute URL against `base` (e.g. `http://localhost:8080`).
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
