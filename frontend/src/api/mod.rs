//! Browser implementation of the backend client traits.

mod http_client;

pub use http_client::HttpClient;
