//! `fetch`-backed client for the person record store and the ETL job.
//!
//! Every request is built from `common::requests::Endpoint`, so the URL shapes
//! here are exactly the ones the backend expects. Non-2xx responses become
//! `ApiError::Status` carrying the optional `message` field of the body.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use common::error::ApiError;
use common::model::job::{JobInfo, JobResult};
use common::model::person::{Person, PersonId};
use common::model::upload::CsvFile;
use common::requests::{Endpoint, HttpMethod, UPLOAD_FIELD};
use common::{ConsoleConfig, EtlClient, PersonClient};

#[derive(Clone, Debug, PartialEq)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
        }
    }

    fn builder(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        match endpoint.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
    }

    async fn send(&self, endpoint: Endpoint) -> Result<Response, ApiError> {
        let response = self
            .builder(&endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(response).await
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", err))
}

/// Wraps the CSV bytes in a multipart body under the `file` field.
fn csv_form(file: &CsvFile) -> Result<FormData, ApiError> {
    let bytes = js_sys::Uint8Array::from(&*file.bytes);
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.name)
        .map_err(js_error)?;
    Ok(form)
}

impl PersonClient for HttpClient {
    async fn list_all(&self) -> Result<Vec<Person>, ApiError> {
        let response = self.send(Endpoint::list_persons()).await?;
        decode(response).await
    }

    async fn create(&self, name: &str) -> Result<(), ApiError> {
        self.send(Endpoint::create_person(name)).await.map(|_| ())
    }

    async fn update(&self, id: PersonId, name: &str) -> Result<(), ApiError> {
        self.send(Endpoint::update_person(id, name)).await.map(|_| ())
    }

    async fn remove(&self, id: PersonId) -> Result<(), ApiError> {
        self.send(Endpoint::delete_person(id)).await.map(|_| ())
    }

    async fn remove_all(&self) -> Result<(), ApiError> {
        self.send(Endpoint::delete_all_persons()).await.map(|_| ())
    }
}

impl EtlClient for HttpClient {
    async fn submit_sample(&self) -> Result<JobResult, ApiError> {
        let response = self.send(Endpoint::run_sample()).await?;
        decode(response).await
    }

    async fn submit_upload(&self, file: &CsvFile) -> Result<JobResult, ApiError> {
        // The browser fills in the multipart boundary; no Content-Type header here.
        let request = self
            .builder(&Endpoint::upload_csv())
            .body(csv_form(file)?)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = check_status(response).await?;
        decode(response).await
    }

    async fn job_info(&self) -> Result<JobInfo, ApiError> {
        let response = self.send(Endpoint::job_info()).await?;
        decode(response).await
    }
}
