//! End-to-end workflow tests: the store driven against an in-memory backend.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use common::error::ApiError;
use common::model::job::{JobInfo, JobResult, Tone};
use common::model::notification::Severity;
use common::model::person::{Person, PersonId};
use common::model::upload::{CsvFile, UploadMode};
use common::requests::Endpoint;
use common::state::console::FETCH_FAILED;
use common::state::{Action, Call, Console, Effect};
use common::{perform, EtlClient, PersonClient};

/// Record store and ETL backend in one, logging every request it receives.
struct FakeBackend {
    persons: RefCell<Vec<Person>>,
    next_id: Cell<PersonId>,
    calls: RefCell<Vec<String>>,
    job_response: RefCell<Result<JobResult, ApiError>>,
    uploads: RefCell<Vec<(String, Vec<u8>)>>,
    failing: RefCell<Vec<String>>,
}

impl FakeBackend {
    fn with_names(names: &[&str]) -> Self {
        let persons: Vec<Person> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Person::new(i as PersonId + 1, *name))
            .collect();
        Self {
            next_id: Cell::new(persons.len() as PersonId + 1),
            persons: RefCell::new(persons),
            calls: RefCell::new(Vec::new()),
            job_response: RefCell::new(Ok(JobResult::default())),
            uploads: RefCell::new(Vec::new()),
            failing: RefCell::new(Vec::new()),
        }
    }

    /// Makes every request to `endpoint` answer 500.
    fn fail(&self, endpoint: Endpoint) {
        self.failing.borrow_mut().push(endpoint.to_string());
    }

    fn record(&self, endpoint: Endpoint) -> Result<(), ApiError> {
        let line = endpoint.to_string();
        self.calls.borrow_mut().push(line.clone());
        if self.failing.borrow().contains(&line) {
            return Err(ApiError::Status {
                status: 500,
                message: None,
            });
        }
        Ok(())
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn count(&self, line: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == line).count()
    }

    fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn names(&self) -> Vec<String> {
        self.persons.borrow().iter().map(|p| p.name.clone()).collect()
    }
}

impl PersonClient for FakeBackend {
    async fn list_all(&self) -> Result<Vec<Person>, ApiError> {
        self.record(Endpoint::list_persons())?;
        Ok(self.persons.borrow().clone())
    }

    async fn create(&self, name: &str) -> Result<(), ApiError> {
        self.record(Endpoint::create_person(name))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.persons.borrow_mut().push(Person::new(id, name));
        Ok(())
    }

    async fn update(&self, id: PersonId, name: &str) -> Result<(), ApiError> {
        self.record(Endpoint::update_person(id, name))?;
        let mut persons = self.persons.borrow_mut();
        match persons.iter_mut().find(|p| p.id == id) {
            Some(person) => {
                person.name = name.to_string();
                Ok(())
            }
            None => Err(ApiError::Status {
                status: 404,
                message: None,
            }),
        }
    }

    async fn remove(&self, id: PersonId) -> Result<(), ApiError> {
        self.record(Endpoint::delete_person(id))?;
        self.persons.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }

    async fn remove_all(&self) -> Result<(), ApiError> {
        self.record(Endpoint::delete_all_persons())?;
        self.persons.borrow_mut().clear();
        Ok(())
    }
}

impl EtlClient for FakeBackend {
    async fn submit_sample(&self) -> Result<JobResult, ApiError> {
        self.record(Endpoint::run_sample())?;
        let result = self.job_response.borrow().clone();
        if let Ok(summary) = &result {
            for i in 0..summary.write_count {
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                self.persons
                    .borrow_mut()
                    .push(Person::new(id, format!("Imported {}", i)));
            }
        }
        result
    }

    async fn submit_upload(&self, file: &CsvFile) -> Result<JobResult, ApiError> {
        self.record(Endpoint::upload_csv())?;
        self.uploads
            .borrow_mut()
            .push((file.name.clone(), file.bytes.to_vec()));
        self.job_response.borrow().clone()
    }

    async fn job_info(&self) -> Result<JobInfo, ApiError> {
        self.record(Endpoint::job_info())?;
        Ok(JobInfo {
            job_name: "importPersonJob".into(),
            description: "Imports persons from CSV".into(),
            restartable: true,
            architecture: "Reader -> Processor -> Writer".into(),
            chunk_size: 5,
        })
    }
}

/// Runs effects first-in first-out until the store goes quiet. Returns the alerts raised.
async fn settle(console: &mut Console, backend: &FakeBackend, effects: Vec<Effect>) -> Vec<String> {
    let mut queue: VecDeque<Effect> = effects.into();
    let mut alerts = Vec::new();
    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::Call(call) => {
                let action = perform(backend, call).await;
                queue.extend(console.update(action));
            }
            Effect::Alert(text) => alerts.push(text),
        }
    }
    alerts
}

async fn dispatch(console: &mut Console, backend: &FakeBackend, action: Action) -> Vec<String> {
    let effects = console.update(action);
    settle(console, backend, effects).await
}

async fn mounted(backend: &FakeBackend) -> Console {
    let mut console = Console::new();
    dispatch(&mut console, backend, Action::Mount).await;
    backend.clear_calls();
    console
}

fn single_call(effects: Vec<Effect>) -> Call {
    match <[Effect; 1]>::try_from(effects) {
        Ok([Effect::Call(call)]) => call,
        other => panic!("expected exactly one call, got {:?}", other),
    }
}

#[tokio::test]
async fn initial_load_shows_every_person() {
    let backend = FakeBackend::with_names(&["Ada", "Grace", "Linus"]);
    let mut console = Console::new();

    dispatch(&mut console, &backend, Action::Mount).await;

    assert_eq!(console.persons.persons.len(), 3);
    assert!(!console.persons.loading);
    assert!(!console.notification.is_error());
    assert_eq!(backend.count("GET /person/all"), 1);
    assert_eq!(
        console.jobs.info.as_ref().map(|i| i.chunk_size),
        Some(5)
    );
}

#[tokio::test]
async fn initial_load_failure_shows_error_and_empty_list() {
    let backend = FakeBackend::with_names(&["Ada"]);
    backend.fail(Endpoint::list_persons());
    let mut console = Console::new();

    dispatch(&mut console, &backend, Action::Mount).await;

    assert!(console.persons.is_empty());
    assert!(console.notification.is_error());
    assert_eq!(backend.count("GET /person/all"), 1);
}

#[tokio::test]
async fn create_sends_one_request_and_one_refresh() {
    let backend = FakeBackend::with_names(&[]);
    let mut console = mounted(&backend).await;

    dispatch(&mut console, &backend, Action::CreatePerson("Ada".into())).await;

    assert_eq!(
        backend.calls(),
        vec!["POST /person/create?name=Ada", "GET /person/all"]
    );
    assert_eq!(console.notification.severity, Severity::Success);
    assert_eq!(console.persons.persons, vec![Person::new(1, "Ada")]);
}

#[tokio::test]
async fn failed_create_skips_refresh() {
    let backend = FakeBackend::with_names(&["Grace"]);
    let mut console = mounted(&backend).await;
    backend.fail(Endpoint::create_person("Ada"));

    dispatch(&mut console, &backend, Action::CreatePerson("Ada".into())).await;

    assert_eq!(backend.calls(), vec!["POST /person/create?name=Ada"]);
    assert_eq!(console.notification.text, "Error creating person");
    assert_eq!(console.persons.persons.len(), 1);
}

#[tokio::test]
async fn cancelling_an_edit_makes_no_calls() {
    let backend = FakeBackend::with_names(&["Ada", "Grace"]);
    let mut console = mounted(&backend).await;

    dispatch(&mut console, &backend, Action::StartEdit(2)).await;
    dispatch(&mut console, &backend, Action::EditDraft("Someone else".into())).await;
    dispatch(&mut console, &backend, Action::CancelEdit).await;

    assert!(backend.calls().is_empty());
    assert_eq!(console.persons.persons[1].name, "Grace");
    assert_eq!(backend.names(), vec!["Ada", "Grace"]);
    assert_eq!(console.persons.editing_id(), None);
}

#[tokio::test]
async fn whitespace_draft_is_never_sent() {
    let backend = FakeBackend::with_names(&["Ada"]);
    let mut console = mounted(&backend).await;

    dispatch(&mut console, &backend, Action::StartEdit(1)).await;
    dispatch(&mut console, &backend, Action::EditDraft("   ".into())).await;
    dispatch(&mut console, &backend, Action::SaveEdit).await;

    assert!(backend.calls().is_empty());
    assert!(console.persons.is_editing(1));
}

#[tokio::test]
async fn saving_an_edit_updates_and_closes_the_row() {
    let backend = FakeBackend::with_names(&["Ada"]);
    let mut console = mounted(&backend).await;

    dispatch(&mut console, &backend, Action::StartEdit(1)).await;
    dispatch(&mut console, &backend, Action::EditDraft(" Ada Lovelace ".into())).await;
    dispatch(&mut console, &backend, Action::SaveEdit).await;

    assert_eq!(
        backend.calls(),
        vec!["PUT /person/1?name=Ada%20Lovelace", "GET /person/all"]
    );
    assert_eq!(console.persons.persons[0].name, "Ada Lovelace");
    assert_eq!(console.persons.editing_id(), None);
    assert_eq!(console.notification.text, "Person updated successfully!");
}

#[tokio::test]
async fn update_of_vanished_row_keeps_draft_for_retry() {
    let backend = FakeBackend::with_names(&["Ada"]);
    let mut console = mounted(&backend).await;
    dispatch(&mut console, &backend, Action::StartEdit(1)).await;
    backend.persons.borrow_mut().clear();

    dispatch(&mut console, &backend, Action::SaveEdit).await;

    assert_eq!(backend.calls(), vec!["PUT /person/1?name=Ada"]);
    assert!(console.persons.is_editing(1));
    assert_eq!(console.notification.text, "Error updating person");
}

#[tokio::test]
async fn reopened_editor_is_not_settled_by_an_earlier_save() {
    let backend = FakeBackend::with_names(&["Ada"]);
    let mut console = mounted(&backend).await;
    backend.fail(Endpoint::update_person(1, "First"));

    console.update(Action::StartEdit(1));
    console.update(Action::EditDraft("First".into()));
    let first = single_call(console.update(Action::SaveEdit));
    console.update(Action::CancelEdit);
    console.update(Action::StartEdit(1));
    console.update(Action::EditDraft("Second".into()));
    let second = single_call(console.update(Action::SaveEdit));

    let first_settled = perform(&backend, first).await;
    assert!(console.update(first_settled).is_empty());
    assert!(console.persons.is_saving());
    assert!(console.update(Action::SaveEdit).is_empty());

    settle(&mut console, &backend, vec![Effect::Call(second)]).await;

    assert_eq!(backend.count("PUT /person/1?name=Second"), 1);
    assert_eq!(console.persons.editing_id(), None);
    assert_eq!(console.persons.persons[0].name, "Second");
    assert_eq!(console.notification.text, "Person updated successfully!");
}

#[tokio::test]
async fn delete_all_ends_in_empty_state() {
    let backend = FakeBackend::with_names(&["Ada", "Grace"]);
    let mut console = mounted(&backend).await;
    assert!(console.persons.can_delete_all());

    dispatch(&mut console, &backend, Action::DeleteAll).await;

    assert_eq!(backend.calls(), vec!["DELETE /person/all", "GET /person/all"]);
    assert!(console.persons.is_empty());
    assert!(!console.persons.can_delete_all());
    assert_eq!(console.persons.total_label(), "Total: 0 persons");
}

#[tokio::test]
async fn sample_run_reports_written_and_duplicate_counts() {
    let backend = FakeBackend::with_names(&[]);
    *backend.job_response.borrow_mut() = Ok(JobResult {
        status: Some("COMPLETED".into()),
        read_count: 10,
        write_count: 8,
        skip_count: 0,
        duplicate_count: 2,
        ..JobResult::default()
    });
    let mut console = mounted(&backend).await;

    dispatch(&mut console, &backend, Action::RunJob).await;

    assert_eq!(backend.calls(), vec!["POST /etl/run?file=data", "GET /person/all"]);
    let message = &console.notification.text;
    assert!(message.contains('8'), "{}", message);
    assert!(message.contains('2'), "{}", message);
    assert_eq!(console.notification.severity, Severity::Success);

    let stats = console.jobs.last_result.as_ref().expect("summary stored");
    assert_eq!(stats.status_label(), "COMPLETED");
    assert_eq!(stats.status_tone(), Tone::Success);
    assert!(!console.jobs.in_flight);
    assert_eq!(console.persons.persons.len(), 8);
}

#[tokio::test]
async fn run_clears_previous_summary_while_in_flight() {
    let backend = FakeBackend::with_names(&[]);
    let mut console = mounted(&backend).await;
    dispatch(&mut console, &backend, Action::RunJob).await;
    assert!(console.jobs.last_result.is_some());

    let call = single_call(console.update(Action::RunJob));

    assert!(console.jobs.in_flight);
    assert_eq!(console.jobs.last_result, None);
    assert!(!console.jobs.can_run());
    assert!(console.update(Action::RunJob).is_empty());

    let action = perform(&backend, call).await;
    let effects = console.update(action);
    settle(&mut console, &backend, effects).await;
    assert!(!console.jobs.in_flight);
}

#[tokio::test]
async fn upload_run_posts_the_selected_file() {
    let backend = FakeBackend::with_names(&[]);
    *backend.job_response.borrow_mut() = Ok(JobResult {
        status: Some("COMPLETED".into()),
        write_count: 3,
        ..JobResult::default()
    });
    let mut console = mounted(&backend).await;

    dispatch(&mut console, &backend, Action::SelectMode(UploadMode::Upload)).await;
    let alerts = dispatch(
        &mut console,
        &backend,
        Action::FileSelected(CsvFile::new("people.csv", b"name\nAda\n".to_vec())),
    )
    .await;
    assert!(alerts.is_empty());
    dispatch(&mut console, &backend, Action::RunJob).await;

    assert_eq!(backend.calls(), vec!["POST /etl/upload", "GET /person/all"]);
    assert_eq!(
        backend.uploads.borrow().as_slice(),
        &[("people.csv".to_string(), b"name\nAda\n".to_vec())]
    );
    assert_eq!(
        console.notification.text,
        "ETL job completed (file: people.csv): 3 records saved"
    );
}

#[tokio::test]
async fn non_csv_upload_is_rejected_before_any_request() {
    let backend = FakeBackend::with_names(&[]);
    let mut console = mounted(&backend).await;

    dispatch(&mut console, &backend, Action::SelectMode(UploadMode::Upload)).await;
    let alerts = dispatch(
        &mut console,
        &backend,
        Action::FileSelected(CsvFile::new("report.txt", b"hello".to_vec())),
    )
    .await;

    assert_eq!(alerts, vec!["Please select a CSV file"]);
    assert_eq!(console.jobs.selection.file, None);
    assert!(!console.jobs.can_run());
    dispatch(&mut console, &backend, Action::RunJob).await;
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn job_failure_shows_server_message_and_still_refreshes() {
    let backend = FakeBackend::with_names(&["Ada"]);
    *backend.job_response.borrow_mut() = Err(ApiError::Status {
        status: 400,
        message: Some("CSV header is missing".into()),
    });
    let mut console = mounted(&backend).await;

    dispatch(&mut console, &backend, Action::RunJob).await;

    assert_eq!(console.notification.text, "CSV header is missing");
    assert!(console.notification.is_error());
    assert_eq!(console.jobs.last_result, None);
    assert!(!console.jobs.in_flight);
    assert_eq!(backend.count("GET /person/all"), 1);
}

#[tokio::test]
async fn concurrent_deletes_converge_despite_reordering() {
    let backend = FakeBackend::with_names(&["Ada", "Grace", "Linus"]);
    let mut console = mounted(&backend).await;

    let delete_one = single_call(console.update(Action::DeletePerson(1)));
    let delete_two = single_call(console.update(Action::DeletePerson(2)));

    // The second delete settles first and its refresh runs before the first delete lands.
    let settled_two = perform(&backend, delete_two).await;
    let early_refresh = single_call(console.update(settled_two));
    let early_listing = perform(&backend, early_refresh).await;

    let settled_one = perform(&backend, delete_one).await;
    let late_refresh = single_call(console.update(settled_one));
    let late_listing = perform(&backend, late_refresh).await;

    // Listings arrive newest first; the older one must not resurrect id 1.
    assert!(console.update(late_listing).is_empty());
    assert!(console.update(early_listing).is_empty());

    assert_eq!(console.persons.persons, vec![Person::new(3, "Linus")]);
    assert_eq!(backend.count("DELETE /person/1"), 1);
    assert_eq!(backend.count("DELETE /person/2"), 1);
}

#[tokio::test]
async fn manual_refresh_after_error_clears_the_message() {
    let backend = FakeBackend::with_names(&["Ada"]);
    backend.fail(Endpoint::delete_person(1));
    let mut console = mounted(&backend).await;

    dispatch(&mut console, &backend, Action::DeletePerson(1)).await;
    assert!(console.notification.is_error());

    dispatch(&mut console, &backend, Action::Refresh).await;
    assert!(!console.notification.is_visible());
    assert_eq!(console.persons.persons.len(), 1);
}

#[tokio::test]
async fn failed_refresh_after_create_reports_fetch_error_and_keeps_list() {
    let backend = FakeBackend::with_names(&["Ada"]);
    let mut console = mounted(&backend).await;
    backend.fail(Endpoint::list_persons());

    dispatch(&mut console, &backend, Action::CreatePerson("Grace".into())).await;

    assert_eq!(
        backend.calls(),
        vec!["POST /person/create?name=Grace", "GET /person/all"]
    );
    assert_eq!(backend.names(), vec!["Ada", "Grace"]);
    assert_eq!(console.persons.persons, vec![Person::new(1, "Ada")]);
    assert!(!console.persons.loading);
    assert_eq!(console.notification.text, FETCH_FAILED);
    assert!(console.notification.is_error());
}
