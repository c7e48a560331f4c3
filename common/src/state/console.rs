//! Root store: wires the person list, the ETL panel and the notification slot.

use crate::error::ApiError;
use crate::model::job::{JobInfo, JobResult};
use crate::model::notification::Notification;
use crate::model::person::{Person, PersonId};
use crate::model::upload::{CsvFile, UploadMode};

use super::job_panel::{failure_message, success_message, JobPanel, JobRequest};
use super::person_list::PersonList;
use super::sequence::{RequestSequencer, Resource, Ticket};

pub const FETCH_FAILED: &str = "Error fetching persons from database";

/// Why the person list is being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPurpose {
    /// First load after mount. Failure leaves an empty list.
    Initial,
    /// Refresh button. Success clears the notification.
    Manual,
    /// Resync after a mutation or job. Success keeps that operation's notification.
    FollowUp,
}

/// A write against the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create { name: String },
    Update {
        ticket: Ticket,
        id: PersonId,
        name: String,
    },
    Delete { id: PersonId },
    DeleteAll,
}

impl Mutation {
    fn success_text(&self) -> &'static str {
        match self {
            Mutation::Create { .. } => "Person created successfully!",
            Mutation::Update { .. } => "Person updated successfully!",
            Mutation::Delete { .. } => "Person deleted successfully!",
            Mutation::DeleteAll => "All persons deleted successfully!",
        }
    }

    fn failure_text(&self) -> &'static str {
        match self {
            Mutation::Create { .. } => "Error creating person",
            Mutation::Update { .. } => "Error updating person",
            Mutation::Delete { .. } => "Error deleting person",
            Mutation::DeleteAll => "Error deleting all persons",
        }
    }
}

/// One backend request the store wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchPersons { ticket: Ticket, purpose: FetchPurpose },
    Mutate(Mutation),
    RunJob { ticket: Ticket, request: JobRequest },
    FetchJobInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Call(Call),
    /// Blocking alert shown to the user.
    Alert(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Mount,
    Refresh,
    PersonsLoaded {
        ticket: Ticket,
        purpose: FetchPurpose,
        result: Result<Vec<Person>, ApiError>,
    },

    CreatePerson(String),
    StartEdit(PersonId),
    EditDraft(String),
    CancelEdit,
    SaveEdit,
    DeletePerson(PersonId),
    DeleteAll,
    MutationSettled {
        mutation: Mutation,
        result: Result<(), ApiError>,
    },

    SelectMode(UploadMode),
    FileSelected(CsvFile),
    RemoveFile,
    RunJob,
    JobSettled {
        ticket: Ticket,
        request: JobRequest,
        result: Result<JobResult, ApiError>,
    },
    JobInfoLoaded(Result<JobInfo, ApiError>),
}

impl Action {
    /// The backend error carried by a settlement action, if it failed.
    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            Action::PersonsLoaded { result: Err(e), .. }
            | Action::MutationSettled { result: Err(e), .. }
            | Action::JobSettled { result: Err(e), .. }
            | Action::JobInfoLoaded(Err(e)) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Console {
    pub persons: PersonList,
    pub jobs: JobPanel,
    pub notification: Notification,
    sequencer: RequestSequencer,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action` and returns the effects to run, in order.
    pub fn update(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Mount => vec![
                self.fetch(FetchPurpose::Initial),
                Effect::Call(Call::FetchJobInfo),
            ],
            Action::Refresh => vec![self.fetch(FetchPurpose::Manual)],
            Action::PersonsLoaded {
                ticket,
                purpose,
                result,
            } => {
                self.persons_loaded(ticket, purpose, result);
                Vec::new()
            }

            Action::CreatePerson(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Vec::new();
                }
                vec![mutate(Mutation::Create {
                    name: name.to_string(),
                })]
            }
            Action::StartEdit(id) => {
                self.persons.start_edit(id);
                Vec::new()
            }
            Action::EditDraft(draft) => {
                self.persons.set_draft(draft);
                Vec::new()
            }
            Action::CancelEdit => {
                self.persons.cancel_edit();
                Vec::new()
            }
            Action::SaveEdit => match self.persons.begin_save(&mut self.sequencer) {
                Some((ticket, id, name)) => vec![mutate(Mutation::Update { ticket, id, name })],
                None => Vec::new(),
            },
            Action::DeletePerson(id) => vec![mutate(Mutation::Delete { id })],
            Action::DeleteAll => vec![mutate(Mutation::DeleteAll)],
            Action::MutationSettled { mutation, result } => self.mutation_settled(mutation, result),

            Action::SelectMode(mode) => {
                self.jobs.set_mode(mode);
                Vec::new()
            }
            Action::FileSelected(file) => match self.jobs.select_file(file) {
                Ok(()) => Vec::new(),
                Err(rejection) => vec![Effect::Alert(rejection.to_string())],
            },
            Action::RemoveFile => {
                self.jobs.remove_file();
                Vec::new()
            }
            Action::RunJob => match self.jobs.begin_run() {
                Some(request) => {
                    let ticket = self.sequencer.issue(Resource::JobRun);
                    vec![Effect::Call(Call::RunJob { ticket, request })]
                }
                None => Vec::new(),
            },
            Action::JobSettled {
                ticket,
                request,
                result,
            } => self.job_settled(ticket, request, result),
            Action::JobInfoLoaded(result) => {
                if let Ok(info) = result {
                    self.jobs.info = Some(info);
                }
                Vec::new()
            }
        }
    }

    fn fetch(&mut self, purpose: FetchPurpose) -> Effect {
        let ticket = self.sequencer.issue(Resource::PersonList);
        if purpose != FetchPurpose::FollowUp {
            self.persons.loading = true;
        }
        Effect::Call(Call::FetchPersons { ticket, purpose })
    }

    fn persons_loaded(
        &mut self,
        ticket: Ticket,
        purpose: FetchPurpose,
        result: Result<Vec<Person>, ApiError>,
    ) {
        if !self.sequencer.is_current(ticket) {
            return;
        }
        self.persons.loading = false;
        match result {
            Ok(persons) => {
                self.persons.replace(persons);
                if purpose != FetchPurpose::FollowUp {
                    self.notification = Notification::none();
                }
            }
            Err(_) => {
                if purpose == FetchPurpose::Initial {
                    self.persons.replace(Vec::new());
                }
                self.notification = Notification::error(FETCH_FAILED);
            }
        }
    }

    fn mutation_settled(&mut self, mutation: Mutation, result: Result<(), ApiError>) -> Vec<Effect> {
        let succeeded = result.is_ok();
        if let Mutation::Update { ticket, .. } = &mutation {
            self.persons.finish_save(*ticket, succeeded);
        }
        if succeeded {
            self.notification = Notification::success(mutation.success_text());
            vec![self.fetch(FetchPurpose::FollowUp)]
        } else {
            self.notification = Notification::error(mutation.failure_text());
            Vec::new()
        }
    }

    fn job_settled(
        &mut self,
        ticket: Ticket,
        request: JobRequest,
        result: Result<JobResult, ApiError>,
    ) -> Vec<Effect> {
        if !self.sequencer.is_current(ticket) {
            return Vec::new();
        }
        match result {
            Ok(summary) => {
                self.notification = Notification::success(success_message(&request, &summary));
                self.jobs.finish_run(Some(summary));
            }
            Err(err) => {
                self.notification = Notification::error(failure_message(&err));
                self.jobs.finish_run(None);
            }
        }
        vec![self.fetch(FetchPurpose::FollowUp)]
    }
}

fn mutate(mutation: Mutation) -> Effect {
    Effect::Call(Call::Mutate(mutation))
}
