//! Executes the calls emitted by [`Console::update`](crate::state::Console::update).

use crate::api::{EtlClient, PersonClient};
use crate::state::{Action, Call, JobRequest, Mutation};

/// Performs one backend call and returns the action that reports its outcome.
///
/// Exactly one request is made per call; failures are returned inside the action,
/// never retried.
pub async fn perform<C>(client: &C, call: Call) -> Action
where
    C: PersonClient + EtlClient,
{
    match call {
        Call::FetchPersons { ticket, purpose } => Action::PersonsLoaded {
            ticket,
            purpose,
            result: client.list_all().await,
        },
        Call::Mutate(mutation) => {
            let result = match &mutation {
                Mutation::Create { name } => client.create(name).await,
                Mutation::Update { id, name, .. } => client.update(*id, name).await,
                Mutation::Delete { id } => client.remove(*id).await,
                Mutation::DeleteAll => client.remove_all().await,
            };
            Action::MutationSettled { mutation, result }
        }
        Call::RunJob { ticket, request } => {
            let result = match &request {
                JobRequest::Sample => client.submit_sample().await,
                JobRequest::Upload(file) => client.submit_upload(file).await,
            };
            Action::JobSettled {
                ticket,
                request,
                result,
            }
        }
        Call::FetchJobInfo => Action::JobInfoLoaded(client.job_info().await),
    }
}
