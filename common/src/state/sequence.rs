use std::collections::HashMap;

/// A logical resource whose responses may race each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    PersonList,
    /// Saves from the inline editor.
    PersonEdit,
    JobRun,
}

/// Tag attached to a dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub resource: Resource,
    pub seq: u64,
}

/// Hands out monotonically increasing tickets per resource.
///
/// Only the response carrying the latest ticket for its resource may be applied;
/// anything older was overtaken by a newer request and is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: HashMap<Resource, u64>,
}

impl RequestSequencer {
    pub fn issue(&mut self, resource: Resource) -> Ticket {
        let seq = self.latest.entry(resource).or_insert(0);
        *seq += 1;
        Ticket {
            resource,
            seq: *seq,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get(&ticket.resource) == Some(&ticket.seq)
    }
}
