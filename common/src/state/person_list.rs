//! Person list state: the last fetched records plus the inline editor.

use crate::model::person::{Person, PersonId};

use super::sequence::{RequestSequencer, Resource, Ticket};

pub const EMPTY_STATE_TEXT: &str = "No persons registered yet";

/// Inline-edit state machine. At most one row is edited at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing {
        id: PersonId,
        draft: String,
        /// Ticket of the update this editor has on the wire, if any.
        pending: Option<Ticket>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonList {
    /// Exactly what the last applied fetch returned, in server order.
    pub persons: Vec<Person>,
    /// A user-visible fetch (initial or manual) is in flight.
    pub loading: bool,
    pub edit: EditState,
}

impl PersonList {
    /// Replaces the displayed records. An open editor survives only if its row
    /// is still present.
    pub fn replace(&mut self, persons: Vec<Person>) {
        self.persons = persons;
        if let Some(id) = self.editing_id() {
            if !self.contains(id) {
                self.edit = EditState::Viewing;
            }
        }
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.persons.iter().any(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Opens the editor on `id`, seeded with the row's current name. Any other
    /// open draft is dropped. Returns false if the row is not displayed.
    pub fn start_edit(&mut self, id: PersonId) -> bool {
        match self.persons.iter().find(|p| p.id == id) {
            Some(person) => {
                self.edit = EditState::Editing {
                    id,
                    draft: person.name.clone(),
                    pending: None,
                };
                true
            }
            None => false,
        }
    }

    pub fn set_draft(&mut self, value: String) {
        if let EditState::Editing { draft, .. } = &mut self.edit {
            *draft = value;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// Marks the open editor as saving and returns the update to send, tagged
    /// with a fresh ticket.
    ///
    /// Refused (`None`) when nothing is edited, a save is already pending, or the
    /// draft is blank after trimming; the editor stays open in every case.
    pub fn begin_save(
        &mut self,
        sequencer: &mut RequestSequencer,
    ) -> Option<(Ticket, PersonId, String)> {
        match &mut self.edit {
            EditState::Editing { id, draft, pending } if pending.is_none() => {
                let name = draft.trim();
                if name.is_empty() {
                    return None;
                }
                let ticket = sequencer.issue(Resource::PersonEdit);
                *pending = Some(ticket);
                Some((ticket, *id, name.to_string()))
            }
            _ => None,
        }
    }

    /// Settles the save tagged `ticket`. Success closes the editor; failure keeps
    /// the draft open so the user can retry. A save from an editor that was
    /// since cancelled or reopened is ignored.
    pub fn finish_save(&mut self, ticket: Ticket, succeeded: bool) {
        if let EditState::Editing { pending, .. } = &mut self.edit {
            if *pending != Some(ticket) {
                return;
            }
            if succeeded {
                self.edit = EditState::Viewing;
            } else {
                *pending = None;
            }
        }
    }

    pub fn editing_id(&self) -> Option<PersonId> {
        match &self.edit {
            EditState::Editing { id, .. } => Some(*id),
            EditState::Viewing => None,
        }
    }

    pub fn is_editing(&self, id: PersonId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.edit {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Viewing => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.edit, EditState::Editing { pending: Some(_), .. })
    }

    /// Delete-all is only offered when there is something to delete.
    pub fn can_delete_all(&self) -> bool {
        !self.persons.is_empty()
    }

    pub fn total_label(&self) -> String {
        let count = self.persons.len();
        let noun = if count == 1 { "person" } else { "persons" };
        format!("Total: {} {}", count, noun)
    }
}
