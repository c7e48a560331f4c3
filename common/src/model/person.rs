use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a person record.
pub type PersonId = i64;

/// A person record as returned by `GET /person/all`.
///
/// The id is always assigned by the record store; the console never invents one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_list() {
        let persons: Vec<Person> =
            serde_json::from_str(r#"[{"id":1,"name":"Ada"},{"id":7,"name":"Grace"}]"#).unwrap();
        assert_eq!(persons, vec![Person::new(1, "Ada"), Person::new(7, "Grace")]);
    }
}
