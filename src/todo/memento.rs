use serde::{Deserialize, Serialize};

use super::TodoId;

/// Plain capture of the persisted fields of a [`Todo`](super::Todo).
///
/// Produced by `Todo::snapshot` and consumed by `Todo::restore`. It carries no
/// behavior, so moving it across the persistence boundary cannot raise events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoMemento {
    pub id: TodoId,
    pub description: String,
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_matches_transport_fields() {
        let memento = TodoMemento {
            id: TodoId::nil(),
            description: "Bla bla bla".into(),
            is_complete: false,
        };
        let value = serde_json::to_value(&memento).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "description": "Bla bla bla",
                "isComplete": false,
            })
        );
    }
}
