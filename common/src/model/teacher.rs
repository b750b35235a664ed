use serde::{Deserialize, Serialize};

/// Body of `POST /teacher`.
///
/// `classes` only ever holds trimmed, non-empty names in the order they were
/// entered. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherPayload {
    pub id: String,
    pub name: String,
    pub password: String,
    pub classes: Vec<String>,
}
