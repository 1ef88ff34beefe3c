use serde::{Deserialize, Serialize};

/// A single todo item exchanged with the remote API.
///
/// All four fields are required on the wire. The server contract names the
/// completion flag `finished`; in memory it is `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier. Empty until the server has created the item.
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    #[serde(rename = "finished")]
    pub completed: bool,
}

impl Task {
    pub fn new(id: &str, user_id: &str, title: &str, completed: bool) -> Self {
        Self {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            completed,
        }
    }
}
