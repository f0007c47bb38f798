use serde::{Deserialize, Serialize};

/// Display metadata for one roast character, served to the selector UI.
/// The backend only ever branches on `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub description: String,
}
