use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RoastRequest {
    /// Snippet to critique. Missing fields deserialize to empty strings so
    /// validation can answer with the API's own error shape.
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub character_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoastResponse {
    pub roast: String,
    /// Derived harshness rating in [1, 10], one decimal.
    pub severity: f64,
    pub character_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
