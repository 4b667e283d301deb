use serde::{Deserialize, Serialize};

/// Per-doctor, per-date availability record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(rename = "_id")]
    pub id: String,
    pub doctor: String,
    pub date: String,
    pub slot: Vec<String>,
    #[serde(default)]
    pub booked: i64,
    // No default capacity is applied; absent until a caller sets one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// Body of `POST /api/get/slot/`. `id` is the doctor; `date` narrows the match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotQuery {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Body of `PUT /api/edit/slot`, keyed on `(doctor, date)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotUpsertRequest {
    pub doctor: String,
    pub date: String,
    pub slot: Vec<String>,
    #[serde(default)]
    pub booked: Option<i64>,
    #[serde(default)]
    pub total: Option<i64>,
}
