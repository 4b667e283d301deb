use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub dept: String,
    pub ailments: Vec<String>,
    pub timing: Vec<String>,
    pub picture: String,
    pub created_on: DateTime<Utc>,
}

impl Doctor {
    pub fn from_request(id: String, request: CreateDoctorRequest, created_on: DateTime<Utc>) -> Self {
        Self {
            id,
            name: request.name,
            dept: request.dept,
            ailments: request.ailments,
            timing: request.timing,
            picture: request.picture,
            created_on,
        }
    }

    pub fn summary(&self) -> DoctorSummary {
        DoctorSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// The slice of a doctor joined onto appointment listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Body of `POST /api/doctor/save`. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub dept: String,
    pub ailments: Vec<String>,
    pub timing: Vec<String>,
    #[serde(default)]
    pub picture: String,
}
