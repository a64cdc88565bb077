//! Demo scheduling endpoint
//!
//! `POST /api/demo/schedule` validates the submitted form payload and
//! persists exactly one `demo_schedule` row. Stateless per call: no
//! retries, no idempotency key, a duplicate submission creates a
//! duplicate row.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use scrumless_common::store::models::{
    DemoScheduleRow, DemoStatus, NewDemoRow, TeamSize, DEMO_SCHEDULE_TABLE,
};

use crate::AppState;

/// Demo form payload as submitted by the site (camelCase on the wire).
///
/// Fields default to empty so that a missing field reports a structured
/// validation error instead of a bare deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDemoRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub team_size: String,
    #[serde(default)]
    pub preferred_date: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ScheduleDemoRequest {
    /// Check required fields and build the insert payload.
    ///
    /// `status` is always `pending`; the client cannot supply it.
    /// Email syntax is deliberately not checked (the sales workflow
    /// handles unreachable addresses).
    fn validate(self) -> Result<NewDemoRow, IntakeError> {
        if self.name.trim().is_empty() {
            return Err(IntakeError::Invalid("name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(IntakeError::Invalid("email is required".to_string()));
        }
        if self.company.trim().is_empty() {
            return Err(IntakeError::Invalid("company is required".to_string()));
        }

        let team_size = TeamSize::from_label(&self.team_size).ok_or_else(|| {
            IntakeError::Invalid(format!("unknown team size {:?}", self.team_size))
        })?;

        let preferred_date = NaiveDate::parse_from_str(&self.preferred_date, "%Y-%m-%d")
            .map_err(|_| {
                IntakeError::Invalid(format!(
                    "preferred date must be YYYY-MM-DD, got {:?}",
                    self.preferred_date
                ))
            })?;

        Ok(NewDemoRow {
            name: self.name,
            email: self.email,
            company: self.company,
            team_size,
            preferred_date,
            message: self.message,
            status: DemoStatus::Pending,
        })
    }
}

/// Success response for a scheduled demo
#[derive(Debug, Serialize)]
pub struct ScheduleDemoResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<DemoScheduleRow>,
}

/// POST /api/demo/schedule
pub async fn schedule_demo(
    State(state): State<AppState>,
    Json(request): Json<ScheduleDemoRequest>,
) -> Result<Json<ScheduleDemoResponse>, IntakeError> {
    info!(
        name = %request.name,
        email = %request.email,
        company = %request.company,
        team_size = %request.team_size,
        preferred_date = %request.preferred_date,
        "Received demo request"
    );

    let row = request.validate()?;

    let data = state.store.insert_one(DEMO_SCHEDULE_TABLE, &row).await?;

    Ok(Json(ScheduleDemoResponse {
        success: true,
        message: "Demo request scheduled successfully".to_string(),
        data,
    }))
}

/// Demo intake errors
#[derive(Debug)]
pub enum IntakeError {
    /// Request failed validation (400)
    Invalid(String),
    /// The Record Store rejected or never received the insert (500)
    Store(scrumless_common::Error),
}

impl From<scrumless_common::Error> for IntakeError {
    fn from(err: scrumless_common::Error) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            IntakeError::Invalid(detail) => {
                (StatusCode::BAD_REQUEST, "Invalid demo request", detail)
            }
            IntakeError::Store(err) => {
                error!("Error scheduling demo: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error scheduling demo",
                    err.to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
            "error": detail,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ScheduleDemoRequest {
        ScheduleDemoRequest {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            company: "Acme".to_string(),
            team_size: "6-10".to_string(),
            preferred_date: "2025-05-01".to_string(),
            message: Some(String::new()),
        }
    }

    #[test]
    fn test_validate_maps_fields_and_sets_pending() {
        let row = valid_request().validate().unwrap();
        assert_eq!(row.name, "Ana");
        assert_eq!(row.team_size, TeamSize::SixToTen);
        assert_eq!(
            row.preferred_date,
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
        );
        assert_eq!(row.status, DemoStatus::Pending);
        assert_eq!(row.message.as_deref(), Some(""));
    }

    #[test]
    fn test_validate_rejects_blank_required_fields() {
        for field in ["name", "email", "company"] {
            let mut request = valid_request();
            match field {
                "name" => request.name = "  ".to_string(),
                "email" => request.email = String::new(),
                _ => request.company = String::new(),
            }
            match request.validate() {
                Err(IntakeError::Invalid(detail)) => assert!(detail.contains(field)),
                _ => panic!("expected validation error for {}", field),
            }
        }
    }

    #[test]
    fn test_validate_rejects_unknown_team_size() {
        let mut request = valid_request();
        request.team_size = "lots".to_string();
        assert!(matches!(
            request.validate(),
            Err(IntakeError::Invalid(_))
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_date() {
        let mut request = valid_request();
        request.preferred_date = "May 1st".to_string();
        assert!(matches!(
            request.validate(),
            Err(IntakeError::Invalid(_))
        ));
    }

    #[test]
    fn test_request_accepts_camel_case_payload() {
        let request: ScheduleDemoRequest = serde_json::from_value(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "company": "Acme",
            "teamSize": "6-10",
            "preferredDate": "2025-05-01",
            "message": ""
        }))
        .unwrap();
        assert_eq!(request.team_size, "6-10");
        assert_eq!(request.preferred_date, "2025-05-01");
    }
}
