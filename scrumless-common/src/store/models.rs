//! Row and payload types for the Record Store tables
//!
//! `demo_schedule` is written by the intake service. `transcriptions` and
//! `voice_sessions` are written by the external Discord bot and only read
//! here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Table written by the demo intake handler
pub const DEMO_SCHEDULE_TABLE: &str = "demo_schedule";
/// Table written by the external bot, read-only here
pub const TRANSCRIPTIONS_TABLE: &str = "transcriptions";
/// Table written by the external bot, read-only here
pub const VOICE_SESSIONS_TABLE: &str = "voice_sessions";

/// Column every listing is ordered by (descending)
pub const CREATED_AT_COLUMN: &str = "created_at";

/// Team size buckets accepted by the demo form (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSize {
    #[serde(rename = "1-5")]
    OneToFive,
    #[serde(rename = "6-10")]
    SixToTen,
    #[serde(rename = "11-20")]
    ElevenToTwenty,
    #[serde(rename = "21-50")]
    TwentyOneToFifty,
    #[serde(rename = "50+")]
    FiftyPlus,
}

impl TeamSize {
    /// Parse a form bucket label. Returns `None` for anything outside
    /// the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "1-5" => Some(Self::OneToFive),
            "6-10" => Some(Self::SixToTen),
            "11-20" => Some(Self::ElevenToTwenty),
            "21-50" => Some(Self::TwentyOneToFifty),
            "50+" => Some(Self::FiftyPlus),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::OneToFive => "1-5",
            Self::SixToTen => "6-10",
            Self::ElevenToTwenty => "11-20",
            Self::TwentyOneToFifty => "21-50",
            Self::FiftyPlus => "50+",
        }
    }
}

/// Lifecycle state of a demo request.
///
/// The intake service only ever creates rows in `Pending`; transitions
/// after that belong to the external sales workflow, not this backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoStatus {
    Pending,
}

/// Insert payload for `demo_schedule` (store column names)
#[derive(Debug, Clone, Serialize)]
pub struct NewDemoRow {
    pub name: String,
    pub email: String,
    pub company: String,
    pub team_size: TeamSize,
    pub preferred_date: NaiveDate,
    pub message: Option<String>,
    pub status: DemoStatus,
}

/// A persisted `demo_schedule` row, as returned by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoScheduleRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub team_size: TeamSize,
    pub preferred_date: NaiveDate,
    pub message: Option<String>,
    pub status: DemoStatus,
    pub created_at: DateTime<Utc>,
}

/// A voice transcription recorded by the external bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionRow {
    pub id: i64,
    pub guild_name: String,
    pub channel_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub transcription: String,
    pub created_at: DateTime<Utc>,
}

/// A summarized voice session recorded by the external bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSessionRow {
    pub id: i64,
    pub guild_id: String,
    pub channel_id: String,
    pub transcript: String,
    pub tasks: Vec<String>,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}
