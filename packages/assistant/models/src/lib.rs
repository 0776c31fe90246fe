#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chat transcript and query intent types for the UrbanPulse assistant.
//!
//! These types are shared between the router, the transcript state, and
//! the CLI front end. They carry no behavior beyond serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human asking questions.
    User,
    /// The assistant's reply.
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEntry {
    /// Who authored this entry.
    pub role: Role,
    /// The message text.
    pub text: String,
    /// When the entry was appended.
    pub timestamp: DateTime<Utc>,
}

/// The coarse category assigned to a user query.
///
/// Derived deterministically from keyword presence in the lower-cased
/// query text; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Questions about AQI, pollution, particulate matter.
    AirQuality,
    /// Questions about congestion, roads, routes.
    Traffic,
    /// Anything the assistant doesn't handle.
    Unknown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AirQuality => write!(f, "air_quality"),
            Self::Traffic => write!(f, "traffic"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
