//! Request and response types for note generation

use serde::{Deserialize, Serialize};

use crate::NotegenError;

/// Message tone/purpose selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Thanks a customer for a purchase
    ThankYou,
    /// Apologizes for a problem
    Apology,
    /// Welcomes someone to a program or community
    Welcome,
    /// Checks in about something earlier
    FollowUp,
    /// Anything unrecognized; uses the generic prompt
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::ThankYou,
        Self::Apology,
        Self::Welcome,
        Self::FollowUp,
        Self::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThankYou => "thankyou",
            Self::Apology => "apology",
            Self::Welcome => "welcome",
            Self::FollowUp => "followup",
            Self::General => "general",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "thankyou" | "thank-you" | "thank_you" => Some(Self::ThankYou),
            "apology" => Some(Self::Apology),
            "welcome" => Some(Self::Welcome),
            "followup" | "follow-up" | "follow_up" => Some(Self::FollowUp),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    /// Absent or blank means thank-you; anything unrecognized is general.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::ThankYou,
            Some(label) => Self::from_label(label).unwrap_or(Self::General),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming note request, as posted by the form.
///
/// Fields stay optional so that missing values surface as a validation
/// error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteRequest {
    /// Addressee
    #[serde(default)]
    pub name: Option<String>,

    /// What the note is about; the form calls it "product"
    #[serde(default, alias = "product")]
    pub subject: Option<String>,

    /// Raw category label
    #[serde(default, alias = "messageType")]
    pub category: Option<String>,
}

impl NoteRequest {
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            subject: Some(subject.into()),
            category: None,
        }
    }

    /// Parse a raw JSON body. A malformed body, or anything other than a
    /// JSON object, is an internal error.
    pub fn from_json(body: &[u8]) -> crate::Result<Self> {
        let parse_error = |e: serde_json::Error| {
            NotegenError::Internal(format!("Failed to parse request body: {}", e))
        };

        let value: serde_json::Value = serde_json::from_slice(body).map_err(parse_error)?;
        if !value.is_object() {
            return Err(NotegenError::Internal(
                "Failed to parse request body: expected a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(parse_error)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check required fields and normalize the category.
    pub fn validate(&self) -> crate::Result<ValidNote> {
        let name = non_empty(self.name.as_deref());
        let subject = non_empty(self.subject.as_deref());

        match (name, subject) {
            (Some(name), Some(subject)) => Ok(ValidNote {
                category: Category::normalize(self.category.as_deref()),
                name: name.to_string(),
                subject: subject.to_string(),
            }),
            _ => Err(NotegenError::InvalidRequest(
                "Name and product are required".to_string(),
            )),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNote {
    pub category: Category,
    pub name: String,
    pub subject: String,
}

/// Where the returned note text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSource {
    /// Written by the text-generation provider
    Generated,
    /// Canned template from mock mode
    Mock,
    /// Deterministic fallback after an upstream failure
    Fallback,
}

/// Response body for a generated note
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub note: String,

    #[serde(skip)]
    pub source: NoteSource,
}
