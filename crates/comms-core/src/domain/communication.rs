use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length (in chars) of a derived excerpt before truncation.
const EXCERPT_LEN: usize = 120;

/// Kind of communication on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationType {
    News,
    Announcement,
    Update,
    Reminder,
    Event,
}

impl CommunicationType {
    /// Parse the wire form. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "news" => Some(Self::News),
            "announcement" => Some(Self::Announcement),
            "update" => Some(Self::Update),
            "reminder" => Some(Self::Reminder),
            "event" => Some(Self::Event),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Announcement => "announcement",
            Self::Update => "update",
            Self::Reminder => "reminder",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for CommunicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Lifecycle status. Transitions are one-directional:
/// `draft -> published -> archived`, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Published,
    Archived,
}

impl Status {
    /// Whether moving from `self` to `next` is a legal lifecycle transition.
    /// Staying on the same status is a no-op, not a transition.
    pub fn can_transition_to(self, next: Status) -> bool {
        matches!(
            (self, next),
            (Status::Draft, Status::Published) | (Status::Published, Status::Archived)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Published => "published",
            Status::Archived => "archived",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility bucket a communication is tagged with. Each record belongs to
/// exactly one segment; which segments a role may see is decided by the
/// audience resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceSegment {
    All,
    Volunteers,
    Coordinators,
    Leads,
    Donors,
    Hr,
    Admin,
}

/// Communication entity - a single announcement/news item on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Communication {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(rename = "type")]
    pub kind: CommunicationType,
    pub priority: Priority,
    pub status: Status,
    pub target_audience: AudienceSegment,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub read_count: u64,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    // Type-conditioned fields: events carry a date/location, reminders
    // (and optionally announcements) carry a deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

/// Input to `Board::create` - everything the author supplies.
///
/// `status` defaults to `draft`; a caller holding the create capability may
/// request `published` directly. Engagement counters are never accepted from
/// the caller - they start at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCommunication {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub kind: CommunicationType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_status")]
    pub status: Status,
    pub target_audience: AudienceSegment,
    #[serde(default)]
    pub author_id: Uuid,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub registration_required: Option<bool>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

fn default_status() -> Status {
    Status::Draft
}

/// Partial update applied by `Board::update`. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommunicationPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<CommunicationType>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub target_audience: Option<AudienceSegment>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub registration_required: Option<bool>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

/// Derive a display excerpt from the full content: the first
/// `EXCERPT_LEN` chars, char-boundary safe, with a trailing ellipsis
/// when truncated.
pub fn derive_excerpt(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= EXCERPT_LEN {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(EXCERPT_LEN).collect();
    format!("{}...", cut.trim_end())
}
