//! Data Transfer Objects - request types for the board API.
//!
//! Bodies reuse the core's closed enums directly, so the wire vocabulary and
//! the domain vocabulary cannot drift apart.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use comms_core::domain::{
    AudienceSegment, CommunicationType, NewCommunication, Priority, Status,
};
use comms_core::filter::{DateRange, FilterCriteria};
use comms_core::ports::PageRequest;

/// Query parameters for the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Type filter; `"all"`, empty, or absent bypasses it.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl ListQuery {
    /// Translate the query into filter criteria. An unknown `type` value is
    /// a caller error, not a silent bypass.
    pub fn criteria(&self) -> Result<FilterCriteria, String> {
        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) if s.eq_ignore_ascii_case("all") => None,
            Some(s) => Some(
                CommunicationType::parse(s)
                    .ok_or_else(|| format!("unknown communication type: {s}"))?,
            ),
        };

        Ok(FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            kind,
            status: self.status,
            created_within: self.date_range,
        })
    }

    pub fn page_request(&self, default_page_size: usize) -> PageRequest {
        PageRequest {
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(default_page_size),
        }
    }
}

/// Body of `POST /api/communications`. Attribution comes from the session
/// headers, not the body, so authorship cannot be spoofed per-request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommunicationRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub kind: CommunicationType,
    #[serde(default)]
    pub priority: Priority,
    /// Defaults to `draft`; set to `published` to publish immediately.
    #[serde(default)]
    pub status: Option<Status>,
    pub target_audience: AudienceSegment,
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

impl CreateCommunicationRequest {
    pub fn into_draft(self, author_id: Uuid, author_name: String) -> NewCommunication {
        NewCommunication {
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            kind: self.kind,
            priority: self.priority,
            status: self.status.unwrap_or(Status::Draft),
            target_audience: self.target_audience,
            author_id,
            author_name,
            tags: self.tags,
            featured: self.featured,
            event_date: self.event_date,
            location: self.location,
            registration_required: self.registration_required,
            deadline: self.deadline,
        }
    }
}
