//! Seed-pool loader.
//!
//! The initial communication pool arrives from a persistence collaborator;
//! in this deployment that collaborator is a JSON file named by the
//! `BOARD_SEED` environment variable. When the file is missing or invalid
//! the server falls back to a small built-in demo pool so it can still run.

use std::fs;
use std::path::Path;

use chrono::{Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use comms_core::domain::{
    AudienceSegment, Communication, CommunicationType, Priority, Status, derive_excerpt,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of communications, preserving its order.
pub fn parse_pool(json: &str) -> Result<Vec<Communication>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a seed pool from disk.
pub fn read_pool(path: impl AsRef<Path>) -> Result<Vec<Communication>, SeedError> {
    parse_pool(&fs::read_to_string(path)?)
}

/// Load the startup pool: the configured seed file when readable,
/// otherwise the built-in demo pool.
pub fn load_pool(path: Option<&str>) -> Vec<Communication> {
    match path {
        Some(path) => match read_pool(path) {
            Ok(pool) => {
                tracing::info!(path, count = pool.len(), "Loaded seed pool");
                pool
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "Seed file unusable. Using built-in demo pool.");
                demo_pool()
            }
        },
        None => {
            tracing::warn!("BOARD_SEED not set. Using built-in demo pool.");
            demo_pool()
        }
    }
}

/// A handful of records spanning segments, types and statuses, newest first.
pub fn demo_pool() -> Vec<Communication> {
    let now = Utc::now();
    let author_id = Uuid::new_v4();

    let base = |title: &str, content: &str, days_ago: i64| {
        let created_at = now - Duration::days(days_ago);
        Communication {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            excerpt: derive_excerpt(content),
            kind: CommunicationType::News,
            priority: Priority::Medium,
            status: Status::Published,
            target_audience: AudienceSegment::All,
            author_id,
            author_name: "Communications Team".to_string(),
            created_at,
            published_at: Some(created_at),
            updated_at: created_at,
            tags: vec![],
            featured: false,
            read_count: 0,
            likes_count: 0,
            comments_count: 0,
            event_date: None,
            location: None,
            registration_required: None,
            deadline: None,
        }
    };

    let mut picnic = base(
        "Summer picnic sign-up open",
        "The annual summer picnic is back. Sign up by the end of the month so we can plan catering.",
        1,
    );
    picnic.kind = CommunicationType::Event;
    picnic.event_date = Some(now + Duration::days(20));
    picnic.location = Some("Riverside Park".to_string());
    picnic.registration_required = Some(true);
    picnic.featured = true;
    picnic.tags = vec!["social".to_string(), "event".to_string()];

    let mut timesheets = base(
        "Timesheets due Friday",
        "A reminder that monthly timesheets are due this Friday at noon.",
        2,
    );
    timesheets.kind = CommunicationType::Reminder;
    timesheets.priority = Priority::High;
    timesheets.deadline = Some(now + Duration::days(3));
    timesheets.target_audience = AudienceSegment::Volunteers;

    let mut onboarding = base(
        "New onboarding checklist",
        "HR has published a revised onboarding checklist for team leads. Please review it before your next intake.",
        5,
    );
    onboarding.kind = CommunicationType::Update;
    onboarding.target_audience = AudienceSegment::Leads;

    let mut policy_draft = base(
        "Draft: travel reimbursement policy",
        "Working draft of the updated travel reimbursement policy. Not yet announced.",
        7,
    );
    policy_draft.kind = CommunicationType::Announcement;
    policy_draft.status = Status::Draft;
    policy_draft.published_at = None;
    policy_draft.target_audience = AudienceSegment::Hr;

    let welcome = base(
        "Welcome to the communications board",
        "All organization-wide announcements now live here. Check back weekly for updates.",
        10,
    );

    vec![picnic, timesheets, onboarding, policy_draft, welcome]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pool_is_newest_first_and_invariant_clean() {
        let pool = demo_pool();
        assert!(!pool.is_empty());
        for pair in pool.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        for comm in &pool {
            if comm.kind == CommunicationType::Event {
                assert!(comm.event_date.is_some());
            }
            if comm.kind == CommunicationType::Reminder {
                assert!(comm.deadline.is_some());
            }
            assert_eq!(comm.published_at.is_some(), comm.status == Status::Published);
        }
    }

    #[test]
    fn parse_pool_round_trips_the_demo_data() {
        let json = serde_json::to_string(&demo_pool()).unwrap();
        let parsed = parse_pool(&json).unwrap();
        assert_eq!(parsed.len(), demo_pool().len());
    }

    #[test]
    fn parse_pool_rejects_malformed_json() {
        assert!(matches!(parse_pool("not json"), Err(SeedError::Parse(_))));
    }

    #[test]
    fn load_pool_falls_back_on_missing_file() {
        let pool = load_pool(Some("/definitely/not/a/real/seed.json"));
        assert_eq!(pool.len(), demo_pool().len());
    }
}
