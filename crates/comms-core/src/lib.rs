//! # Comms Core
//!
//! The domain layer of the role-scoped communications board.
//! Pure business logic with zero infrastructure dependencies: the
//! audience resolver, permission matrix, filter pipeline, statistics
//! aggregator, paginator, and the board store with its mutation gateway.

pub mod audience;
pub mod board;
pub mod domain;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod permissions;
pub mod ports;
pub mod stats;

pub use error::BoardError;

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use crate::domain::{
        AudienceSegment, Communication, CommunicationType, Priority, Status,
    };

    /// A published-timestamp-consistent record for read-path tests.
    pub fn sample_at(
        target_audience: AudienceSegment,
        status: Status,
        created_at: DateTime<Utc>,
    ) -> Communication {
        Communication {
            id: Uuid::new_v4(),
            title: "sample title".into(),
            content: "sample content".into(),
            excerpt: "sample content".into(),
            kind: CommunicationType::News,
            priority: Priority::Medium,
            status,
            target_audience,
            author_id: Uuid::new_v4(),
            author_name: "Sam Author".into(),
            created_at,
            published_at: (status == Status::Published).then_some(created_at),
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
    }

    pub fn sample(target_audience: AudienceSegment, status: Status) -> Communication {
        sample_at(target_audience, status, Utc::now())
    }
}
