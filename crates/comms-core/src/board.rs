//! The board: the in-memory communication store plus its mutation gateway.
//!
//! Every write goes through a capability check and the lifecycle state
//! machine; reads are pure functions over `items()`. The board itself is
//! single-threaded - callers embedding it in a concurrent environment must
//! supply the serialization point (the infra crate wraps it in an async
//! `RwLock`).

use chrono::Utc;
use uuid::Uuid;

use crate::audience;
use crate::domain::{
    Communication, CommunicationPatch, CommunicationType, NewCommunication, Role, Status,
    derive_excerpt,
};
use crate::error::BoardError;
use crate::permissions;

/// Communication store + mutation gateway.
#[derive(Debug, Default)]
pub struct Board {
    items: Vec<Communication>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an externally supplied pool, keeping its order (newest first).
    pub fn from_pool(pool: Vec<Communication>) -> Self {
        Self { items: pool }
    }

    /// The full pool in store order. Feed this to the filter pipeline.
    pub fn items(&self) -> &[Communication] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fetch a single record, subject to the role's visibility. An invisible
    /// record is indistinguishable from an absent one.
    pub fn get(&self, role: Option<Role>, id: Uuid) -> Result<&Communication, BoardError> {
        self.items
            .iter()
            .find(|c| c.id == id && audience::can_view(c, role))
            .ok_or(BoardError::NotFound { id })
    }

    /// Create a new communication and prepend it to the store (so default
    /// ordering stays newest-first).
    pub fn create(
        &mut self,
        role: Option<Role>,
        draft: NewCommunication,
    ) -> Result<Communication, BoardError> {
        if !permissions::capabilities(role).can_create {
            return Err(BoardError::PermissionDenied {
                capability: "create",
            });
        }
        if draft.status == Status::Archived {
            return Err(BoardError::InvalidTransition {
                from: Status::Draft,
                to: Some(Status::Archived),
            });
        }
        validate(
            &draft.title,
            &draft.content,
            draft.kind,
            draft.event_date.is_some(),
            draft.deadline.is_some(),
        )?;

        let now = Utc::now();
        let excerpt = draft
            .excerpt
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| derive_excerpt(&draft.content));

        let comm = Communication {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            excerpt,
            kind: draft.kind,
            priority: draft.priority,
            status: draft.status,
            target_audience: draft.target_audience,
            author_id: draft.author_id,
            author_name: draft.author_name,
            created_at: now,
            published_at: (draft.status == Status::Published).then_some(now),
            updated_at: now,
            tags: draft.tags,
            featured: draft.featured,
            read_count: 0,
            likes_count: 0,
            comments_count: 0,
            event_date: draft.event_date,
            location: draft.location,
            registration_required: draft.registration_required,
            deadline: draft.deadline,
        };

        self.items.insert(0, comm.clone());
        Ok(comm)
    }

    /// Apply a partial update, enforcing the lifecycle state machine.
    /// Archived records are terminal and reject every patch.
    pub fn update(
        &mut self,
        role: Option<Role>,
        id: Uuid,
        patch: CommunicationPatch,
    ) -> Result<Communication, BoardError> {
        if !permissions::capabilities(role).can_edit {
            return Err(BoardError::PermissionDenied { capability: "edit" });
        }
        let idx = self
            .items
            .iter()
            .position(|c| c.id == id)
            .ok_or(BoardError::NotFound { id })?;
        let current = &self.items[idx];

        if current.status == Status::Archived {
            return Err(BoardError::InvalidTransition {
                from: Status::Archived,
                to: patch.status,
            });
        }
        if let Some(next) = patch.status {
            if next != current.status && !current.status.can_transition_to(next) {
                return Err(BoardError::InvalidTransition {
                    from: current.status,
                    to: Some(next),
                });
            }
        }

        let now = Utc::now();
        let mut updated = current.clone();
        let content_changed = patch.content.is_some();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(content) = patch.content {
            updated.content = content;
        }
        match patch.excerpt {
            Some(excerpt) if !excerpt.trim().is_empty() => updated.excerpt = excerpt,
            // Content changed without a supplied excerpt: re-derive it.
            _ if content_changed => updated.excerpt = derive_excerpt(&updated.content),
            _ => {}
        }
        if let Some(kind) = patch.kind {
            updated.kind = kind;
        }
        if let Some(priority) = patch.priority {
            updated.priority = priority;
        }
        if let Some(target) = patch.target_audience {
            updated.target_audience = target;
        }
        if let Some(tags) = patch.tags {
            updated.tags = tags;
        }
        if let Some(featured) = patch.featured {
            updated.featured = featured;
        }
        if let Some(event_date) = patch.event_date {
            updated.event_date = Some(event_date);
        }
        if let Some(location) = patch.location {
            updated.location = Some(location);
        }
        if let Some(registration) = patch.registration_required {
            updated.registration_required = Some(registration);
        }
        if let Some(deadline) = patch.deadline {
            updated.deadline = Some(deadline);
        }
        if let Some(next) = patch.status {
            if next == Status::Published && updated.status != Status::Published {
                updated.published_at = Some(now);
            }
            updated.status = next;
        }

        validate(
            &updated.title,
            &updated.content,
            updated.kind,
            updated.event_date.is_some(),
            updated.deadline.is_some(),
        )?;

        updated.updated_at = now;
        self.items[idx] = updated.clone();
        Ok(updated)
    }

    /// Remove a record. Published records must be archived first; drafts and
    /// archived records delete directly.
    pub fn delete(&mut self, role: Option<Role>, id: Uuid) -> Result<(), BoardError> {
        if !permissions::capabilities(role).can_delete {
            return Err(BoardError::PermissionDenied {
                capability: "delete",
            });
        }
        let idx = self
            .items
            .iter()
            .position(|c| c.id == id)
            .ok_or(BoardError::NotFound { id })?;
        if self.items[idx].status == Status::Published {
            return Err(BoardError::InvalidTransition {
                from: Status::Published,
                to: None,
            });
        }
        self.items.remove(idx);
        Ok(())
    }

    /// Bump the read counter. Engagement requires visibility, not a
    /// capability, and never touches `updated_at`.
    pub fn record_read(
        &mut self,
        role: Option<Role>,
        id: Uuid,
    ) -> Result<Communication, BoardError> {
        self.engage(role, id, |c| c.read_count += 1)
    }

    pub fn record_like(
        &mut self,
        role: Option<Role>,
        id: Uuid,
    ) -> Result<Communication, BoardError> {
        self.engage(role, id, |c| c.likes_count += 1)
    }

    pub fn record_comment(
        &mut self,
        role: Option<Role>,
        id: Uuid,
    ) -> Result<Communication, BoardError> {
        self.engage(role, id, |c| c.comments_count += 1)
    }

    fn engage(
        &mut self,
        role: Option<Role>,
        id: Uuid,
        bump: impl FnOnce(&mut Communication),
    ) -> Result<Communication, BoardError> {
        let comm = self
            .items
            .iter_mut()
            .find(|c| c.id == id)
            .filter(|c| audience::can_view(c, role))
            .ok_or(BoardError::NotFound { id })?;
        bump(comm);
        Ok(comm.clone())
    }
}

/// Schema/invariant checks shared by create and update. Collects every
/// offending field so the caller can surface them all at once.
fn validate(
    title: &str,
    content: &str,
    kind: CommunicationType,
    has_event_date: bool,
    has_deadline: bool,
) -> Result<(), BoardError> {
    let mut fields = Vec::new();
    if title.trim().is_empty() {
        fields.push("title");
    }
    if content.trim().is_empty() {
        fields.push("content");
    }
    if kind == CommunicationType::Event && !has_event_date {
        fields.push("event_date");
    }
    if kind == CommunicationType::Reminder && !has_deadline {
        fields.push("deadline");
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(BoardError::Validation { fields })
    }
}
