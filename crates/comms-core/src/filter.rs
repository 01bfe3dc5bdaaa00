//! Filter pipeline - narrows the pool by visibility plus user-supplied
//! criteria. A pure AND-conjunction of independent predicates; the pipeline
//! removes records but never reorders them.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::audience;
use crate::domain::{Communication, CommunicationType, Role, Status};

/// Relative creation-time bucket, computed against the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    Today,
    ThisWeek,
    ThisMonth,
    ThisQuarter,
}

/// User-supplied filter criteria. Every field is optional; the empty
/// criteria set matches the whole visible pool.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match over title, content and author name.
    pub search: String,
    /// Exact type match; `None` (the UI's "all") bypasses the predicate.
    pub kind: Option<CommunicationType>,
    /// Exact status match; only meaningful for roles that can view all
    /// statuses - for everyone else visibility already pins `published`.
    pub status: Option<Status>,
    pub created_within: Option<DateRange>,
}

/// The role-visible slice of the pool, order preserved. This is the input
/// to the statistics aggregator: role-level, untouched by user criteria.
pub fn visible<'a>(pool: &'a [Communication], role: Option<Role>) -> Vec<&'a Communication> {
    pool.iter().filter(|c| audience::can_view(c, role)).collect()
}

/// Apply visibility plus all user criteria. `now` is passed explicitly so
/// date bucketing is deterministic under test.
pub fn filter<'a>(
    pool: &'a [Communication],
    role: Option<Role>,
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<&'a Communication> {
    pool.iter()
        .filter(|c| audience::can_view(c, role))
        .filter(|c| matches_search(c, &criteria.search))
        .filter(|c| criteria.kind.is_none_or(|k| c.kind == k))
        .filter(|c| criteria.status.is_none_or(|s| c.status == s))
        .filter(|c| {
            criteria
                .created_within
                .is_none_or(|r| in_range(c.created_at, r, now))
        })
        .collect()
}

fn matches_search(comm: &Communication, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    comm.title.to_lowercase().contains(&needle)
        || comm.content.to_lowercase().contains(&needle)
        || comm.author_name.to_lowercase().contains(&needle)
}

fn in_range(created_at: DateTime<Utc>, range: DateRange, now: DateTime<Utc>) -> bool {
    match range {
        DateRange::Today => created_at.date_naive() == now.date_naive(),
        DateRange::ThisWeek => created_at >= now - Duration::days(7),
        DateRange::ThisMonth => {
            created_at.year() == now.year() && created_at.month() == now.month()
        }
        DateRange::ThisQuarter => {
            created_at.year() == now.year() && quarter(created_at.month()) == quarter(now.month())
        }
    }
}

fn quarter(month: u32) -> u32 {
    (month - 1) / 3
}
