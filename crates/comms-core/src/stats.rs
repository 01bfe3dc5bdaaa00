//! Statistics aggregator - role-level counters over the visible pool.
//!
//! Computed over the *visible* pool (post audience resolution, pre user
//! criteria), so the summary card stays stable while a user types into the
//! search box.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::domain::{Communication, Status};

/// Role-scoped summary counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total: usize,
    pub published: usize,
    pub total_reads: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub featured_count: usize,
    pub this_month_count: usize,
}

/// Fold the visible pool into its summary. Pure; `now` anchors the
/// calendar-month counter.
pub fn aggregate(visible: &[&Communication], now: DateTime<Utc>) -> BoardStats {
    visible.iter().fold(BoardStats::default(), |mut acc, c| {
        acc.total += 1;
        if c.status == Status::Published {
            acc.published += 1;
        }
        acc.total_reads += c.read_count;
        acc.total_likes += c.likes_count;
        acc.total_comments += c.comments_count;
        if c.featured {
            acc.featured_count += 1;
        }
        if c.created_at.year() == now.year() && c.created_at.month() == now.month() {
            acc.this_month_count += 1;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AudienceSegment, Role};
    use crate::filter::{self, FilterCriteria};
    use crate::testing::{sample, sample_at};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn counters_sum_over_the_visible_pool() {
        let mut a = sample(AudienceSegment::All, Status::Published);
        a.read_count = 10;
        a.likes_count = 3;
        a.comments_count = 2;
        a.featured = true;
        let mut b = sample_at(
            AudienceSegment::All,
            Status::Draft,
            Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap(),
        );
        b.read_count = 5;

        let pool = [&a, &b];
        let stats = aggregate(&pool, now());

        assert_eq!(stats.total, 2);
        assert_eq!(stats.published, 1);
        assert_eq!(stats.total_reads, 15);
        assert_eq!(stats.total_likes, 3);
        assert_eq!(stats.total_comments, 2);
        assert_eq!(stats.featured_count, 1);
        // Only `a` was created in the current calendar month.
        assert_eq!(stats.this_month_count, 1);
    }

    #[test]
    fn empty_pool_aggregates_to_zero() {
        assert_eq!(aggregate(&[], now()), BoardStats::default());
    }

    #[test]
    fn stats_are_independent_of_search_criteria() {
        let pool = vec![
            sample(AudienceSegment::All, Status::Published),
            sample(AudienceSegment::Volunteers, Status::Published),
        ];
        let role = Some(Role::Volunteer);

        let baseline = aggregate(&filter::visible(&pool, role), now());

        // Narrow the list view with a search that matches nothing; the
        // role-level summary must not move.
        let criteria = FilterCriteria {
            search: "no such record".into(),
            ..Default::default()
        };
        assert!(filter::filter(&pool, role, &criteria, now()).is_empty());
        assert_eq!(aggregate(&filter::visible(&pool, role), now()), baseline);
    }
}
