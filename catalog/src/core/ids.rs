//! Menu item identifier generation
//!
//! Ids are millisecond wall-clock timestamps, bumped past the last issued id
//! whenever two creations land in the same millisecond or the clock steps
//! backwards. The sequence is strictly increasing for the generator's lifetime.

use chrono::{DateTime, Utc};
use shared::MenuItemId;

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Start above the largest id already in use
    pub fn seeded(highest: Option<MenuItemId>) -> Self {
        Self {
            last: highest.map(|id| id.as_u64()).unwrap_or(0),
        }
    }

    /// Record an id seen in storage so it is never issued again
    pub fn observe(&mut self, id: MenuItemId) {
        self.last = self.last.max(id.as_u64());
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> MenuItemId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let next = millis.max(self.last.saturating_add(1));
        self.last = next;
        MenuItemId::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_uses_wall_clock_millis() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id(at_millis(1_700_000_000_000)).as_u64(), 1_700_000_000_000);
    }

    #[test]
    fn test_same_millisecond_is_still_unique() {
        let mut ids = IdGenerator::default();
        let now = at_millis(1_700_000_000_000);

        let first = ids.next_id(now);
        let second = ids.next_id(now);
        let third = ids.next_id(now);

        assert!(first < second && second < third);
    }

    #[test]
    fn test_clock_going_backwards_never_reuses() {
        let mut ids = IdGenerator::default();
        let first = ids.next_id(at_millis(2_000));
        let second = ids.next_id(at_millis(1_000));

        assert_eq!(second.as_u64(), first.as_u64() + 1);
    }

    #[test]
    fn test_seeded_and_observed_ids_are_skipped() {
        let mut ids = IdGenerator::seeded(Some(MenuItemId::new(5_000)));
        assert_eq!(ids.next_id(at_millis(10)).as_u64(), 5_001);

        ids.observe(MenuItemId::new(9_000));
        ids.observe(MenuItemId::new(100));
        assert_eq!(ids.next_id(at_millis(10)).as_u64(), 9_001);
    }
}
