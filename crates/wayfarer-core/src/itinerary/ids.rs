//! Activity identifier allocation.

use std::collections::HashSet;

use crate::models::Itinerary;

/// Monotonic id allocator scoped to one itinerary.
///
/// Seeded above the largest numeric id in the loaded document. Ids that are
/// already taken anywhere in the itinerary are skipped, so allocated ids are
/// unique across days and never reused within a session.
///
/// Once the numeric range is used up, ids continue as `<u64::MAX>-<n>`.
#[derive(Debug, Clone, Default)]
pub struct ActivityIdGenerator {
    next: u64,
    exhausted: bool,
    overflow: u64,
}

impl ActivityIdGenerator {
    /// Creates a generator that will not collide with ids in `itinerary`.
    pub fn seeded_from(itinerary: &Itinerary) -> Self {
        let max_numeric = itinerary
            .activities()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            next: max_numeric.saturating_add(1),
            ..Self::default()
        }
    }

    /// Allocates the next free id.
    pub fn allocate(&mut self, itinerary: &Itinerary) -> String {
        let taken: HashSet<&str> = itinerary.activities().map(|a| a.id.as_str()).collect();
        loop {
            let candidate = self.candidate();
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
        }
    }

    fn candidate(&mut self) -> String {
        if self.exhausted {
            let candidate = format!("{}-{}", u64::MAX, self.overflow);
            self.overflow = self.overflow.saturating_add(1);
            return candidate;
        }

        let candidate = self.next.to_string();
        match self.next.checked_add(1) {
            Some(next) => self.next = next,
            None => self.exhausted = true,
        }
        candidate
    }
}
