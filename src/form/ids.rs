// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Id allocation for keyed collections.

use crate::models::quiz::ItemId;

/// Hands out keys for one collection.
///
/// Seeded once from the keys already present; afterwards ids only grow, so
/// a deleted id is never handed out again by the same allocator. Once the
/// largest id has been used the allocator is exhausted and hands out nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<ItemId>,
}

impl IdAllocator {
    /// Start one past the largest existing key, or at 1 for an empty collection.
    pub fn seeded<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = ItemId>,
    {
        let max = existing.into_iter().max().unwrap_or(0);
        Self {
            next: max.checked_add(1),
        }
    }

    pub fn next_id(&mut self) -> Option<ItemId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// Make sure `id` is never handed out, e.g. after it arrived from elsewhere.
    pub fn observe(&mut self, id: ItemId) {
        if let Some(next) = self.next {
            if id >= next {
                self.next = id.checked_add(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_starts_at_one() {
        let mut ids = IdAllocator::seeded(std::iter::empty());
        assert_eq!(ids.next_id(), Some(1));
        assert_eq!(ids.next_id(), Some(2));
    }

    #[test]
    fn test_seeded_past_largest_key() {
        let mut ids = IdAllocator::seeded([4, 9, 2]);
        assert_eq!(ids.next_id(), Some(10));
        assert_eq!(ids.next_id(), Some(11));
    }

    #[test]
    fn test_largest_key_exhausts_allocator() {
        let mut ids = IdAllocator::seeded([ItemId::MAX]);
        assert_eq!(ids.next_id(), None);

        let mut ids = IdAllocator::seeded([ItemId::MAX - 1]);
        assert_eq!(ids.next_id(), Some(ItemId::MAX));
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn test_observe_only_moves_forward() {
        let mut ids = IdAllocator::seeded([5]);
        ids.observe(2);
        assert_eq!(ids.next_id(), Some(6));
        ids.observe(20);
        assert_eq!(ids.next_id(), Some(21));
    }
}
