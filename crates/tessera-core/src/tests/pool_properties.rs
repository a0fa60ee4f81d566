//! Property checks for recycle pool occupancy.

use crate::RecyclePool;
use proptest::prelude::*;

proptest! {
    #[test]
    fn size_matches_releases_within_capacity(capacity in 1usize..64, released in 0usize..64) {
        let mut pool = RecyclePool::new("prop", capacity);
        for item in 0..released {
            pool.release(item);
        }
        prop_assert_eq!(pool.current_size(), released.min(capacity));
    }

    #[test]
    fn clear_always_empties(capacity in 0usize..32, released in 0usize..32) {
        let mut pool = RecyclePool::new("prop", capacity);
        for item in 0..released {
            pool.release(item);
        }
        pool.clear();
        prop_assert_eq!(pool.current_size(), 0);
    }
}
