//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random relative paths and verify
//! that the segment arithmetic used by the compatibility predicate holds.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{drop_trailing_segments, nesting_depth, parent_dir, segment_count};
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn relative_path(max_segments: usize) -> impl Strategy<Value = PathBuf> {
        prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1..=max_segments)
            .prop_map(|segments| segments.iter().collect::<PathBuf>())
    }

    // ============================================================================
    // segment arithmetic
    // ============================================================================

    proptest! {
        /// Property: joining adds segment counts
        #[test]
        fn join_adds_segment_counts(base in relative_path(4), tail in relative_path(4)) {
            prop_assert_eq!(
                segment_count(&base.join(&tail)),
                segment_count(&base) + segment_count(&tail)
            );
        }

        /// Property: nesting depth of a joined path is the tail's length
        #[test]
        fn nesting_depth_of_join_is_tail_length(base in relative_path(4), tail in relative_path(4)) {
            let nested = base.join(&tail);
            prop_assert_eq!(nesting_depth(&base, &nested), Some(segment_count(&tail)));
        }

        /// Property: a path is never strictly nested under itself
        #[test]
        fn nesting_depth_is_strict(path in relative_path(5)) {
            prop_assert_eq!(nesting_depth(&path, &path), None);
        }

        /// Property: dropping the tail of a join recovers the base
        #[test]
        fn drop_trailing_undoes_join(base in relative_path(4), tail in relative_path(4)) {
            let joined = base.join(&tail);
            prop_assert_eq!(drop_trailing_segments(&joined, segment_count(&tail)), Some(base));
        }

        /// Property: dropping zero segments is the identity
        #[test]
        fn drop_zero_is_identity(path in relative_path(5)) {
            prop_assert_eq!(drop_trailing_segments(&path, 0), Some(path));
        }

        /// Property: dropping more segments than exist fails
        #[test]
        fn drop_too_many_fails(path in relative_path(5), extra in 1usize..4) {
            let count = segment_count(&path) + extra;
            prop_assert_eq!(drop_trailing_segments(&path, count), None);
        }
    }

    // ============================================================================
    // parent_dir property tests
    // ============================================================================

    proptest! {
        /// Property: walking parent_dir from a relative path visits every
        /// proper prefix exactly once and terminates
        #[test]
        fn parent_walk_terminates(path in relative_path(6)) {
            let mut steps = 0;
            let mut current = path.as_path();
            while let Some(parent) = parent_dir(current) {
                prop_assert_eq!(nesting_depth(parent, current), Some(1));
                current = parent;
                steps += 1;
            }
            prop_assert_eq!(steps, segment_count(&path) - 1);
        }
    }
}
