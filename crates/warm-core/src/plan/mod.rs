use std::ops::Range;

/// Split `total` items into contiguous, in-order index ranges of at most `batch_size`.
///
/// Only the last range may be shorter. Returns no ranges when `total` or
/// `batch_size` is zero.
pub fn plan_batches(total: usize, batch_size: usize) -> Vec<Range<usize>> {
    if batch_size == 0 {
        return Vec::new();
    }
    (0..total)
        .step_by(batch_size)
        .map(|start| start..(start + batch_size).min(total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_by_five() {
        let plan = plan_batches(12, 5);
        assert_eq!(plan, vec![0..5, 5..10, 10..12]);
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let plan = plan_batches(10, 5);
        assert_eq!(plan, vec![0..5, 5..10]);
    }

    #[test]
    fn batch_larger_than_total() {
        assert_eq!(plan_batches(3, 10), vec![0..3]);
    }

    #[test]
    fn empty_inputs() {
        assert!(plan_batches(0, 5).is_empty());
        assert!(plan_batches(5, 0).is_empty());
    }

    #[test]
    fn counts_and_sizes_hold_for_all_small_inputs() {
        for total in 1..=40 {
            for size in 1..=12 {
                let plan = plan_batches(total, size);
                assert_eq!(plan.len(), total.div_ceil(size), "total={total} size={size}");
                assert_eq!(plan.iter().map(|r| r.len()).sum::<usize>(), total);

                let mut next = 0;
                for r in &plan {
                    assert_eq!(r.start, next);
                    assert!(!r.is_empty() && r.len() <= size);
                    next = r.end;
                }
            }
        }
    }
}
