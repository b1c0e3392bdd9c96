//! Fit policies for selecting which partition serves a request
//!
//! All three policies share one contract: given a request size and an
//! exclusive borrow of the partition list, return the zero-based index of
//! the selected partition (decrementing its capacity by the request size)
//! or `None` when no partition qualifies. An unsatisfiable request is a
//! normal outcome, not an error.

use std::cmp::Reverse;

/// Which partition-selection strategy drives an allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitPolicy {
    FirstFit,
    WorstFit,
    BestFit,
}

impl FitPolicy {
    /// All policies, in the order the selector widget lists them.
    pub const ALL: [FitPolicy; 3] = [FitPolicy::FirstFit, FitPolicy::WorstFit, FitPolicy::BestFit];

    /// Human-readable name shown in the selector and status bar.
    pub fn label(self) -> &'static str {
        match self {
            FitPolicy::FirstFit => "First fit",
            FitPolicy::WorstFit => "Worst fit",
            FitPolicy::BestFit => "Best fit",
        }
    }

    /// The next policy in selector order (wraps around).
    pub fn next(self) -> Self {
        match self {
            FitPolicy::FirstFit => FitPolicy::WorstFit,
            FitPolicy::WorstFit => FitPolicy::BestFit,
            FitPolicy::BestFit => FitPolicy::FirstFit,
        }
    }

    /// The previous policy in selector order (wraps around).
    pub fn prev(self) -> Self {
        match self {
            FitPolicy::FirstFit => FitPolicy::BestFit,
            FitPolicy::WorstFit => FitPolicy::FirstFit,
            FitPolicy::BestFit => FitPolicy::WorstFit,
        }
    }

    /// Apply this policy to a single request.
    pub fn apply(self, request: u32, partitions: &mut [u32]) -> Option<usize> {
        match self {
            FitPolicy::FirstFit => first_fit(request, partitions),
            FitPolicy::WorstFit => worst_fit(request, partitions),
            FitPolicy::BestFit => best_fit(request, partitions),
        }
    }
}

/// Select the first partition in index order able to hold `request`.
pub fn first_fit(request: u32, partitions: &mut [u32]) -> Option<usize> {
    let index = partitions.iter().position(|&cap| cap >= request)?;
    partitions[index] -= request;
    Some(index)
}

/// Among qualifying partitions, select the one with the most free
/// capacity. Ties go to the lowest index.
pub fn worst_fit(request: u32, partitions: &mut [u32]) -> Option<usize> {
    // max_by_key keeps the last maximum on ties; Reverse(i) pins the first.
    let (index, _) = partitions
        .iter()
        .enumerate()
        .filter(|&(_, &cap)| cap >= request)
        .max_by_key(|&(i, &cap)| (cap, Reverse(i)))?;
    partitions[index] -= request;
    Some(index)
}

/// Among qualifying partitions, select the one with the least free
/// capacity. Ties go to the lowest index.
pub fn best_fit(request: u32, partitions: &mut [u32]) -> Option<usize> {
    // min_by_key already keeps the first minimum on ties.
    let (index, _) = partitions
        .iter()
        .enumerate()
        .filter(|&(_, &cap)| cap >= request)
        .min_by_key(|&(_, &cap)| cap)?;
    partitions[index] -= request;
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fit_picks_lowest_qualifying_index() {
        let mut partitions = vec![300, 600, 350, 200, 750, 125];
        assert_eq!(first_fit(115, &mut partitions), Some(0));
        assert_eq!(partitions, vec![185, 600, 350, 200, 750, 125]);
    }

    #[test]
    fn test_first_fit_skips_partitions_that_are_too_small() {
        let mut partitions = vec![185, 100, 350, 200, 750, 125];
        assert_eq!(first_fit(358, &mut partitions), Some(4));
        assert_eq!(partitions, vec![185, 100, 350, 200, 392, 125]);
        // Everything before the chosen index was strictly smaller.
        assert!([185u32, 100, 350, 200].iter().all(|&cap| cap < 358));
    }

    #[test]
    fn test_worst_fit_picks_largest_qualifying() {
        let mut partitions = vec![300, 600, 350, 200, 750, 125];
        assert_eq!(worst_fit(115, &mut partitions), Some(4));
        assert_eq!(partitions, vec![300, 600, 350, 200, 635, 125]);
    }

    #[test]
    fn test_worst_fit_tie_breaks_to_first_maximum() {
        let mut partitions = vec![500, 300, 500];
        assert_eq!(worst_fit(100, &mut partitions), Some(0));
        assert_eq!(partitions, vec![400, 300, 500]);
    }

    #[test]
    fn test_best_fit_picks_smallest_qualifying() {
        let mut partitions = vec![300, 600, 350, 200, 750, 125];
        assert_eq!(best_fit(115, &mut partitions), Some(5));
        assert_eq!(partitions, vec![300, 600, 350, 200, 750, 10]);
    }

    #[test]
    fn test_best_fit_ignores_partitions_below_request() {
        let mut partitions = vec![300, 600, 350, 200, 750, 125];
        assert_eq!(best_fit(210, &mut partitions), Some(0));
        assert_eq!(partitions, vec![90, 600, 350, 200, 750, 125]);
    }

    #[test]
    fn test_best_fit_tie_breaks_to_first_minimum() {
        let mut partitions = vec![200, 300, 200];
        assert_eq!(best_fit(150, &mut partitions), Some(0));
        assert_eq!(partitions, vec![50, 300, 200]);
    }

    #[test]
    fn test_no_qualifying_partition_leaves_list_untouched() {
        let mut partitions = vec![185, 100, 350, 200, 192, 125];
        assert_eq!(first_fit(375, &mut partitions), None);
        assert_eq!(worst_fit(375, &mut partitions), None);
        assert_eq!(best_fit(375, &mut partitions), None);
        assert_eq!(partitions, vec![185, 100, 350, 200, 192, 125]);
    }

    #[test]
    fn test_empty_partition_list_never_qualifies() {
        let mut partitions: Vec<u32> = vec![];
        assert_eq!(first_fit(1, &mut partitions), None);
        assert_eq!(worst_fit(1, &mut partitions), None);
        assert_eq!(best_fit(1, &mut partitions), None);
    }

    #[test]
    fn test_exact_fit_drains_partition_to_zero() {
        let mut partitions = vec![50, 200];
        assert_eq!(best_fit(200, &mut partitions), Some(1));
        assert_eq!(partitions, vec![50, 0]);
    }

    #[test]
    fn test_apply_dispatches_by_policy() {
        let base = vec![300, 600, 350, 200, 750, 125];

        let mut partitions = base.clone();
        assert_eq!(FitPolicy::FirstFit.apply(115, &mut partitions), Some(0));

        let mut partitions = base.clone();
        assert_eq!(FitPolicy::WorstFit.apply(115, &mut partitions), Some(4));

        let mut partitions = base;
        assert_eq!(FitPolicy::BestFit.apply(115, &mut partitions), Some(5));
    }

    #[test]
    fn test_policy_cycling_wraps_both_ways() {
        assert_eq!(FitPolicy::FirstFit.next(), FitPolicy::WorstFit);
        assert_eq!(FitPolicy::BestFit.next(), FitPolicy::FirstFit);
        assert_eq!(FitPolicy::FirstFit.prev(), FitPolicy::BestFit);
        for policy in FitPolicy::ALL {
            assert_eq!(policy.next().prev(), policy);
        }
    }
}
