//! Sequencing of allocation requests against one partition list
//!
//! The driver owns no state of its own: it walks the request list in
//! order, applies the selected policy to the same partition list each
//! time, and records what happened. The capacity reduction made by
//! request *i* is visible to request *i + 1*'s selection.

use super::policy::FitPolicy;

/// Where a satisfied request landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Zero-based index of the partition that served the request.
    pub index: usize,
    /// That partition's free capacity after the allocation.
    pub remaining: u32,
}

/// Outcome of one request, with the partition state it left behind.
///
/// `partitions` is a snapshot of every capacity as of the end of this
/// request; the results table renders one such row per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationStep {
    pub request: u32,
    /// `None` means no partition could hold the request. The run
    /// continues with the next request regardless.
    pub placement: Option<Placement>,
    pub partitions: Vec<u32>,
}

/// Run every request, in order, against `partitions`, carrying each
/// allocation forward into the next. On return the caller's list holds
/// the final remaining capacities.
pub fn run_allocations(
    policy: FitPolicy,
    partitions: &mut [u32],
    requests: &[u32],
) -> Vec<AllocationStep> {
    requests
        .iter()
        .map(|&request| {
            let placement = policy.apply(request, partitions).map(|index| Placement {
                index,
                remaining: partitions[index],
            });
            AllocationStep {
                request,
                placement,
                partitions: partitions.to_vec(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fit_run_carries_mutations_forward() {
        let mut partitions = vec![300, 600, 350, 200, 750, 125];
        let steps = run_allocations(
            FitPolicy::FirstFit,
            &mut partitions,
            &[115, 500, 358, 200, 375],
        );

        let placements: Vec<Option<Placement>> = steps.iter().map(|s| s.placement).collect();
        assert_eq!(
            placements,
            vec![
                Some(Placement { index: 0, remaining: 185 }),
                Some(Placement { index: 1, remaining: 100 }),
                Some(Placement { index: 4, remaining: 392 }),
                Some(Placement { index: 4, remaining: 192 }),
                None,
            ]
        );
        assert_eq!(partitions, vec![185, 100, 350, 200, 192, 125]);
    }

    #[test]
    fn test_each_step_snapshots_the_list_as_of_that_request() {
        let mut partitions = vec![300, 600, 350, 200, 750, 125];
        let steps = run_allocations(FitPolicy::FirstFit, &mut partitions, &[115, 500, 358]);

        assert_eq!(steps[0].partitions, vec![185, 600, 350, 200, 750, 125]);
        assert_eq!(steps[1].partitions, vec![185, 100, 350, 200, 750, 125]);
        assert_eq!(steps[2].partitions, vec![185, 100, 350, 200, 392, 125]);
    }

    #[test]
    fn test_unsatisfiable_request_does_not_stop_the_run() {
        let mut partitions = vec![100];
        let steps = run_allocations(FitPolicy::FirstFit, &mut partitions, &[80, 50, 10]);

        assert_eq!(steps[0].placement, Some(Placement { index: 0, remaining: 20 }));
        assert_eq!(steps[1].placement, None);
        assert_eq!(steps[2].placement, Some(Placement { index: 0, remaining: 10 }));
        assert_eq!(partitions, vec![10]);
    }

    #[test]
    fn test_two_requests_equal_one_then_the_other() {
        let mut all_at_once = vec![300, 600, 350];
        let combined = run_allocations(FitPolicy::BestFit, &mut all_at_once, &[250, 250]);

        let mut one_by_one = vec![300, 600, 350];
        let first = run_allocations(FitPolicy::BestFit, &mut one_by_one, &[250]);
        let second = run_allocations(FitPolicy::BestFit, &mut one_by_one, &[250]);

        assert_eq!(combined[0], first[0]);
        assert_eq!(combined[1], second[0]);
        assert_eq!(all_at_once, one_by_one);
    }

    #[test]
    fn test_empty_request_list_leaves_partitions_unchanged() {
        let mut partitions = vec![300, 600, 350];
        let steps = run_allocations(FitPolicy::WorstFit, &mut partitions, &[]);
        assert!(steps.is_empty());
        assert_eq!(partitions, vec![300, 600, 350]);
    }

    #[test]
    fn test_partition_count_is_invariant_across_a_run() {
        let mut partitions = vec![300, 600, 350, 200, 750, 125];
        let steps = run_allocations(
            FitPolicy::WorstFit,
            &mut partitions,
            &[115, 500, 358, 200, 375],
        );
        assert_eq!(partitions.len(), 6);
        assert!(steps.iter().all(|s| s.partitions.len() == 6));
    }
}
