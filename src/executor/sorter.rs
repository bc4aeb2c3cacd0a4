//! Result sorting
//!
//! Stable and deterministic. Records the policy does not rank (no date
//! under the date key) stay in their input positions; ranked records are
//! stably ordered across the remaining positions.

use crate::planner::SortPolicy;
use crate::record::SaleRecord;

/// Sorts result records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records in place according to the policy
    pub fn sort(records: &mut [SaleRecord], policy: &SortPolicy) {
        let slots: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| policy.is_ranked(r))
            .map(|(i, _)| i)
            .collect();

        if slots.len() == records.len() {
            records.sort_by(|a, b| policy.compare(a, b));
            return;
        }

        let mut ranked: Vec<SaleRecord> = slots
            .iter()
            .map(|&i| std::mem::take(&mut records[i]))
            .collect();
        ranked.sort_by(|a, b| policy.compare(a, b));

        for (slot, record) in slots.into_iter().zip(ranked) {
            records[slot] = record;
        }
    }
}
