use super::stats::row_totals;
use crate::gradebook::Gradebook;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedStudent {
    pub rank: usize,
    pub name: String,
    pub total: i128,
}

/// Rank students by total marks, highest first.
///
/// Equal totals share a rank; the next distinct total takes its 1-based
/// position in the sorted order (1, 1, 3, ...). Ties keep roster order.
pub fn rank_students(gradebook: &Gradebook) -> Vec<RankedStudent> {
    let totals = row_totals(gradebook.marks());

    let mut order: Vec<usize> = (0..totals.len()).collect();
    // sort_by is stable, so tied students stay in roster order
    order.sort_by(|&a, &b| totals[b].cmp(&totals[a]));

    let mut ranked: Vec<RankedStudent> = Vec::with_capacity(order.len());
    for (position, &idx) in order.iter().enumerate() {
        let total = totals[idx];
        let rank = match ranked.last() {
            Some(prev) if prev.total == total => prev.rank,
            _ => position + 1,
        };
        ranked.push(RankedStudent {
            rank,
            name: gradebook.students()[idx].clone(),
            total,
        });
    }
    ranked
}
