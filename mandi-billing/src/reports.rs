use crate::models::ActorGroup;
use mandi_core::Money;
use serde::{Deserialize, Serialize};

/// Rollup statistics over settlement groups, for report screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    pub group_count: usize,
    pub record_count: usize,
    pub total_charges: Money,
    pub average_charges: Money,
    pub completed_groups: usize,
    pub percent_complete: f64,
}

/// Derive report statistics from grouped delivery or procurement records.
pub fn settlement_summary(groups: &[ActorGroup]) -> SettlementSummary {
    let total_charges: Money = groups.iter().map(|g| g.total_charges).sum();
    let completed_groups = groups.iter().filter(|g| g.is_complete).count();
    let group_count = groups.len();

    SettlementSummary {
        group_count,
        record_count: groups.iter().map(|g| g.members.len()).sum(),
        total_charges,
        average_charges: total_charges.divided_by(group_count as u32),
        completed_groups,
        percent_complete: if group_count == 0 {
            0.0
        } else {
            completed_groups as f64 * 100.0 / group_count as f64
        },
    }
}
