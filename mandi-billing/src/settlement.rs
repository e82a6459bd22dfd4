use crate::models::{ActorGroup, ActorRecord};
use crate::{BillingResult, ValidationError};
use indexmap::IndexMap;
use mandi_core::{Money, TerminalStatuses};

/// Groups flat delivery and procurement records into per-actor billing
/// summaries.
#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    terminal: TerminalStatuses,
}

impl GroupingEngine {
    pub fn new(terminal: TerminalStatuses) -> Self {
        Self { terminal }
    }

    /// Group records by actor, in the order each actor first appears.
    ///
    /// Within a group, members keep their input order. `total_charges` sums
    /// the members' charges; `is_complete` is true iff every member carries
    /// a terminal-success status. Negative or non-finite charges fail the
    /// whole call.
    pub fn group_by_actor(&self, records: &[ActorRecord]) -> BillingResult<Vec<ActorGroup>> {
        let mut groups: IndexMap<String, ActorGroup> = IndexMap::new();

        for (index, record) in records.iter().enumerate() {
            if !record.charges.is_finite() {
                return Err(ValidationError::NonFiniteCharges {
                    index,
                    actor_id: record.actor_id.clone(),
                });
            }
            if record.charges < 0.0 {
                return Err(ValidationError::NegativeCharges {
                    index,
                    actor_id: record.actor_id.clone(),
                    value: record.charges,
                });
            }

            let group = groups
                .entry(record.actor_id.clone())
                .or_insert_with(|| ActorGroup {
                    key: record.actor_id.clone(),
                    members: Vec::new(),
                    total_charges: Money::ZERO,
                    is_complete: true,
                });
            group.total_charges += Money::from_rupees(record.charges);
            group.is_complete = group.is_complete && self.terminal.contains(&record.status);
            group.members.push(record.clone());
        }

        Ok(groups.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(actor_id: &str, charges: f64, status: &str) -> ActorRecord {
        ActorRecord {
            actor_id: actor_id.to_string(),
            charges,
            status: status.to_string(),
            actor_type: "driver".to_string(),
        }
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let engine = GroupingEngine::default();
        assert!(engine.group_by_actor(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let engine = GroupingEngine::default();
        let records = [
            record("drv-2", 100.0, "Delivered"),
            record("drv-1", 50.0, "Active"),
            record("drv-2", 75.0, "Delivered"),
        ];
        let groups = engine.group_by_actor(&records).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "drv-2");
        assert_eq!(groups[1].key, "drv-1");
        assert_eq!(groups[0].members.len(), 2);
        assert_eq!(groups[0].total_charges, Money::from_rupees(175.0));
    }

    #[test]
    fn test_completion_requires_every_member_terminal() {
        let engine = GroupingEngine::default();

        let mixed = [
            record("v-1", 10.0, "Completed"),
            record("v-1", 10.0, "Active"),
        ];
        assert!(!engine.group_by_actor(&mixed).unwrap()[0].is_complete);

        let done = [
            record("v-1", 10.0, "Completed"),
            record("v-1", 10.0, "Delivered"),
        ];
        assert!(engine.group_by_actor(&done).unwrap()[0].is_complete);
    }

    #[test]
    fn test_custom_terminal_vocabulary() {
        let engine = GroupingEngine::new(TerminalStatuses::new(["Settled"]));
        let records = [record("v-9", 10.0, "Settled")];
        assert!(engine.group_by_actor(&records).unwrap()[0].is_complete);

        let records = [record("v-9", 10.0, "Delivered")];
        assert!(!engine.group_by_actor(&records).unwrap()[0].is_complete);
    }

    #[test]
    fn test_negative_charges_are_rejected() {
        let engine = GroupingEngine::default();
        let records = [
            record("drv-1", 20.0, "Delivered"),
            record("drv-1", -5.0, "Delivered"),
        ];
        assert_eq!(
            engine.group_by_actor(&records).unwrap_err(),
            ValidationError::NegativeCharges {
                index: 1,
                actor_id: "drv-1".to_string(),
                value: -5.0
            }
        );
    }

    #[test]
    fn test_non_finite_charges_are_rejected() {
        let engine = GroupingEngine::default();
        let records = [record("drv-1", f64::INFINITY, "Delivered")];
        assert_eq!(
            engine.group_by_actor(&records).unwrap_err(),
            ValidationError::NonFiniteCharges {
                index: 0,
                actor_id: "drv-1".to_string()
            }
        );
    }
}
