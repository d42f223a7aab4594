//! Roster draft state and submit-time validation.
//!
//! A roster is a fixed, ordered set of slots defined by a [`RosterConfig`]
//! (for the marathon game: `M1 M2 M3` men, `W1 W2 W3` women). The draft is
//! pure in-memory data; persistence decisions live in [`crate::autosave`]
//! and the repository layer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Total slot count for a complete roster.
pub const ROSTER_SIZE: usize = 6;

/// Required filled slots per category on submit.
pub const SLOTS_PER_CATEGORY: usize = 3;

/// Athlete category, matching the `athletes.gender` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
        }
    }
}

/// One slot definition in the game configuration.
#[derive(Debug, Clone)]
pub struct SlotDef {
    pub id: String,
    pub category: Gender,
}

/// Fixed roster shape and salary cap for one game instance.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub slots: Vec<SlotDef>,
    pub salary_cap: i64,
}

impl RosterConfig {
    /// The standard marathon configuration: three men, three women.
    pub fn marathon(salary_cap: i64) -> Self {
        let slots = ["M1", "M2", "M3", "W1", "W2", "W3"]
            .into_iter()
            .map(|id| SlotDef {
                id: id.to_string(),
                category: if id.starts_with('M') {
                    Gender::Men
                } else {
                    Gender::Women
                },
            })
            .collect();
        RosterConfig { slots, salary_cap }
    }

    fn slot_def(&self, slot_id: &str) -> Option<&SlotDef> {
        self.slots.iter().find(|s| s.id == slot_id)
    }
}

/// One slot's current contents. Both fields are set together or empty together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSlot {
    pub slot_id: String,
    pub athlete_id: Option<DbId>,
    pub salary: Option<i64>,
}

impl DraftSlot {
    fn empty(slot_id: &str) -> Self {
        DraftSlot {
            slot_id: slot_id.to_string(),
            athlete_id: None,
            salary: None,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.athlete_id.is_some()
    }
}

/// Totals returned from a successful submission validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionSummary {
    pub athlete_count: usize,
    pub total_spent: i64,
}

/// In-memory draft state for one participant's roster.
///
/// Slot order follows the config. Every mutation goes through
/// [`set_slot`](Self::set_slot) / [`clear_slot`](Self::clear_slot) so the
/// slot set can never grow, shrink, or reorder.
#[derive(Debug, Clone)]
pub struct RosterDraft {
    config: RosterConfig,
    slots: Vec<DraftSlot>,
}

impl RosterDraft {
    /// An all-empty draft for the given configuration.
    pub fn new(config: RosterConfig) -> Self {
        let slots = config.slots.iter().map(|d| DraftSlot::empty(&d.id)).collect();
        RosterDraft { config, slots }
    }

    /// Rebuild a draft from externally supplied slots (wire payload or
    /// persisted rows). The supplied set must cover exactly the configured
    /// slot ids, each once; order is normalized to the config.
    pub fn from_slots(config: RosterConfig, supplied: Vec<DraftSlot>) -> Result<Self, CoreError> {
        if supplied.len() != config.slots.len() {
            return Err(CoreError::validation(format!(
                "Expected {} roster slots, got {}",
                config.slots.len(),
                supplied.len()
            )));
        }
        let mut draft = RosterDraft::new(config);
        for slot in supplied {
            let target = draft
                .slots
                .iter_mut()
                .find(|s| s.slot_id == slot.slot_id)
                .ok_or_else(|| {
                    CoreError::validation(format!("Unknown roster slot '{}'", slot.slot_id))
                })?;
            if target.is_filled() {
                return Err(CoreError::validation(format!(
                    "Duplicate roster slot '{}'",
                    slot.slot_id
                )));
            }
            // Reject a salary without an athlete (or vice versa).
            if slot.athlete_id.is_some() != slot.salary.is_some() {
                return Err(CoreError::validation(format!(
                    "Slot '{}' must carry both athlete and salary, or neither",
                    slot.slot_id
                )));
            }
            *target = slot;
        }
        Ok(draft)
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn slots(&self) -> &[DraftSlot] {
        &self.slots
    }

    /// Place an athlete in a slot, replacing any previous occupant.
    pub fn set_slot(&mut self, slot_id: &str, athlete_id: DbId, salary: i64) -> Result<(), CoreError> {
        let slot = self.slot_mut(slot_id)?;
        slot.athlete_id = Some(athlete_id);
        slot.salary = Some(salary);
        Ok(())
    }

    /// Empty a slot.
    pub fn clear_slot(&mut self, slot_id: &str) -> Result<(), CoreError> {
        let slot = self.slot_mut(slot_id)?;
        slot.athlete_id = None;
        slot.salary = None;
        Ok(())
    }

    fn slot_mut(&mut self, slot_id: &str) -> Result<&mut DraftSlot, CoreError> {
        self.slots
            .iter_mut()
            .find(|s| s.slot_id == slot_id)
            .ok_or_else(|| CoreError::validation(format!("Unknown roster slot '{slot_id}'")))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.is_filled())
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filled()).count()
    }

    /// True iff every configured slot holds an athlete.
    pub fn is_full(&self) -> bool {
        self.filled_count() == self.config.slots.len()
    }

    pub fn total_spent(&self) -> i64 {
        self.slots.iter().filter_map(|s| s.salary).sum()
    }

    /// Full submit-time validation, independent of any client claims:
    /// every slot filled, exactly [`SLOTS_PER_CATEGORY`] per category, no
    /// athlete picked twice, total salary within the cap.
    pub fn validate_for_submit(&self) -> Result<SubmissionSummary, CoreError> {
        if !self.is_full() {
            return Err(CoreError::validation(format!(
                "Roster incomplete: {} of {} slots filled",
                self.filled_count(),
                self.config.slots.len()
            )));
        }

        for category in [Gender::Men, Gender::Women] {
            let filled = self
                .slots
                .iter()
                .filter(|s| {
                    s.is_filled()
                        && self
                            .config
                            .slot_def(&s.slot_id)
                            .is_some_and(|d| d.category == category)
                })
                .count();
            if filled != SLOTS_PER_CATEGORY {
                return Err(CoreError::validation(format!(
                    "Roster must hold exactly {SLOTS_PER_CATEGORY} {} athletes, got {filled}",
                    category.as_str()
                )));
            }
        }

        let mut seen: Vec<DbId> = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            if let Some(athlete_id) = slot.athlete_id {
                if seen.contains(&athlete_id) {
                    return Err(CoreError::validation(format!(
                        "Athlete {athlete_id} appears in more than one slot"
                    )));
                }
                seen.push(athlete_id);
            }
        }

        let total_spent = self.total_spent();
        if total_spent > self.config.salary_cap {
            return Err(CoreError::validation(format!(
                "Roster costs {total_spent}, exceeding the salary cap of {}",
                self.config.salary_cap
            )));
        }

        Ok(SubmissionSummary {
            athlete_count: self.filled_count(),
            total_spent,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    fn config() -> RosterConfig {
        RosterConfig::marathon(600)
    }

    /// Fill all six slots with distinct athletes at `salary` each.
    fn full_draft(salary: i64) -> RosterDraft {
        let mut draft = RosterDraft::new(config());
        for (i, id) in ["M1", "M2", "M3", "W1", "W2", "W3"].iter().enumerate() {
            draft.set_slot(id, (i + 1) as i64, salary).unwrap();
        }
        draft
    }

    #[test]
    fn new_draft_is_empty() {
        let draft = RosterDraft::new(config());
        assert!(draft.is_empty());
        assert_eq!(draft.filled_count(), 0);
        assert!(!draft.is_full());
        assert_eq!(draft.total_spent(), 0);
    }

    #[test]
    fn set_and_clear_slot() {
        let mut draft = RosterDraft::new(config());
        draft.set_slot("M1", 42, 100).unwrap();
        assert_eq!(draft.filled_count(), 1);
        assert_eq!(draft.total_spent(), 100);

        draft.clear_slot("M1").unwrap();
        assert!(draft.is_empty());
    }

    #[test]
    fn set_slot_replaces_previous_occupant() {
        let mut draft = RosterDraft::new(config());
        draft.set_slot("W2", 1, 100).unwrap();
        draft.set_slot("W2", 2, 150).unwrap();
        assert_eq!(draft.filled_count(), 1);
        assert_eq!(draft.total_spent(), 150);
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let mut draft = RosterDraft::new(config());
        assert_matches!(draft.set_slot("X9", 1, 100), Err(CoreError::Validation(_)));
        assert_matches!(draft.clear_slot("X9"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn full_draft_is_full() {
        let draft = full_draft(100);
        assert!(draft.is_full());
        assert_eq!(draft.filled_count(), ROSTER_SIZE);
    }

    // -----------------------------------------------------------------------
    // from_slots
    // -----------------------------------------------------------------------

    #[test]
    fn from_slots_round_trips() {
        let draft = full_draft(100);
        let rebuilt = RosterDraft::from_slots(config(), draft.slots().to_vec()).unwrap();
        assert_eq!(rebuilt.slots(), draft.slots());
    }

    #[test]
    fn from_slots_rejects_wrong_count() {
        let draft = full_draft(100);
        let five = draft.slots()[..5].to_vec();
        assert_matches!(
            RosterDraft::from_slots(config(), five),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn from_slots_rejects_duplicate_slot_id() {
        let mut slots = full_draft(100).slots().to_vec();
        slots[1].slot_id = "M1".to_string();
        assert_matches!(
            RosterDraft::from_slots(config(), slots),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn from_slots_rejects_athlete_without_salary() {
        let mut slots = full_draft(100).slots().to_vec();
        slots[0].salary = None;
        assert_matches!(
            RosterDraft::from_slots(config(), slots),
            Err(CoreError::Validation(_))
        );
    }

    // -----------------------------------------------------------------------
    // Submission validation
    // -----------------------------------------------------------------------

    #[test]
    fn submit_validation_accepts_full_roster() {
        let summary = full_draft(100).validate_for_submit().unwrap();
        assert_eq!(summary.athlete_count, 6);
        assert_eq!(summary.total_spent, 600);
    }

    #[test]
    fn submit_validation_rejects_five_filled_slots() {
        let mut draft = full_draft(100);
        draft.clear_slot("W3").unwrap();
        assert_matches!(draft.validate_for_submit(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn submit_validation_rejects_duplicate_athlete() {
        let mut draft = full_draft(100);
        // Same athlete in two slots.
        draft.set_slot("M2", 1, 100).unwrap();
        assert_matches!(draft.validate_for_submit(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn submit_validation_rejects_over_cap() {
        let draft = full_draft(101); // 606 > 600
        assert_matches!(draft.validate_for_submit(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn submit_validation_allows_exactly_at_cap() {
        let summary = full_draft(100).validate_for_submit().unwrap();
        assert_eq!(summary.total_spent, 600);
    }
}
