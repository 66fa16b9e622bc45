//! SlotSequence - the fixed intake question sequence.
//!
//! The intake dialogue walks through 7 slots in a defined order. This module
//! consolidates the ordering, the stored answer keys, and the prompt texts
//! into one table so that adding or removing a slot is a table edit, not a
//! new branch in the state machine.
//!
//! # Slot Order
//!
//! 1. Industry → 2. BusinessObjective → 3. Website → 4. SocialMedia →
//! 5. PpcUsage → 6. Audience → 7. Location

use serde::{Deserialize, Serialize};

/// One named question in the fixed intake sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Industry,
    BusinessObjective,
    Website,
    SocialMedia,
    PpcUsage,
    Audience,
    Location,
}

/// Descriptor for a slot: its answer key and the prompt sent to the user.
#[derive(Debug, Clone, Copy)]
pub struct SlotSpec {
    pub slot: Slot,
    /// Key the verbatim answer is stored under.
    pub key: &'static str,
    /// Question text sent when the slot becomes current.
    pub prompt: &'static str,
}

/// Central location for slot ordering logic.
///
/// All ordering-related queries go through this type; the engine interprets
/// the table generically and carries no per-slot branches.
pub struct SlotSequence;

impl SlotSequence {
    /// The canonical intake sequence, shared read-only across all sessions.
    pub const SPECS: [SlotSpec; 7] = [
        SlotSpec {
            slot: Slot::Industry,
            key: "industry",
            prompt: "What industry is your business in?",
        },
        SlotSpec {
            slot: Slot::BusinessObjective,
            key: "business_objective",
            prompt: "What is your business objective? (e.g., lead generation, sales, etc.)",
        },
        SlotSpec {
            slot: Slot::Website,
            key: "website",
            prompt: "Do you have a website? If yes, please provide the URL.",
        },
        SlotSpec {
            slot: Slot::SocialMedia,
            key: "social_media",
            prompt: "Do you have any social media platforms? If yes, please provide the URL.",
        },
        SlotSpec {
            slot: Slot::PpcUsage,
            key: "ppc",
            prompt: "Do you use PPC campaigns? (Yes/No)",
        },
        SlotSpec {
            slot: Slot::Audience,
            key: "audience",
            prompt: "Who are you trying to reach? (e.g., young adults, professionals)",
        },
        SlotSpec {
            slot: Slot::Location,
            key: "location",
            prompt: "What location would you like to target?",
        },
    ];

    /// Returns all slot descriptors in order.
    pub fn specs() -> &'static [SlotSpec; 7] {
        &Self::SPECS
    }

    /// Returns the 0-based index of a slot in the sequence.
    #[inline]
    pub fn order_index(slot: Slot) -> usize {
        Self::SPECS
            .iter()
            .position(|s| s.slot == slot)
            .expect("All Slot variants must be in SPECS")
    }

    /// Returns the descriptor for a slot.
    pub fn spec(slot: Slot) -> &'static SlotSpec {
        &Self::SPECS[Self::order_index(slot)]
    }

    /// Returns the answer key for a slot.
    pub fn key(slot: Slot) -> &'static str {
        Self::spec(slot).key
    }

    /// Returns the prompt text for a slot.
    pub fn prompt(slot: Slot) -> &'static str {
        Self::spec(slot).prompt
    }

    /// Returns the next slot in the sequence, or None if at the end.
    pub fn next(slot: Slot) -> Option<Slot> {
        let idx = Self::order_index(slot);
        Self::SPECS.get(idx + 1).map(|s| s.slot)
    }

    /// Returns the first slot in the sequence.
    pub fn first() -> Slot {
        Self::SPECS[0].slot
    }

    /// Returns the last slot in the sequence.
    pub fn last() -> Slot {
        Self::SPECS[Self::SPECS.len() - 1].slot
    }

    /// Returns true if this is the last slot in the sequence.
    pub fn is_last(slot: Slot) -> bool {
        slot == Self::last()
    }

    /// Returns the number of slots in the sequence.
    pub fn len() -> usize {
        Self::SPECS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specs_contain_all_seven_slots() {
        assert_eq!(SlotSequence::SPECS.len(), 7);
        assert_eq!(SlotSequence::len(), 7);
    }

    #[test]
    fn order_index_returns_correct_position() {
        assert_eq!(SlotSequence::order_index(Slot::Industry), 0);
        assert_eq!(SlotSequence::order_index(Slot::BusinessObjective), 1);
        assert_eq!(SlotSequence::order_index(Slot::Website), 2);
        assert_eq!(SlotSequence::order_index(Slot::SocialMedia), 3);
        assert_eq!(SlotSequence::order_index(Slot::PpcUsage), 4);
        assert_eq!(SlotSequence::order_index(Slot::Audience), 5);
        assert_eq!(SlotSequence::order_index(Slot::Location), 6);
    }

    #[test]
    fn next_returns_subsequent_slot() {
        assert_eq!(SlotSequence::next(Slot::Industry), Some(Slot::BusinessObjective));
        assert_eq!(SlotSequence::next(Slot::Audience), Some(Slot::Location));
    }

    #[test]
    fn next_returns_none_for_last_slot() {
        assert_eq!(SlotSequence::next(Slot::Location), None);
    }

    #[test]
    fn first_and_last_match_table_bounds() {
        assert_eq!(SlotSequence::first(), Slot::Industry);
        assert_eq!(SlotSequence::last(), Slot::Location);
        assert!(SlotSequence::is_last(Slot::Location));
        assert!(!SlotSequence::is_last(Slot::Industry));
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = SlotSequence::specs().iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn answer_keys_match_dataset_contract() {
        assert_eq!(SlotSequence::key(Slot::Industry), "industry");
        assert_eq!(SlotSequence::key(Slot::PpcUsage), "ppc");
        assert_eq!(SlotSequence::key(Slot::Location), "location");
    }

    #[test]
    fn prompts_are_nonempty() {
        for spec in SlotSequence::specs() {
            assert!(!spec.prompt.is_empty(), "missing prompt for {:?}", spec.slot);
        }
    }
}
