//! Intake dialogue module.
//!
//! - `slot` - The fixed question sequence as a data-driven table
//! - `session` - Per-chat mutable dialogue state
//! - `messages` - User-facing reply texts
//! - `engine` - The dialogue state machine

pub mod engine;
pub mod messages;
pub mod session;
pub mod slot;

pub use engine::{DialogueEngine, DialogueError};
pub use session::{DialogueState, IntakeSession};
pub use slot::{Slot, SlotSequence, SlotSpec};
