//! Infrastructure layer - external concerns

pub mod fixtures;
pub mod storage;

pub use fixtures::{clinic_dataset, FixtureDirectory};
pub use storage::{FileSessionSlot, MemorySessionSlot, SessionSlot};
