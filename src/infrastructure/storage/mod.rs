//! Session slot trait and implementations

mod file;
mod memory;
mod traits;

pub use file::FileSessionSlot;
pub use memory::MemorySessionSlot;
pub use traits::SessionSlot;
