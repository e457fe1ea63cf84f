pub mod heap_advisor;
pub mod system;

pub use heap_advisor::best_heap_size;
pub use system::{FixedMemory, MemoryProbe, SystemMemory};
