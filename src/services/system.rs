use sysinfo::{MemoryRefreshKind, RefreshKind, System};
use tracing::debug;

pub trait MemoryProbe {
    fn total_memory(&self) -> u64;
}

pub struct SystemMemory;

impl MemoryProbe for SystemMemory {
    fn total_memory(&self) -> u64 {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        );
        let total = sys.total_memory();
        debug!(total, "detected system memory");
        total
    }
}

pub struct FixedMemory(pub u64);

impl MemoryProbe for FixedMemory {
    fn total_memory(&self) -> u64 {
        self.0
    }
}
