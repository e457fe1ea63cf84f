pub mod heap_size;
pub mod report;
pub mod unit;

pub use heap_size::{Bounds, HeapSize};
pub use report::HeapReport;
pub use unit::Unit;
