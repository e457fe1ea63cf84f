use serde::Serialize;

use super::heap_size::{Bounds, HeapSize};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeapReport {
    pub total_ram: u64,
    pub total_ram_detected: bool,
    pub percent: f64,
    pub min_allowed_ram: u64,
    /// `None` when there is no upper bound.
    pub max_allowed_ram: Option<u64>,
    pub heap_size: HeapSize,
    pub heap: String,
}

impl HeapReport {
    pub fn new(
        total_ram: u64,
        total_ram_detected: bool,
        percent: f64,
        bounds: Bounds,
        heap_size: HeapSize,
    ) -> Self {
        Self {
            total_ram,
            total_ram_detected,
            percent,
            min_allowed_ram: bounds.min,
            max_allowed_ram: (!bounds.is_unbounded()).then_some(bounds.max),
            heap_size,
            heap: heap_size.to_string(),
        }
    }
}
