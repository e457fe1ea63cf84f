use tracing::debug;

use crate::error::AppError;
use crate::models::{Bounds, HeapSize, Unit};

pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 1.0;
    }
    percent.clamp(1.0, 100.0)
}

/// Fails with [`AppError::InsufficientRam`] whenever the minimum bound is not
/// strictly below the total memory, whatever the percentage would give.
pub fn best_heap_size(total_ram: u64, percent: f64, bounds: Bounds) -> Result<HeapSize, AppError> {
    let percent = clamp_percent(percent);
    let ideal = (total_ram as f64 * (percent / 100.0)) as u64;

    if bounds.min >= total_ram {
        return Err(AppError::InsufficientRam(format!(
            "System RAM ({:.2}GiB) is less than minimum allowed RAM ({:.2}GiB)",
            Unit::Gibibyte.from_bytes(total_ram as f64),
            Unit::Gibibyte.from_bytes(bounds.min as f64),
        )));
    }

    let heap = bounds.clamp(ideal);
    debug!(total_ram, percent, ideal, heap, min = bounds.min, max = bounds.max, "heap size chosen");

    Ok(HeapSize::new(heap))
}
