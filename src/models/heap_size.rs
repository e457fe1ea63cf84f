use serde::Serialize;

use crate::utils::memory::{format_bytes, ByteFormat};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct HeapSize(u64);

impl HeapSize {
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }
}

impl From<u64> for HeapSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl PartialEq<u64> for HeapSize {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<HeapSize> for u64 {
    fn eq(&self, other: &HeapSize) -> bool {
        *self == other.0
    }
}

impl std::fmt::Display for HeapSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_bytes(self.0, &ByteFormat::HEAP))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u64,
    /// `u64::MAX` means no upper bound.
    pub max: u64,
}

impl Bounds {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: u64) -> Self {
        Self { min, max: u64::MAX }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max == u64::MAX
    }

    /// Clamp `bytes` into `[min, max]`. The upper bound wins when `min > max`.
    pub fn clamp(&self, bytes: u64) -> u64 {
        bytes.max(self.min).min(self.max)
    }
}
