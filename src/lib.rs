pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::AppError;
pub use models::{Bounds, HeapSize, Unit};
pub use services::best_heap_size;
pub use utils::memory::{format_bytes, parse_memory_to_bytes, ByteFormat};
