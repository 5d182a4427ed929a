pub mod cache;
pub mod limiter;
pub mod utils;
