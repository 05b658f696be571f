//! Dashboard data service.
//!
//! Calls the metrics API and, when a call fails, answers with sample data
//! scaled to the requesting creator's profile. Callers always receive a
//! payload; whether it came from the API or the fallback path is only visible
//! in the logs.

pub mod category;
pub mod fallback;
pub mod growth;
pub mod sample;
pub mod scale;
pub mod service;

pub use category::MetricCategory;
pub use growth::{follower_growth, FollowerGrowth, PlatformGrowth};
pub use scale::{scale_count, scale_factor};
pub use service::DataService;
