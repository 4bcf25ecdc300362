pub mod duration;
pub mod number;
pub mod style;

pub use duration::format_secs;
pub use number::{format_count, format_percent};
