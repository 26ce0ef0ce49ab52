pub mod health;
pub mod reuse;
pub mod search;

pub use health::run_health_probe;
pub use reuse::{compare_connection_modes, run_reuse_probe, run_reuse_probe_with, ModeComparison};
pub use search::{run_search_probe, run_search_probe_with};
