//! Command implementations

pub mod simple;
pub mod simulate;
pub mod themes;

pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
pub use themes::{ThemeOverview, theme_overviews};
