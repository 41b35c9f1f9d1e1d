//! Terminal output formatting

pub mod breakdown;
pub mod distribution;

pub use breakdown::render_breakdown;
pub use distribution::render_distribution;
