//! Configuration and path management

pub mod paths;
pub mod reference;
pub mod settings;

pub use paths::CostsplitPaths;
pub use reference::ReferenceData;
pub use settings::{OverheadRates, Settings, TotalColumnRule};
