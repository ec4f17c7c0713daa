//! Domain types for tickplot

pub mod bar;
pub mod request;

pub use bar::PriceBar;
pub use request::{ChartRequest, ChartType};

/// Symbol type alias
pub type Symbol = String;
