//! tickplot Core — trading-calendar-aware chart descriptions for daily
//! stock data.
//!
//! This crate contains the dashboard's logic:
//! - U.S. trading-holiday rules and their expansion over a date range
//! - The one-shot dataset load (local CSV or a single remote fetch)
//! - The figure model (plotly-compatible traces, axes, layout)
//! - The pure `render` function with the trading-day axis-gap policy
//!
//! Drawing figures belongs to whatever surface embeds the emitted JSON;
//! nothing here touches pixels or serves pages.

pub mod calendar;
pub mod config;
pub mod data;
pub mod domain;
pub mod figure;
pub mod render;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the shared rendering inputs are Send + Sync.
    ///
    /// The context is built once and read by every request; an embedding
    /// surface may serve requests from multiple threads. If any of these
    /// types stops being shareable, the build breaks immediately.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::PriceBar>();
        require_sync::<domain::PriceBar>();
        require_send::<domain::ChartRequest>();
        require_sync::<domain::ChartRequest>();

        // Calendar types
        require_send::<calendar::HolidayRule>();
        require_sync::<calendar::HolidayRule>();
        require_send::<calendar::HolidaySet>();
        require_sync::<calendar::HolidaySet>();

        // Data types
        require_send::<data::PriceTable>();
        require_sync::<data::PriceTable>();
        require_send::<data::SymbolCatalog>();
        require_sync::<data::SymbolCatalog>();

        // Rendering inputs and outputs
        require_send::<render::ChartContext>();
        require_sync::<render::ChartContext>();
        require_send::<figure::Figure>();
        require_sync::<figure::Figure>();
        require_send::<figure::ViewerConfig>();
        require_sync::<figure::ViewerConfig>();
    }
}
