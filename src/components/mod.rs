//! Dashboard widgets. Each one owns its fetch, its load state and its error
//! boundary; the details panel is shared through context.

mod canvas;
mod element_chart;
mod network_graph;
mod region_chart;
mod search;
mod summary;
mod symbol_details;
mod timeline;
mod tooltip;
mod tradition_frequency;
mod tradition_timeline;

pub use element_chart::ElementChart;
pub use network_graph::NetworkGraph;
pub use region_chart::RegionChart;
pub use search::SearchPanel;
pub use summary::SummaryLoader;
pub use symbol_details::{SymbolDetailsPanel, provide_symbol_details};
pub use timeline::SymbolTimeline;
pub use tradition_frequency::TraditionFrequency;
pub use tradition_timeline::TraditionTimeline;
