//! FILENAME: app/src/lib.rs
// PURPOSE: Application surface over the core engines.
// CONTEXT: Owns the data source, per-view sessions, export mapping and the
// ambient stack (config, logging). Everything the presentation layer talks to
// goes through `commands`.

pub mod api_types;
pub mod commands;
pub mod config;
pub mod data_source;
pub mod export;
pub mod logging;
pub mod mock_data;
pub mod session;
pub mod structure;

pub use api_types::{AdminDashboard, FilterOptions, RecordPage, UserDashboard};
pub use commands::DashboardState;
pub use config::DashboardConfig;
pub use data_source::{DataSource, SourceError};
pub use export::{document_columns, export_rows, spreadsheet_columns, ExportColumn};
pub use logging::{attach_log_file, init_logging, next_seq};
pub use mock_data::{AdminLogEntry, MockDataSource};
pub use session::{DebounceWindow, QueryPlan, RequestTracker, ViewArea, ViewSession};
pub use structure::{structure_overview, ZoneSummary};
