//! FILENAME: app/src/commands.rs
// PURPOSE: The operations the presentation layer calls.
// CONTEXT: One DashboardState per process, holding the data source, the
// cached hierarchy and the config. Errors cross this boundary as strings.

use crate::api_types::{AdminDashboard, FilterOptions, RecordPage, UserDashboard};
use crate::config::DashboardConfig;
use crate::data_source::DataSource;
use crate::export::{export_rows, ExportColumn};
use crate::structure::ZoneSummary;
use hierarchy::{HierarchyStore, Level};
use log::{debug, info};
use query_engine::{
    options_for, paginate, query, query_admins, AdminStats, DashboardStats, FilterSet, UserRecord,
};

/// Everything the command layer needs: config, the data source, and the
/// hierarchy fetched once at startup.
pub struct DashboardState {
    config: DashboardConfig,
    source: Box<dyn DataSource>,
    hierarchy: HierarchyStore,
}

impl DashboardState {
    /// Fetches the hierarchy from the source and caches it for the session.
    pub fn new(config: DashboardConfig, source: Box<dyn DataSource>) -> Result<Self, String> {
        let hierarchy = source.get_hierarchy().map_err(|e| e.to_string())?;
        info!(
            "dashboard ready: {} organization(s), default '{}'",
            hierarchy.organizations().len(),
            config.default_organization
        );
        Ok(DashboardState { config, source, hierarchy })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// A fresh filter selection pinned to the deployment's organization.
    pub fn initial_filters(&self) -> FilterSet {
        FilterSet::reset_all(&self.config.default_organization)
    }
}

// ============================================================================
// QUERY COMMANDS
// ============================================================================

/// One table page of records under the given filters.
pub fn list_records(
    state: &DashboardState,
    filters: &FilterSet,
    page: usize,
) -> Result<RecordPage, String> {
    debug!("list_records page={}", page);
    state
        .source
        .list_records(filters, page, state.config.page_limit)
        .map_err(|e| e.to_string())
}

/// Distinct attribute values for the selector dropdowns.
pub fn filter_options(state: &DashboardState) -> Result<FilterOptions, String> {
    state.source.list_filter_options().map_err(|e| e.to_string())
}

/// Valid choices at one hierarchy level under the current selection. An empty
/// list means the selector should be disabled.
pub fn hierarchy_options(
    state: &DashboardState,
    level: Level,
    filters: &FilterSet,
) -> Vec<String> {
    options_for(level, filters, &state.hierarchy)
}

// ============================================================================
// DASHBOARD COMMANDS
// ============================================================================

/// The user area's dual query: the table page plus chart stats over a capped
/// sample of the same match set. Both run against one snapshot of the
/// records, so the page and the charts can never disagree about the filters.
pub fn user_dashboard(
    state: &DashboardState,
    records: &[UserRecord],
    filters: &FilterSet,
    page: usize,
) -> Result<UserDashboard, String> {
    let matches = query(records, filters);
    let table = paginate(&matches, page, state.config.page_limit);

    let sample = &matches[..matches.len().min(state.config.chart_sample_cap)];
    let stats = DashboardStats::compute(sample);
    debug!(
        "user_dashboard: {} matches, sample {}, page {}/{}",
        table.meta.total,
        sample.len(),
        table.meta.page,
        table.meta.total_pages
    );

    Ok(UserDashboard {
        table: RecordPage {
            data: table.data.into_iter().cloned().collect(),
            meta: table.meta,
        },
        stats,
        chart_sample_size: sample.len(),
    })
}

/// The admin area: same filter set over the admin sub-collection, with the
/// role split and per-zone counts computed over ALL matching admins, not the
/// visible page.
pub fn admin_dashboard(
    state: &DashboardState,
    records: &[UserRecord],
    filters: &FilterSet,
    page: usize,
) -> Result<AdminDashboard, String> {
    let admins = query_admins(records, filters);
    let stats = AdminStats::compute(&admins);
    let table = paginate(&admins, page, state.config.page_limit);
    debug!("admin_dashboard: {} admins, page {}", table.meta.total, table.meta.page);

    Ok(AdminDashboard {
        table: RecordPage {
            data: table.data.into_iter().cloned().collect(),
            meta: table.meta,
        },
        stats,
    })
}

/// Per-zone rollups for the structure view. Ignores filters by design.
pub fn structure_overview(state: &DashboardState, records: &[UserRecord]) -> Vec<ZoneSummary> {
    crate::structure::structure_overview(
        &state.hierarchy,
        records,
        &state.config.default_organization,
    )
}

// ============================================================================
// EXPORT COMMANDS
// ============================================================================

/// Flattens the full filtered match set (never just the visible page) into
/// export rows under the given columns.
pub fn export_filtered(
    records: &[UserRecord],
    filters: &FilterSet,
    columns: &[ExportColumn],
) -> Vec<Vec<String>> {
    let matches = query(records, filters);
    info!("export: {} rows, {} columns", matches.len(), columns.len());
    export_rows(&matches, columns)
}
