use std::path::PathBuf;

use wj_model::JourneyStats;

/// Everything the summary printer needs after one pipeline run.
#[derive(Debug)]
pub struct ReportResult {
    pub stats: JourneyStats,
    /// Services of the target year labeled "Saturday Worship".
    pub saturday_services: usize,
    /// Services of the target year labeled "Sunday Worship".
    pub sunday_services: usize,
    pub report_path: Option<PathBuf>,
    pub stats_json_path: Option<PathBuf>,
}
