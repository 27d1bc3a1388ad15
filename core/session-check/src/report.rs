//! JSON reports printed by each subcommand.

use chrono::{DateTime, Utc};
use serde::Serialize;
use session_core::{CalibrationStatus, SessionLayout, SessionStatus};

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub session_name: String,
    pub root_path: String,
    pub checked_at: DateTime<Utc>,
    pub status: SessionStatus,
}

impl StatusReport {
    pub fn new(layout: &SessionLayout, status: SessionStatus, checked_at: DateTime<Utc>) -> Self {
        Self {
            session_name: layout.name().to_string(),
            root_path: layout.root().to_string_lossy().into_owned(),
            checked_at,
            status,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CalibrationReport {
    pub found: bool,
    pub discovered: bool,
    pub calibration_file_path: String,
}

impl CalibrationReport {
    /// `layout` must be read after the check so a discovered path is reported.
    pub fn new(layout: &SessionLayout, status: &CalibrationStatus) -> Self {
        Self {
            found: status.is_ok(),
            discovered: matches!(status, CalibrationStatus::Discovered(_)),
            calibration_file_path: layout.calibration_file_path().to_string_lossy().into_owned(),
        }
    }
}
