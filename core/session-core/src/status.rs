//! Pipeline-stage status checks for a session.
//!
//! Each check is a point-in-time probe of the filesystem: nothing is cached
//! and there are no transitions between stages. Delegated checks call a
//! [`SessionValidators`] implementation and map only its assertion failure
//! to [`CheckOutcome::Failed`]; any other error propagates.

use crate::constants::CAMERA_CALIBRATION_SUFFIX;
use crate::error::{Result, SessionError, ValidationError};
use crate::layout::SessionLayout;
use crate::validators::SessionValidators;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Result of a single delegated check that was able to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed { reason: String },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }

    fn from_validation(result: std::result::Result<(), ValidationError>) -> Result<Self> {
        match result {
            Ok(()) => Ok(CheckOutcome::Passed),
            Err(ValidationError::Assertion(reason)) => Ok(CheckOutcome::Failed { reason }),
            Err(ValidationError::Session(err)) => Err(err),
        }
    }
}

/// How the calibration check resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalibrationStatus {
    /// The current calibration path points at a regular file
    Found(PathBuf),
    /// The current path was missing; another `*camera_calibration.toml` in the root was adopted
    Discovered(PathBuf),
    /// No calibration file anywhere in the root
    Missing,
}

impl CalibrationStatus {
    pub fn is_ok(&self) -> bool {
        !matches!(self, CalibrationStatus::Missing)
    }
}

/// Video summary attached to [`SessionStatus`].
///
/// Both counts are placeholders and always zero; they are not computed from
/// the synchronized videos folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VideosInfo {
    pub number_synchronized_videos: u32,
    pub number_frames_in_videos: u32,
}

/// Aggregate status snapshot. Field names match the pipeline's status payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub videos_framerate_status_check: bool,
    pub videos_synchronized_status_check: bool,
    pub data2d_status_check: bool,
    pub data3d_status_check: bool,
    pub com_data_status_check: bool,
    pub videos_info: VideosInfo,
}

/// Answers per-stage status queries for one session.
///
/// Owns its layout: the two are created together and dropped together.
pub struct SessionStatusChecker<V> {
    layout: SessionLayout,
    validators: V,
}

impl<V: SessionValidators> SessionStatusChecker<V> {
    pub fn new(layout: SessionLayout, validators: V) -> Self {
        Self { layout, validators }
    }

    pub fn layout(&self) -> &SessionLayout {
        &self.layout
    }

    pub fn into_layout(self) -> SessionLayout {
        self.layout
    }

    /// Combines the five stage checks into one snapshot.
    ///
    /// The calibration check is not part of the snapshot since it may rebind
    /// the layout; run [`Self::check_calibration_file`] separately.
    pub fn status(&self) -> Result<SessionStatus> {
        Ok(SessionStatus {
            videos_framerate_status_check: self.videos_framerate_ok()?,
            videos_synchronized_status_check: self.videos_synchronized_ok()?,
            data2d_status_check: self.data_2d_ok()?,
            data3d_status_check: self.data_3d_ok(),
            com_data_status_check: self.center_of_mass_data_ok(),
            videos_info: VideosInfo::default(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Delegated Checks
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn check_videos_framerate(&self) -> Result<CheckOutcome> {
        let folder = self.layout.synchronized_videos_folder_path();
        let outcome =
            CheckOutcome::from_validation(self.validators.validate_framerates(&folder))?;
        debug!(folder = %folder.display(), ?outcome, "Videos framerate check");
        Ok(outcome)
    }

    pub fn check_videos_synchronized(&self) -> Result<CheckOutcome> {
        let folder = self.layout.synchronized_videos_folder_path();
        let outcome =
            CheckOutcome::from_validation(self.validators.validate_frame_counts(&folder))?;
        debug!(folder = %folder.display(), ?outcome, "Videos synchronized check");
        Ok(outcome)
    }

    pub fn check_data_2d(&self) -> Result<CheckOutcome> {
        let folder = self.layout.synchronized_videos_folder_path();
        let data_file = self.layout.tracking_2d_points_file_path();
        let outcome = CheckOutcome::from_validation(
            self.validators.validate_tracking_data_shape(&folder, &data_file),
        )?;
        debug!(file = %data_file.display(), ?outcome, "2D data check");
        Ok(outcome)
    }

    pub fn videos_framerate_ok(&self) -> Result<bool> {
        Ok(self.check_videos_framerate()?.passed())
    }

    pub fn videos_synchronized_ok(&self) -> Result<bool> {
        Ok(self.check_videos_synchronized()?.passed())
    }

    pub fn data_2d_ok(&self) -> Result<bool> {
        Ok(self.check_data_2d()?.passed())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Placeholder Checks
    // ─────────────────────────────────────────────────────────────────────────────

    /// Not yet implemented: always false.
    pub fn data_3d_ok(&self) -> bool {
        debug!("3D data check not implemented, reporting false");
        false
    }

    /// Not yet implemented: always false.
    pub fn center_of_mass_data_ok(&self) -> bool {
        debug!("Center-of-mass data check not implemented, reporting false");
        false
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Calibration
    // ─────────────────────────────────────────────────────────────────────────────

    /// Looks for the calibration file, falling back to discovery in the root.
    ///
    /// On discovery the layout's calibration path is rebound to the found file.
    /// An unreadable root during discovery is an error.
    pub fn check_calibration_file(&mut self) -> Result<CalibrationStatus> {
        let current = self.layout.calibration_file_path();
        if current.is_file() {
            return Ok(CalibrationStatus::Found(current));
        }

        info!(
            expected = %current.display(),
            "Calibration file not at conventional path, scanning session root"
        );

        match find_calibration_file(self.layout.root())? {
            Some(found) => {
                info!(path = %found.display(), "Found calibration file");
                self.layout.set_calibration_file_path(&found);
                Ok(CalibrationStatus::Discovered(found))
            }
            None => Ok(CalibrationStatus::Missing),
        }
    }

    pub fn calibration_file_ok(&mut self) -> Result<bool> {
        Ok(self.check_calibration_file()?.is_ok())
    }
}

/// First regular file directly in `root` whose name ends with the
/// calibration suffix, in file-name order.
fn find_calibration_file(root: &Path) -> Result<Option<PathBuf>> {
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            SessionError::io(
                format!("listing session folder {}", root.display()),
                e.into(),
            )
        })?;
        let is_calibration = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(CAMERA_CALIBRATION_SUFFIX));
        // Symlinked calibration files count, matching the conventional-path check
        if is_calibration && entry.path().is_file() {
            return Ok(Some(entry.into_path()));
        }
    }
    Ok(None)
}
