//! Validator seam for delegated status checks.
//!
//! Framerate, frame-count and tracking-array shape validation belong to the
//! video and tracking tooling, not to this crate. Status checks call them
//! through [`SessionValidators`] and only interpret the failure signal.
//!
//! [`ArtifactPresence`] is the bundled implementation. It checks that the
//! inputs each real validator would need are present, and nothing more.

use crate::config::CheckerConfig;
use crate::error::{SessionError, ValidationError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// External validators consulted by [`SessionStatusChecker`](crate::SessionStatusChecker).
///
/// Return `Ok(())` when the data is consistent, [`ValidationError::Assertion`]
/// when it is not, and [`ValidationError::Session`] when the check could not
/// run (missing folder, unreadable file).
pub trait SessionValidators {
    /// All synchronized videos share one framerate.
    fn validate_framerates(
        &self,
        synchronized_videos_folder: &Path,
    ) -> Result<(), ValidationError>;

    /// All synchronized videos have the same number of frames.
    fn validate_frame_counts(
        &self,
        synchronized_videos_folder: &Path,
    ) -> Result<(), ValidationError>;

    /// The 2D tracking array's shape agrees with the synchronized video set.
    fn validate_tracking_data_shape(
        &self,
        synchronized_videos_folder: &Path,
        tracking_data_file: &Path,
    ) -> Result<(), ValidationError>;
}

/// Presence-only validators: a folder must hold videos, an array file must exist.
#[derive(Debug, Clone)]
pub struct ArtifactPresence {
    config: CheckerConfig,
}

impl ArtifactPresence {
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Lists video files directly inside `folder`, sorted by file name.
    ///
    /// A missing or unreadable folder is an error.
    pub fn video_files(&self, folder: &Path) -> Result<Vec<PathBuf>, SessionError> {
        let mut videos = Vec::new();
        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                SessionError::io(
                    format!("listing videos in {}", folder.display()),
                    e.into(),
                )
            })?;
            if entry.path().is_file() && self.config.is_video_file(entry.path()) {
                videos.push(entry.into_path());
            }
        }
        Ok(videos)
    }

    fn require_videos(&self, folder: &Path) -> Result<(), ValidationError> {
        if self.video_files(folder)?.is_empty() {
            return Err(ValidationError::assertion(format!(
                "no video files in {}",
                folder.display()
            )));
        }
        Ok(())
    }
}

impl Default for ArtifactPresence {
    fn default() -> Self {
        Self::new(&CheckerConfig::default())
    }
}

impl SessionValidators for ArtifactPresence {
    fn validate_framerates(
        &self,
        synchronized_videos_folder: &Path,
    ) -> Result<(), ValidationError> {
        self.require_videos(synchronized_videos_folder)
    }

    fn validate_frame_counts(
        &self,
        synchronized_videos_folder: &Path,
    ) -> Result<(), ValidationError> {
        self.require_videos(synchronized_videos_folder)
    }

    fn validate_tracking_data_shape(
        &self,
        synchronized_videos_folder: &Path,
        tracking_data_file: &Path,
    ) -> Result<(), ValidationError> {
        self.require_videos(synchronized_videos_folder)?;
        if !tracking_data_file.is_file() {
            return Err(ValidationError::assertion(format!(
                "tracking data not found at {}",
                tracking_data_file.display()
            )));
        }
        Ok(())
    }
}
