//! Session folder layout and derived artifact paths.
//!
//! `SessionLayout` is the single source of truth for where a session's
//! pipeline artifacts live. Every accessor is a pure join on the session root;
//! nothing here touches the filesystem.
//!
//! ## Calibration path
//!
//! The calibration file normally follows the `<session>_camera_calibration.toml`
//! convention. When discovery finds a differently named file, it is recorded
//! as an explicit override instead of replacing the default, so callers can
//! tell the two apart via [`SessionLayout::discovered_calibration_file_path`].

use crate::constants::{
    camera_calibration_file_name, ANNOTATED_VIDEOS_FOLDER_NAME,
    FRAMERATE_MATCHED_VIDEOS_FOLDER_NAME, OUTPUT_DATA_FOLDER_NAME, RAW_3D_POINTS_FILENAME,
    RAW_DATA_FOLDER_NAME, REPROJECTION_ERROR_FILENAME, STAGE_FOLDER_NAMES,
    SYNCHRONIZED_VIDEOS_FOLDER_NAME, TRACKING_2D_POINTS_FILENAME, TRACKING_3D_POINTS_FILENAME,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Canonical paths for one capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLayout {
    /// Session root (never a stage folder)
    root: PathBuf,
    /// Base name of the root, used for the default calibration filename
    name: String,
    /// Calibration file found by discovery, if it differs from the default
    calibration_override: Option<PathBuf>,
}

impl SessionLayout {
    /// Creates a layout anchored at the session root.
    ///
    /// Passing a stage folder (`synchronized_videos`, `annotated_videos`,
    /// `output_data`) anchors the layout at its parent instead.
    pub fn new(session_folder_path: impl AsRef<Path>) -> Self {
        let root = anchor_at_session_root(session_folder_path.as_ref());
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            root,
            name,
            calibration_override: None,
        }
    }

    /// Returns the session root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the session name (base name of the root).
    pub fn name(&self) -> &str {
        &self.name
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Stage Folders
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn synchronized_videos_folder_path(&self) -> PathBuf {
        self.root.join(SYNCHRONIZED_VIDEOS_FOLDER_NAME)
    }

    pub fn annotated_videos_folder_path(&self) -> PathBuf {
        self.root.join(ANNOTATED_VIDEOS_FOLDER_NAME)
    }

    pub fn framerate_matched_videos_folder_path(&self) -> PathBuf {
        self.root.join(FRAMERATE_MATCHED_VIDEOS_FOLDER_NAME)
    }

    pub fn output_data_folder_path(&self) -> PathBuf {
        self.root.join(OUTPUT_DATA_FOLDER_NAME)
    }

    /// Path to output_data/raw_data/.
    pub fn raw_data_folder_path(&self) -> PathBuf {
        self.output_data_folder_path().join(RAW_DATA_FOLDER_NAME)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Array Artifacts
    // ─────────────────────────────────────────────────────────────────────────────

    /// Per-camera 2D tracking points (output_data/raw_data/).
    pub fn tracking_2d_points_file_path(&self) -> PathBuf {
        self.raw_data_folder_path().join(TRACKING_2D_POINTS_FILENAME)
    }

    /// Triangulated 3D points before filtering (output_data/raw_data/).
    pub fn raw_3d_points_file_path(&self) -> PathBuf {
        self.raw_data_folder_path().join(RAW_3D_POINTS_FILENAME)
    }

    /// Final 3D points. Lives directly under output_data/, not raw_data/.
    pub fn tracking_3d_points_file_path(&self) -> PathBuf {
        self.output_data_folder_path().join(TRACKING_3D_POINTS_FILENAME)
    }

    /// Triangulation reprojection error (output_data/raw_data/).
    pub fn reprojection_error_file_path(&self) -> PathBuf {
        self.raw_data_folder_path().join(REPROJECTION_ERROR_FILENAME)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Calibration File
    // ─────────────────────────────────────────────────────────────────────────────

    /// Conventional calibration path: `<root>/<name>_camera_calibration.toml`.
    pub fn default_calibration_file_path(&self) -> PathBuf {
        self.root.join(camera_calibration_file_name(&self.name))
    }

    /// The calibration path in effect: the override if set, else the default.
    pub fn calibration_file_path(&self) -> PathBuf {
        self.calibration_override
            .clone()
            .unwrap_or_else(|| self.default_calibration_file_path())
    }

    /// The override recorded by discovery (or an explicit set), if any.
    pub fn discovered_calibration_file_path(&self) -> Option<&Path> {
        self.calibration_override.as_deref()
    }

    /// Rebinds the calibration path.
    pub fn set_calibration_file_path(&mut self, path: impl Into<PathBuf>) {
        self.calibration_override = Some(path.into());
    }

    /// Builds a serializable snapshot of every derived path.
    pub fn manifest(&self) -> LayoutManifest {
        LayoutManifest {
            session_name: self.name.clone(),
            root_path: display(&self.root),
            synchronized_videos_folder_path: display(&self.synchronized_videos_folder_path()),
            annotated_videos_folder_path: display(&self.annotated_videos_folder_path()),
            framerate_matched_videos_folder_path: display(
                &self.framerate_matched_videos_folder_path(),
            ),
            output_data_folder_path: display(&self.output_data_folder_path()),
            raw_data_folder_path: display(&self.raw_data_folder_path()),
            calibration_file_path: display(&self.calibration_file_path()),
            tracking_2d_points_file_path: display(&self.tracking_2d_points_file_path()),
            raw_3d_points_file_path: display(&self.raw_3d_points_file_path()),
            tracking_3d_points_file_path: display(&self.tracking_3d_points_file_path()),
            reprojection_error_file_path: display(&self.reprojection_error_file_path()),
        }
    }
}

/// Flat, string-valued view of a [`SessionLayout`] for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutManifest {
    pub session_name: String,
    pub root_path: String,
    pub synchronized_videos_folder_path: String,
    pub annotated_videos_folder_path: String,
    pub framerate_matched_videos_folder_path: String,
    pub output_data_folder_path: String,
    pub raw_data_folder_path: String,
    pub calibration_file_path: String,
    pub tracking_2d_points_file_path: String,
    pub raw_3d_points_file_path: String,
    pub tracking_3d_points_file_path: String,
    pub reprojection_error_file_path: String,
}

fn anchor_at_session_root(path: &Path) -> PathBuf {
    let is_stage_folder = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| STAGE_FOLDER_NAMES.contains(&n));

    if !is_stage_folder {
        return path.to_path_buf();
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        // Bare relative stage folder name: its parent is the working directory
        _ => PathBuf::from("."),
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SessionLayout {
        SessionLayout::new("/data/sessions/session_01")
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Root Anchoring Tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_plain_root_is_kept() {
        let layout = layout();
        assert_eq!(layout.root(), Path::new("/data/sessions/session_01"));
        assert_eq!(layout.name(), "session_01");
    }

    #[test]
    fn test_stage_folders_anchor_at_parent() {
        let expected = layout();
        for stage in STAGE_FOLDER_NAMES {
            let from_stage = SessionLayout::new(expected.root().join(stage));
            assert_eq!(from_stage.root(), expected.root(), "stage: {}", stage);
            assert_eq!(from_stage.name(), expected.name());
        }
    }

    #[test]
    fn test_trailing_slash_on_stage_folder_anchors_at_parent() {
        let layout = SessionLayout::new("/data/sessions/session_01/output_data/");
        assert_eq!(layout.root(), Path::new("/data/sessions/session_01"));
    }

    #[test]
    fn test_framerate_matched_folder_is_not_corrected() {
        let layout = SessionLayout::new("/data/sessions/session_01/framerate_matched_videos");
        assert_eq!(
            layout.root(),
            Path::new("/data/sessions/session_01/framerate_matched_videos")
        );
    }

    #[test]
    fn test_raw_data_folder_is_not_corrected() {
        let layout = SessionLayout::new("/data/sessions/session_01/output_data/raw_data");
        assert_eq!(layout.name(), "raw_data");
    }

    #[test]
    fn test_bare_stage_folder_anchors_at_current_dir() {
        let layout = SessionLayout::new("synchronized_videos");
        assert_eq!(layout.root(), Path::new("."));
        assert_eq!(layout.name(), "");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Derived Path Tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_stage_folder_paths() {
        let layout = layout();
        assert_eq!(
            layout.synchronized_videos_folder_path(),
            PathBuf::from("/data/sessions/session_01/synchronized_videos")
        );
        assert_eq!(
            layout.annotated_videos_folder_path(),
            PathBuf::from("/data/sessions/session_01/annotated_videos")
        );
        assert_eq!(
            layout.framerate_matched_videos_folder_path(),
            PathBuf::from("/data/sessions/session_01/framerate_matched_videos")
        );
        assert_eq!(
            layout.output_data_folder_path(),
            PathBuf::from("/data/sessions/session_01/output_data")
        );
        assert_eq!(
            layout.raw_data_folder_path(),
            PathBuf::from("/data/sessions/session_01/output_data/raw_data")
        );
    }

    #[test]
    fn test_array_artifact_paths() {
        let layout = layout();
        assert_eq!(
            layout.tracking_2d_points_file_path(),
            PathBuf::from("/data/sessions/session_01/output_data/raw_data/2d_points.npy")
        );
        assert_eq!(
            layout.raw_3d_points_file_path(),
            PathBuf::from("/data/sessions/session_01/output_data/raw_data/3d_points_raw.npy")
        );
        assert_eq!(
            layout.tracking_3d_points_file_path(),
            PathBuf::from("/data/sessions/session_01/output_data/3d_points.npy")
        );
        assert_eq!(
            layout.reprojection_error_file_path(),
            PathBuf::from("/data/sessions/session_01/output_data/raw_data/reprojection_error.npy")
        );
    }

    #[test]
    fn test_accessors_are_pure() {
        let layout = layout();
        assert_eq!(
            layout.tracking_2d_points_file_path(),
            layout.tracking_2d_points_file_path()
        );
        assert_eq!(layout.calibration_file_path(), layout.calibration_file_path());
        assert_eq!(layout.manifest(), layout.manifest());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Calibration Path Tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_default_calibration_path_uses_session_name() {
        let layout = layout();
        assert_eq!(
            layout.calibration_file_path(),
            PathBuf::from("/data/sessions/session_01/session_01_camera_calibration.toml")
        );
        assert!(layout.discovered_calibration_file_path().is_none());
    }

    #[test]
    fn test_set_then_get_calibration_path_roundtrip() {
        let mut layout = layout();
        let custom = PathBuf::from("/elsewhere/rig_camera_calibration.toml");
        layout.set_calibration_file_path(&custom);

        assert_eq!(layout.calibration_file_path(), custom);
        assert_eq!(layout.discovered_calibration_file_path(), Some(custom.as_path()));
        // The conventional default is still available
        assert_eq!(
            layout.default_calibration_file_path(),
            PathBuf::from("/data/sessions/session_01/session_01_camera_calibration.toml")
        );
    }

    #[test]
    fn test_manifest_reflects_calibration_override() {
        let mut layout = layout();
        layout.set_calibration_file_path("/data/sessions/session_01/a_camera_calibration.toml");

        let manifest = layout.manifest();
        assert_eq!(manifest.session_name, "session_01");
        assert_eq!(
            manifest.calibration_file_path,
            "/data/sessions/session_01/a_camera_calibration.toml"
        );
    }

    #[test]
    fn test_manifest_serializes_to_json() {
        let json = serde_json::to_value(layout().manifest()).unwrap();
        assert_eq!(json["root_path"], "/data/sessions/session_01");
        assert_eq!(
            json["raw_data_folder_path"],
            "/data/sessions/session_01/output_data/raw_data"
        );
    }
}
