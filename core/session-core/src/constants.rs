//! Folder and file names shared by every session.
//!
//! Stage folders sit directly under the session root; array artifacts live
//! under `output_data/` or `output_data/raw_data/`.

/// Videos after cross-camera synchronization.
pub const SYNCHRONIZED_VIDEOS_FOLDER_NAME: &str = "synchronized_videos";

/// Videos with tracking overlays drawn on them.
pub const ANNOTATED_VIDEOS_FOLDER_NAME: &str = "annotated_videos";

/// Videos resampled to a common framerate.
pub const FRAMERATE_MATCHED_VIDEOS_FOLDER_NAME: &str = "framerate_matched_videos";

/// Root of all processed output for a session.
pub const OUTPUT_DATA_FOLDER_NAME: &str = "output_data";

/// Unfiltered intermediate arrays, nested under the output-data folder.
pub const RAW_DATA_FOLDER_NAME: &str = "raw_data";

pub const TRACKING_2D_POINTS_FILENAME: &str = "2d_points.npy";
pub const RAW_3D_POINTS_FILENAME: &str = "3d_points_raw.npy";
pub const TRACKING_3D_POINTS_FILENAME: &str = "3d_points.npy";
pub const REPROJECTION_ERROR_FILENAME: &str = "reprojection_error.npy";

/// Suffix shared by every calibration file, whatever its prefix.
pub const CAMERA_CALIBRATION_SUFFIX: &str = "camera_calibration.toml";

/// Stage folders that are corrected back to the session root when passed in
/// as the session path.
pub const STAGE_FOLDER_NAMES: [&str; 3] = [
    SYNCHRONIZED_VIDEOS_FOLDER_NAME,
    ANNOTATED_VIDEOS_FOLDER_NAME,
    OUTPUT_DATA_FOLDER_NAME,
];

/// Builds the conventional calibration filename for a session.
/// Example: `session_01` -> `session_01_camera_calibration.toml`
pub fn camera_calibration_file_name(session_name: &str) -> String {
    format!("{}_{}", session_name, CAMERA_CALIBRATION_SUFFIX)
}
