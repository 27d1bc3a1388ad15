//! session-check: inspect a motion-capture session folder.
//!
//! Prints a JSON report on stdout; logs go to stderr.
//!
//! ## Subcommands
//!
//! - `status`: Aggregate pipeline-stage status
//! - `paths`: Every derived path for the session
//! - `calibration`: Locate the calibration file, with fallback discovery

mod logging;
mod report;

use clap::{Parser, Subcommand};
use report::{CalibrationReport, StatusReport};
use serde::Serialize;
use session_core::{
    load_checker_config, ArtifactPresence, Result, SessionError, SessionLayout,
    SessionStatusChecker,
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "session-check")]
#[command(about = "Motion-capture session layout and status inspector")]
#[command(version)]
struct Cli {
    /// Checker configuration file (JSON); defaults apply when absent
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report per-stage status for a session
    Status {
        /// Session root or one of its stage folders
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Print the session's derived paths
    Paths {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Check for the session's calibration file
    Calibration {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(&cli, &mut stdout) {
        tracing::error!(error = %e, "session-check failed");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Status { path } => {
            let checker = build_checker(path, cli.config.as_deref())?;
            let status = checker.status()?;
            let report = StatusReport::new(checker.layout(), status, chrono::Utc::now());
            write_json(out, &report)
        }
        Commands::Paths { path } => write_json(out, &SessionLayout::new(path).manifest()),
        Commands::Calibration { path } => {
            let mut checker = build_checker(path, cli.config.as_deref())?;
            let status = checker.check_calibration_file()?;
            // Report from the layout after the check so a discovered path shows up
            write_json(out, &CalibrationReport::new(checker.layout(), &status))
        }
    }
}

fn build_checker(
    path: &Path,
    config_path: Option<&Path>,
) -> Result<SessionStatusChecker<ArtifactPresence>> {
    let config = load_checker_config(config_path)?;
    let layout = SessionLayout::new(path);
    tracing::debug!(root = %layout.root().display(), "Inspecting session");
    Ok(SessionStatusChecker::new(layout, ArtifactPresence::new(&config)))
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| SessionError::Json {
        context: "serializing report".to_string(),
        source,
    })?;
    writeln!(out, "{}", json).map_err(|source| SessionError::Io {
        context: "writing report".to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn run_json(args: &[&str]) -> Result<Value> {
        let cli = Cli::try_parse_from(std::iter::once("session-check").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(serde_json::from_slice(&out).unwrap())
    }

    fn session_dir(temp: &TempDir) -> PathBuf {
        let root = temp.path().join("session_01");
        fs::create_dir(&root).unwrap();
        root
    }

    #[test]
    fn test_calibration_command_reports_discovered_path() {
        let temp = TempDir::new().unwrap();
        let root = session_dir(&temp);
        let rig = root.join("rig_camera_calibration.toml");
        fs::write(&rig, "").unwrap();

        let json = run_json(&["calibration", root.to_str().unwrap()]).unwrap();
        assert_eq!(json["found"], true);
        assert_eq!(json["discovered"], true);
        assert_eq!(json["calibration_file_path"], rig.to_str().unwrap());
    }

    #[test]
    fn test_calibration_command_reports_missing_default() {
        let temp = TempDir::new().unwrap();
        let root = session_dir(&temp);

        let json = run_json(&["calibration", root.to_str().unwrap()]).unwrap();
        assert_eq!(json["found"], false);
        assert_eq!(
            json["calibration_file_path"],
            root.join("session_01_camera_calibration.toml").to_str().unwrap()
        );
    }

    #[test]
    fn test_status_command_reports_stage_checks() {
        let temp = TempDir::new().unwrap();
        let root = session_dir(&temp);
        fs::create_dir(root.join("synchronized_videos")).unwrap();
        fs::write(root.join("synchronized_videos").join("cam_0.mp4"), b"").unwrap();

        let json = run_json(&["status", root.to_str().unwrap()]).unwrap();
        assert_eq!(json["session_name"], "session_01");
        assert_eq!(json["status"]["videos_framerate_status_check"], true);
        assert_eq!(json["status"]["data2d_status_check"], false);
        assert_eq!(json["status"]["videos_info"]["number_synchronized_videos"], 0);
    }

    #[test]
    fn test_status_command_propagates_missing_video_folder() {
        let temp = TempDir::new().unwrap();
        let root = session_dir(&temp);

        let err = run_json(&["status", root.to_str().unwrap()]).unwrap_err();
        assert!(matches!(err, SessionError::Io { .. }));
    }

    #[test]
    fn test_paths_command_anchors_stage_folder() {
        let json = run_json(&["paths", "/data/session_01/annotated_videos"]).unwrap();
        assert_eq!(json["root_path"], "/data/session_01");
        assert_eq!(
            json["tracking_3d_points_file_path"],
            "/data/session_01/output_data/3d_points.npy"
        );
    }
}
