//! # session-core
//!
//! Folder conventions and pipeline-stage status for video-based motion-capture
//! sessions.
//!
//! ## Design Principles
//!
//! - **Synchronous**: Blocking filesystem probes only, no async runtime.
//! - **Not thread-safe**: A checker is owned by one caller; the calibration
//!   override is only written through `&mut self`.
//! - **No caching**: Every status query re-reads the disk.
//! - **Narrow failure mapping**: Only validator assertion failures become `false`;
//!   every other error propagates.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use session_core::{ArtifactPresence, CheckerConfig, SessionLayout, SessionStatusChecker};
//!
//! let layout = SessionLayout::new("/data/sessions/session_2024_01_01");
//! let validators = ArtifactPresence::new(&CheckerConfig::default());
//! let mut checker = SessionStatusChecker::new(layout, validators);
//!
//! let status = checker.status()?;
//! let calibrated = checker.calibration_file_ok()?;
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod status;
pub mod validators;

pub use config::{load_checker_config, CheckerConfig};
pub use constants::*;
pub use error::{Result, SessionError, ValidationError};
pub use layout::{LayoutManifest, SessionLayout};
pub use status::{CalibrationStatus, CheckOutcome, SessionStatus, SessionStatusChecker, VideosInfo};
pub use validators::{ArtifactPresence, SessionValidators};
