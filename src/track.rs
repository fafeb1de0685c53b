//! Track records and their display helpers.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// A single selected audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// 1-based position in selection order.
    pub track_number: u32,
    pub file_name: String,
    /// Unknown until the duration probe reports back.
    pub duration: Option<Duration>,
    /// Where the player loads the audio from.
    pub source: PathBuf,
}

impl Track {
    /// Creates a track with no known duration.
    pub fn new(track_number: u32, source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        Self {
            track_number,
            file_name: file_name_of(&source),
            duration: None,
            source,
        }
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.duration)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Formats a duration as `m:ss`, or `h:mm:ss` from one hour up.
/// Unknown durations render as `--:--`.
pub fn format_duration(duration: Option<Duration>) -> String {
    let Some(duration) = duration else {
        return "--:--".to_string();
    };

    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
