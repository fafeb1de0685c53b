//! Turning selected paths into tracks, and probing their durations.

use crate::track::Track;
use lofty::file::AudioFile;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;
use thiserror::Error;

const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "flac", "ogg", "wav"];

/// Errors raised while collecting tracks.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no audio files in selection")]
    NoTracks,
}

/// Expands the selected paths into numbered tracks.
///
/// Files are kept in the order given; directories are scanned recursively
/// and contribute their audio files sorted by path. Numbering starts at 1.
pub fn collect_tracks(paths: &[PathBuf]) -> Result<Vec<Track>, SourceError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            scan_directory(path, &mut found)?;
            found.sort();
            log::debug!("{} audio file(s) under {}", found.len(), path.display());
            files.extend(found);
        } else if path.is_file() {
            if is_audio_file(path) {
                files.push(path.clone());
            } else {
                log::warn!("Skipping non-audio file {}", path.display());
            }
        } else {
            return Err(SourceError::NotFound(path.clone()));
        }
    }

    if files.is_empty() {
        return Err(SourceError::NoTracks);
    }

    Ok(files
        .into_iter()
        .zip(1..)
        .map(|(path, number)| Track::new(number, path))
        .collect())
}

fn scan_directory(dir: &Path, found: &mut Vec<PathBuf>) -> Result<(), SourceError> {
    let io_error = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            scan_directory(&path, found)?;
        } else if is_audio_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

/// Checks the extension against the formats the player can decode.
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Reads the duration from the file's media properties.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged_file) => {
            let duration = tagged_file.properties().duration();
            (!duration.is_zero()).then_some(duration)
        }
        Err(e) => {
            log::warn!("Could not read properties of {}: {}", path.display(), e);
            None
        }
    }
}

/// Background duration lookup for a batch of files.
///
/// Results arrive in any order and at any time; the caller applies them
/// when it drains the probe.
pub struct DurationProbe {
    results: Receiver<(PathBuf, Duration)>,
}

impl DurationProbe {
    /// Starts probing `paths` on a worker thread.
    pub fn spawn(paths: Vec<PathBuf>) -> Self {
        let (sender, results) = mpsc::channel();

        thread::spawn(move || {
            for path in paths {
                if let Some(duration) = probe_duration(&path) {
                    if sender.send((path, duration)).is_err() {
                        // Receiver dropped; nobody is listening anymore.
                        break;
                    }
                }
            }
        });

        Self { results }
    }

    /// A probe that never reports anything.
    pub fn idle() -> Self {
        let (_, results) = mpsc::channel();
        Self { results }
    }

    /// Returns every result received so far without blocking.
    pub fn drain(&self) -> Vec<(PathBuf, Duration)> {
        self.results.try_iter().collect()
    }
}
