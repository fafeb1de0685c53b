//! Audio playback engine.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Current playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Stopped,
}

/// Errors that can occur during player operations.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("audio output unavailable: {0}")]
    Output(String),

    #[error("failed to open {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

type DecodedFile = Decoder<BufReader<File>>;

/// Plays one track at a time.
pub struct Player {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    sink: Option<Sink>,
    state: PlaybackState,
    current_path: Option<PathBuf>,
    current_duration: Option<Duration>,
    // rodio reports no position, so elapsed time is tracked here
    playback_start: Option<Instant>,
    elapsed_before_pause: Duration,
    volume: f32,
}

impl Player {
    /// Creates a new player on the default output device.
    pub fn new() -> Result<Self, PlayerError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| PlayerError::Output(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            stream_handle,
            sink: None,
            state: PlaybackState::Stopped,
            current_path: None,
            current_duration: None,
            playback_start: None,
            elapsed_before_pause: Duration::ZERO,
            volume: 1.0,
        })
    }

    /// Loads a track, paused at its start.
    ///
    /// `known` is the length read from the file's metadata. It is used when
    /// the decoder cannot tell, which is the case for MP3 and Vorbis.
    pub fn load_track(&mut self, path: &Path, known: Option<Duration>) -> Result<(), PlayerError> {
        let source = decode(path)?;
        let duration = source.total_duration().or(known);

        let sink = self.new_sink()?;
        sink.append(source);
        sink.pause();

        self.sink = Some(sink);
        self.current_path = Some(path.to_path_buf());
        self.current_duration = duration;
        self.state = PlaybackState::Paused;
        self.playback_start = None;
        self.elapsed_before_pause = Duration::ZERO;

        log::info!("Loaded {}", path.display());
        Ok(())
    }

    /// Toggles between play and pause.
    pub fn toggle_play_pause(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused | PlaybackState::Stopped => self.play(),
        }
    }

    /// Starts or resumes playback.
    pub fn play(&mut self) {
        if let Some(sink) = &self.sink {
            if sink.is_paused() {
                sink.play();
                self.state = PlaybackState::Playing;
                self.playback_start = Some(Instant::now());
            }
        }
    }

    /// Pauses playback.
    pub fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            if !sink.is_paused() {
                sink.pause();
                self.state = PlaybackState::Paused;

                if let Some(start) = self.playback_start.take() {
                    self.elapsed_before_pause += start.elapsed();
                }
            }
        }
    }

    /// Stops playback and unloads the track.
    pub fn stop(&mut self) {
        self.sink = None;
        self.state = PlaybackState::Stopped;
        self.current_path = None;
        self.current_duration = None;
        self.playback_start = None;
        self.elapsed_before_pause = Duration::ZERO;
    }

    /// Seeks forward by `step`. Seeking past the end is ignored.
    pub fn seek_forward(&mut self, step: Duration) -> Result<(), PlayerError> {
        match forward_target(self.current_position(), step, self.current_duration) {
            Some(target) => self.seek_to(target),
            None => Ok(()),
        }
    }

    /// Seeks backward by `step`, stopping at the start.
    pub fn seek_backward(&mut self, step: Duration) -> Result<(), PlayerError> {
        let target = self.current_position().saturating_sub(step);
        self.seek_to(target)
    }

    /// Re-decodes the current file and skips to `position`; the sink cannot
    /// seek by itself.
    fn seek_to(&mut self, position: Duration) -> Result<(), PlayerError> {
        let Some(path) = self.current_path.clone() else {
            return Ok(());
        };
        let was_playing = self.state == PlaybackState::Playing;

        let sink = self.new_sink()?;
        sink.append(decode(&path)?.skip_duration(position));
        if !was_playing {
            sink.pause();
        }

        self.sink = Some(sink);
        self.elapsed_before_pause = position;
        self.playback_start = was_playing.then(Instant::now);
        log::debug!("Seeked to {:?} in {}", position, path.display());
        Ok(())
    }

    fn new_sink(&self) -> Result<Sink, PlayerError> {
        let sink =
            Sink::try_new(&self.stream_handle).map_err(|e| PlayerError::Output(e.to_string()))?;
        sink.set_volume(self.volume);
        Ok(sink)
    }

    /// Returns the current playback position.
    pub fn current_position(&self) -> Duration {
        match self.playback_start {
            Some(start) => self.elapsed_before_pause + start.elapsed(),
            None => self.elapsed_before_pause,
        }
    }

    /// Returns the total duration of the current track, if known.
    pub fn duration(&self) -> Option<Duration> {
        self.current_duration
    }

    /// Takes a duration probed after loading, if it belongs to the loaded
    /// track and the decoder did not report one.
    pub fn learn_duration(&mut self, path: &Path, duration: Duration) {
        if self.current_path.as_deref() == Some(path) && self.current_duration.is_none() {
            self.current_duration = Some(duration);
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Returns whether a track is currently loaded.
    pub fn has_track(&self) -> bool {
        self.sink.is_some()
    }

    /// Whether the loaded track has played to its end.
    pub fn is_finished(&self) -> bool {
        self.sink.as_ref().is_none_or(|sink| sink.empty())
    }

    /// Sets the playback volume (0.0 to 1.0); it carries over to later tracks.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume);
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

/// Where a forward seek lands, or `None` when it would pass the end.
/// With an unknown duration the seek goes ahead and a target past the end
/// just finishes the track.
fn forward_target(
    position: Duration,
    step: Duration,
    duration: Option<Duration>,
) -> Option<Duration> {
    let target = position + step;
    match duration {
        Some(duration) if target >= duration => None,
        _ => Some(target),
    }
}

fn decode(path: &Path) -> Result<DecodedFile, PlayerError> {
    let file = File::open(path).map_err(|source| PlayerError::File {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| PlayerError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
