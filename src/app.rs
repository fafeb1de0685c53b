//! Application state: ties the session, the player and the view together.

use crate::config::Config;
use crate::player::{PlaybackState, Player, PlayerError};
use crate::session::Session;
use crate::source::DurationProbe;
use crate::ui::View;
use std::time::Duration;

/// Which screen has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Help,
}

/// Highlighted row of the playlist table, independent of the playing
/// track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor(usize);

impl Cursor {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn set(&mut self, index: usize) {
        self.0 = index;
    }

    pub fn up(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Moves down, staying on the last of `rows`.
    pub fn down(&mut self, rows: usize) {
        if self.0 + 1 < rows {
            self.0 += 1;
        }
    }

    /// Pulls the cursor back onto the table after it shrank to `rows`.
    pub fn clamp(&mut self, rows: usize) {
        self.0 = self.0.min(rows.saturating_sub(1));
    }
}

/// What removing a row did to the playing track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    Other,
    Current,
    LastTrack,
}

/// Removes the row under `cursor` and keeps the cursor on the table.
fn remove_row(session: &mut Session, cursor: &mut Cursor) -> Option<Removal> {
    let was_current = session.current_index() == Some(cursor.index());
    session.remove_at(cursor.index())?;
    cursor.clamp(session.playlist().len());

    Some(match (was_current, session.current_track()) {
        (false, _) => Removal::Other,
        (true, Some(_)) => Removal::Current,
        (true, None) => Removal::LastTrack,
    })
}

/// Moves the session past a finished track. `false` means playback stops.
fn advance_after_end(session: &mut Session) -> bool {
    session.on_track_ended().is_some()
}

/// Main application state.
pub struct App {
    player: Player,
    session: Session,
    config: Config,
    probe: DurationProbe,
    running: bool,
    ui_mode: UiMode,
    cursor: Cursor,
    message: Option<String>,
}

impl App {
    /// Creates the app and applies the configured playback settings to the
    /// session.
    pub fn new(
        mut session: Session,
        config: Config,
        probe: DurationProbe,
    ) -> Result<Self, PlayerError> {
        let mut player = Player::new()?;
        player.set_volume(config.playback.volume);

        session.set_repeat(config.playback.repeat);
        if config.playback.shuffle {
            session.toggle_shuffle();
        }

        Ok(Self {
            player,
            session,
            config,
            probe,
            running: true,
            ui_mode: UiMode::Normal,
            cursor: Cursor::default(),
            message: None,
        })
    }

    /// Starts playing the current track.
    pub fn start(&mut self) {
        self.load_current(true);
    }

    /// Applies background results and reacts to the end of a track.
    /// Called once per loop iteration.
    pub fn update(&mut self) {
        for (source, duration) in self.probe.drain() {
            log::debug!("Duration of {}: {:?}", source.display(), duration);
            self.session.set_duration(&source, duration);
            self.player.learn_duration(&source, duration);
        }

        if self.player.has_track() && self.player.is_finished() {
            if advance_after_end(&mut self.session) {
                self.load_current(true);
            } else {
                log::info!("End of playlist");
                self.player.stop();
            }
        }
    }

    /// Handles play/pause toggle. Restarts the current track after the
    /// playlist ran out.
    pub fn toggle_play_pause(&mut self) {
        if self.player.has_track() {
            self.player.toggle_play_pause();
        } else {
            self.load_current(true);
        }
    }

    pub fn next_track(&mut self) {
        if self.session.next().is_some() {
            self.load_current(self.keeps_playing());
        }
    }

    pub fn previous_track(&mut self) {
        if self.session.previous().is_some() {
            self.load_current(self.keeps_playing());
        }
    }

    pub fn seek_forward(&mut self) {
        let step = self.seek_step();
        let result = self.player.seek_forward(step);
        self.report(result);
    }

    pub fn seek_backward(&mut self) {
        let step = self.seek_step();
        let result = self.player.seek_backward(step);
        self.report(result);
    }

    pub fn toggle_shuffle(&mut self) {
        self.session.toggle_shuffle();
        self.cursor.set(self.session.current_index().unwrap_or(0));
    }

    pub fn cycle_repeat(&mut self) {
        self.session.cycle_repeat();
        log::debug!("Repeat: {:?}", self.session.repeat_mode());
    }

    pub fn cursor_up(&mut self) {
        self.cursor.up();
    }

    pub fn cursor_down(&mut self) {
        self.cursor.down(self.session.playlist().len());
    }

    /// Plays the track under the cursor.
    pub fn play_selected(&mut self) {
        if self.session.goto(self.cursor.index()).is_some() {
            self.load_current(true);
        }
    }

    /// Removes the track under the cursor. Removing the playing track moves
    /// playback to the track that takes its place.
    pub fn remove_selected(&mut self) {
        let keep_playing = self.keeps_playing();
        match remove_row(&mut self.session, &mut self.cursor) {
            Some(Removal::Current) => self.load_current(keep_playing),
            Some(Removal::LastTrack) => self.player.stop(),
            Some(Removal::Other) | None => {}
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        self.ui_mode
    }

    pub fn set_ui_mode(&mut self, mode: UiMode) {
        self.ui_mode = mode;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Quits the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Returns whether the app is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Snapshot for drawing the next frame.
    pub fn view(&self) -> View<'_> {
        View {
            session: &self.session,
            config: &self.config,
            state: self.player.state(),
            position: self.player.current_position(),
            duration: self.player.duration(),
            cursor: self.cursor.index(),
            show_help: self.ui_mode == UiMode::Help,
            message: self.message.as_deref(),
        }
    }

    fn seek_step(&self) -> Duration {
        Duration::from_secs(u64::from(self.config.playback.seek_step))
    }

    fn keeps_playing(&self) -> bool {
        self.player.state() == PlaybackState::Playing
    }

    /// Loads the session's current track into the player, skipping ahead
    /// past tracks that cannot be played.
    fn load_current(&mut self, autoplay: bool) {
        let player = &mut self.player;
        let mut skipped = None;
        let outcome = self.session.load_playable(|track| {
            player.load_track(&track.source, track.duration).inspect_err(|e| {
                log::warn!("{}", e);
                skipped = Some(e.to_string());
            })
        });

        match outcome {
            Some(Ok(())) => {
                self.message = skipped;
                if autoplay {
                    self.player.play();
                }
                if let Some(index) = self.session.current_index() {
                    self.cursor.set(index);
                }
            }
            Some(Err(e)) => {
                self.player.stop();
                self.message = Some(e.to_string());
            }
            None => self.player.stop(),
        }
    }

    fn report(&mut self, result: Result<(), PlayerError>) {
        if let Err(e) = result {
            log::warn!("{}", e);
            self.message = Some(e.to_string());
        }
    }
}
