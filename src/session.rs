//! Playback session: which playlist is active, which entry is current,
//! and where to go next.

use crate::list::{EntryId, OrderedPlaylist};
use crate::track::Track;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Repeat mode for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    Off,
    All,
    Single,
}

impl RepeatMode {
    /// Cycles to the next repeat mode: Off → All → Single → Off.
    pub fn cycle(&mut self) {
        *self = match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::Single,
            RepeatMode::Single => RepeatMode::Off,
        };
    }

    /// Whether the playlist should wrap around.
    fn wraps(self) -> bool {
        self == RepeatMode::All
    }
}

/// Owns the playlist for one listening session.
///
/// While shuffle is on, a shuffled copy of the ordered playlist is the
/// active one; the ordered playlist is kept so shuffle can be undone.
#[derive(Debug, Default)]
pub struct Session {
    ordered: OrderedPlaylist<Track>,
    shuffled: Option<OrderedPlaylist<Track>>,
    current: Option<EntryId>,
    repeat: RepeatMode,
}

impl Session {
    /// Creates a session over `tracks`, starting at the first one.
    pub fn new(tracks: Vec<Track>) -> Self {
        let ordered: OrderedPlaylist<Track> = tracks.into_iter().collect();
        let current = ordered.first().map(|entry| entry.id());
        Self {
            ordered,
            shuffled: None,
            current,
            repeat: RepeatMode::Off,
        }
    }

    /// The playlist navigation currently follows.
    pub fn playlist(&self) -> &OrderedPlaylist<Track> {
        self.shuffled.as_ref().unwrap_or(&self.ordered)
    }

    fn playlist_mut(&mut self) -> &mut OrderedPlaylist<Track> {
        self.shuffled.as_mut().unwrap_or(&mut self.ordered)
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|id| self.playlist().value(id))
    }

    /// Position of the current track in the active playlist.
    pub fn current_index(&self) -> Option<usize> {
        self.current.and_then(|id| self.playlist().position(id))
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled.is_some()
    }

    /// Moves to the following track. At the end of a linear playlist this
    /// returns `None` and the current track stays put.
    pub fn next(&mut self) -> Option<&Track> {
        let next = self.playlist().next_id(self.current?)?;
        self.current = Some(next);
        self.current_track()
    }

    /// Moves to the preceding track, wrapping only when repeating all.
    pub fn previous(&mut self) -> Option<&Track> {
        let previous = self.playlist().previous_id(self.current?)?;
        self.current = Some(previous);
        self.current_track()
    }

    /// Decides what plays after the current track finishes.
    /// `None` means playback should stop.
    pub fn on_track_ended(&mut self) -> Option<&Track> {
        match self.repeat {
            RepeatMode::Single => self.current_track(),
            RepeatMode::Off | RepeatMode::All => self.next(),
        }
    }

    /// Jumps to the track at `index` of the active playlist.
    pub fn goto(&mut self, index: usize) -> Option<&Track> {
        let id = self.playlist().get(index)?.id();
        self.current = Some(id);
        self.current_track()
    }

    /// Hands the current track to `load`, moving on to the following track
    /// each time it fails.
    ///
    /// Gives up at the end of a linear playlist or after every track has
    /// been tried once, returning the last error. `None` means there is no
    /// current track.
    pub fn load_playable<E>(
        &mut self,
        mut load: impl FnMut(&Track) -> Result<(), E>,
    ) -> Option<Result<(), E>> {
        let attempts = self.len();
        for attempt in 1..=attempts {
            let Err(e) = load(self.current_track()?) else {
                return Some(Ok(()));
            };
            if attempt == attempts || self.next().is_none() {
                return Some(Err(e));
            }
        }
        None
    }

    /// Cycles the repeat mode, switching both playlists between linear and
    /// circular.
    pub fn cycle_repeat(&mut self) {
        let mut repeat = self.repeat;
        repeat.cycle();
        self.set_repeat(repeat);
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
        let wraps = repeat.wraps();
        for playlist in std::iter::once(&mut self.ordered).chain(self.shuffled.as_mut()) {
            if wraps {
                playlist.make_circular();
            } else {
                playlist.make_linear();
            }
        }
    }

    /// Toggles shuffle mode.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Toggles shuffle mode using `rng` for the new order.
    ///
    /// Turning shuffle on puts the current track first so playback carries
    /// on from it. Turning it off finds the current track again in the
    /// ordered playlist.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let current = self.current_track().cloned();

        match self.shuffled.take() {
            Some(_) => {
                self.current = current
                    .and_then(|track| self.ordered.index_of(&track))
                    .and_then(|index| self.ordered.get(index))
                    .map(|entry| entry.id());
                log::debug!("Shuffle off");
            }
            None => {
                let mut tracks: Vec<Track> = self.ordered.iter().cloned().collect();
                tracks.shuffle(rng);
                if let Some(current) = &current {
                    if let Some(pos) = tracks.iter().position(|track| track == current) {
                        tracks.swap(0, pos);
                    }
                }

                let mut shuffled: OrderedPlaylist<Track> = tracks.into_iter().collect();
                if self.repeat.wraps() {
                    shuffled.make_circular();
                }
                self.current = current.and_then(|_| shuffled.first()).map(|entry| entry.id());
                self.shuffled = Some(shuffled);
                log::debug!("Shuffle on");
            }
        }
    }

    /// Appends tracks, numbering them after the existing ones.
    pub fn add_tracks(&mut self, tracks: impl IntoIterator<Item = Track>) {
        let mut number = self
            .ordered
            .last()
            .map_or(0, |entry| entry.value().track_number);

        for mut track in tracks {
            number += 1;
            track.track_number = number;
            if let Some(shuffled) = self.shuffled.as_mut() {
                shuffled.append(track.clone());
            }
            self.ordered.append(track);
        }

        // An empty playlist cannot be made circular, so apply the mode
        // again now that there are entries.
        self.set_repeat(self.repeat);

        if self.current.is_none() {
            self.current = self.playlist().first().map(|entry| entry.id());
        }
    }

    /// Removes the track at `index` of the active playlist.
    ///
    /// If it was the current track, the following track becomes current
    /// (the preceding one when it was last).
    pub fn remove_at(&mut self, index: usize) -> Option<Track> {
        let id = self.playlist().get(index)?.id();

        if self.current == Some(id) {
            let playlist = self.playlist();
            let following = playlist.next_id(id).filter(|&next| next != id);
            let preceding = playlist.previous_id(id).filter(|&previous| previous != id);
            self.current = following.or(preceding);
        }

        let track = self.playlist_mut().remove_entry(id)?;
        if self.shuffled.is_some() {
            self.ordered.remove(&track);
        }
        log::debug!("Removed {} from playlist", track.file_name);
        Some(track)
    }

    /// Empties the session. Repeat and shuffle settings stay as they are.
    pub fn clear(&mut self) {
        self.ordered.remove_all();
        if let Some(shuffled) = self.shuffled.as_mut() {
            shuffled.remove_all();
        }
        self.current = None;
    }

    /// Records a probed duration for every track loaded from `source`.
    pub fn set_duration(&mut self, source: &Path, duration: Duration) {
        for playlist in std::iter::once(&mut self.ordered).chain(self.shuffled.as_mut()) {
            for track in playlist.values_mut().filter(|track| track.source == source) {
                track.duration = Some(duration);
            }
        }
    }
}
