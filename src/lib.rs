//! tapedeck: a terminal audio playlist player.
//!
//! The playlist is an [`OrderedPlaylist`], a doubly linked list that can be
//! switched into a circular mode for "repeat all". Around it sit the
//! pieces of the player:
//!
//! - [`source`] turns selected paths into [`Track`]s and probes their
//!   durations in the background
//! - [`session`] owns the playlist and decides what plays next
//! - [`player`] plays one track at a time through `rodio`
//! - [`ui`] and [`input`] draw the table and map keys to actions
//!
//! ```
//! use tapedeck::OrderedPlaylist;
//!
//! let mut playlist: OrderedPlaylist<&str> = ["A", "B", "C"].into_iter().collect();
//! playlist.make_circular();
//!
//! let last = playlist.last().unwrap();
//! assert_eq!(last.next().map(|entry| *entry.value()), Some("A"));
//! assert_eq!(playlist.remove_at(1), Some("B"));
//! ```

pub mod app;
pub mod config;
pub mod input;
pub mod list;
pub mod player;
pub mod session;
pub mod source;
pub mod track;
pub mod ui;

pub use list::{Entry, EntryId, OrderedPlaylist};
pub use session::{RepeatMode, Session};
pub use track::Track;
