//! Scroll checkpoint recorder and player.
//!
//! A [`Session`] records scroll offsets while in recording mode, persists
//! them per page path, and replays them one keypress at a time with an
//! eased animation. The page itself is reached through [`ScrollHost`] and
//! storage through [`crate::store::KeyValueStore`], so the session never
//! depends on a particular rendering surface.
mod animator;
mod checkpoint;
mod host;
mod input;
mod mode;
mod notice;
mod session;


pub use animator::{AnimationTuning, Animator, Completion, ScrollStart, ease_out_quint};
pub use checkpoint::Checkpoint;
pub use host::ScrollHost;
pub use input::{Command, Dispatch, KeyInput, KeyTarget, route};
pub use mode::Mode;
pub use notice::Notice;
pub use session::Session;
