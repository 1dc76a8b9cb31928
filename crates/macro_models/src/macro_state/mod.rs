//! Macro state process.
//!
//! - [`channels`]: Channel identities and AR(1) parameters
//! - [`state`]: [`MacroState`], the single mutable entity of a session

pub mod channels;
pub mod state;

pub use channels::{ChannelParams, MacroChannel, MacroParams};
pub use state::{MacroDeltas, MacroLevels, MacroState};
