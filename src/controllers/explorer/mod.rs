//! Host-side explorer session: startup configuration and the single-writer
//! state that every input operation mutates between frames.

pub mod config;
pub mod state;
