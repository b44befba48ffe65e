//! Background rendering for interactive exploration.
//!
//! The host submits [`FrameUniforms`](crate::core::frame::uniforms::FrameUniforms)
//! snapshots; a worker thread renders the newest one and hands the result
//! to a [`FrameSink`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use events::render_event::RenderEvent;
pub use ports::frame_sink::FrameSink;
