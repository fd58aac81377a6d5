pub mod audio_gate;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod glow;
pub mod player;
pub mod session;
pub mod sounds;
pub mod start;

pub use audio_gate::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use glow::*;
pub use player::*;
pub use session::*;
pub use sounds::*;
pub use start::*;
