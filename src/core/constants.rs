// Gameplay, rendering and asset constants shared by the core and the web shell.

// Session
pub const SESSION_SECONDS: u32 = 5; // countdown length of one round
pub const TICK_INTERVAL_MS: i32 = 1000;
pub const SESSION_SECONDS_MAX: u32 = 60; // upper bound accepted from the URL query

// Glow rendering
pub const GLOW_RADIUS: f64 = 50.0;
pub const GLOW_MID_STOP: f32 = 0.6;
pub const GLOW_MID_ALPHA_HEX: &str = "55"; // appended to the palette color at the mid stop
pub const GLOW_PALETTE: [&str; 5] = ["#ff80ed", "#ff4081", "#e040fb", "#7c4dff", "#536dfe"];

// Export
pub const EXPORT_BACKGROUND: &str = "#2b003b";
pub const EXPORT_FILENAME: &str = "tap-game-canvas.png";
pub const EXPORT_MIME: &str = "image/png";

// Haptics
pub const VIBRATE_MS: u32 = 50;

// Sound assets, in rotation order
pub const SOUND_FILES: [&str; 2] = [
    "sfx/quiet-night-lo-fi-piano.wav",
    "sfx/peachy-lo-fi-piano-chop.wav",
];
