pub const DISPLAY_WIDTH: i32 = 144;           // Width of the addressable image region (pixels)
pub const DISPLAY_HEIGHT: i32 = 168;          // Height of the addressable image region (pixels)
pub const FPS: u32 = 30;                      // Simulator frames per second

pub const LONG_CLICK_DELAY: f32 = 0.5;        // Hold time before a click counts as long (seconds)
pub const HAPTIC_PULSE_DURATION: f32 = 0.15;  // Length of a short vibration pulse (seconds)

pub const DEFAULT_SCALE: i32 = 3;             // Window pixels per display pixel
pub const DEFAULT_ASSET_DIR: &str = "assets"; // Where slide bitmaps are resolved from
