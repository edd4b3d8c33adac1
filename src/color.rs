//! Color plumbing shared by the display renderer.

use embassy_time::Duration;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Unlit cell color.
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Dark half of the 1-second blink cycle.
///
/// Odd elapsed seconds are dark, even seconds show the channel's color.
pub const fn blink_dark(elapsed: Duration) -> bool {
    (elapsed.as_millis() / 1000) & 1 == 1
}
