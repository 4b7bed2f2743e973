use std::time::Duration;

/// Lid rotation at the fully open position, radians about the hinge axis.
pub const MAX_OPEN_ANGLE: f32 = std::f32::consts::PI * 0.65;

pub const OPEN_DURATION: Duration = Duration::from_millis(1200);
pub const CLOSE_DURATION: Duration = Duration::from_millis(1000);

/// Window during which repeated open triggers are swallowed.
pub const CLICK_COOLDOWN: Duration = Duration::from_millis(1500);

/// Navigation links appear this long after a successful open trigger.
pub const NAV_REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Staggered pulse of the navigation links starts this long after the trigger.
pub const NAV_PULSE_DELAY: Duration = Duration::from_millis(900);
pub const NAV_PULSE_STAGGER: Duration = Duration::from_millis(100);
pub const NAV_PULSE_DURATION: Duration = Duration::from_millis(500);
pub const NAV_PULSE_SCALE: f32 = 1.1;

/// Scale-down acknowledgement when a navigation link is pressed.
pub const NAV_PRESS_FEEDBACK: Duration = Duration::from_millis(200);

/// Page scroll is handed off to the host this long after a section
/// navigation closes the device.
pub const SCROLL_HANDOFF_DELAY: Duration = Duration::from_millis(500);
