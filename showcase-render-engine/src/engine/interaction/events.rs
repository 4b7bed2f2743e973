use bevy::prelude::*;

/// Where a device request came from, for logging and conditional UI.
#[derive(Debug, Clone, Copy)]
pub enum RequestSource {
    Pointer,
    Keyboard,
    Rpc,
    Navigation,
}

/// Ask the sequencer to start the opening tween. Dropped unless the device
/// is idle, closed, loaded and the click gate has re-armed.
#[derive(Event)]
pub struct OpenRequested {
    pub source: RequestSource,
}

/// Ask the sequencer to start the closing tween. Dropped unless the device
/// is idle and open.
#[derive(Event)]
pub struct CloseRequested {
    pub source: RequestSource,
}

/// An open trigger was accepted. Mirrors the page-facing `device_opened`
/// notification.
#[derive(Event)]
pub struct DeviceOpened {
    pub source: RequestSource,
}

/// A closing tween began; auxiliary UI hides immediately on this.
#[derive(Event)]
pub struct CloseStarted {
    pub source: RequestSource,
}

/// The closing tween reached the closed position.
#[derive(Event)]
pub struct DeviceClosed;
