pub mod events;
pub mod picking;
pub mod sequencer;
pub mod systems;
