use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub scene_spawned: bool,
    pub textures_loaded: bool,
    pub parts_bound: bool,
    pub model_placed: bool,
    pub load_failed: bool,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.manifest_loaded
            && self.scene_spawned
            && self.textures_loaded
            && self.parts_bound
            && self.model_placed
    }
}
