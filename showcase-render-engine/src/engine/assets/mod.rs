pub mod bounds;
pub mod showcase_assets;
pub mod showcase_manifest;
