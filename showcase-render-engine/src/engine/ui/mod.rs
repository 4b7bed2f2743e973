pub mod hero;
pub mod hud;
pub mod loading_screen;
pub mod nav_links;
