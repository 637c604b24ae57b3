pub mod main_menu;

pub use main_menu::MainMenuItem;
