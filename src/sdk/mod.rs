pub mod command;
pub mod config;
pub mod format;
pub mod map;
pub mod navigation;
pub mod routing;
pub mod util;
pub mod view;
