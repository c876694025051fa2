pub mod commands;
pub mod icon;
pub mod logging;
pub mod utils;

pub use icon::{encode, IconError, ICON_FILENAME};
