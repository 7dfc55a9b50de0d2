pub mod catalogue;
pub mod config;
pub mod generate;
pub mod logging;
pub mod ui;
