pub mod agent;
pub mod app;
pub mod config;
pub mod log;
pub mod ui;
