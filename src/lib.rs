// src/lib.rs

pub mod app;
pub mod config;
pub mod controller;
pub mod core;
pub mod logging;
pub mod ui;
