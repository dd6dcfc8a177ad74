// src/ui/widgets/mod.rs

pub mod footer;
pub mod header;
pub mod input;
pub mod results;
pub mod usage;
