// src/models/mod.rs

pub mod pursuer;
pub mod target;
