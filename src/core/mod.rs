// src/core/mod.rs

pub mod alphabet;
pub mod analysis;
pub mod converter;
pub mod engine;
pub mod nikud;
pub mod pronunciation;
pub mod types;
