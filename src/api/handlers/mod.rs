// src/api/handlers/mod.rs
pub mod generator;
pub mod stats;
