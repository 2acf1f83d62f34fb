//! Configuration and request/response models shared by both functions.

pub mod config;
pub mod models;
