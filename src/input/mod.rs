//! Input loading
//! Reads the structured JSON documents produced by upstream extraction

pub mod manager;

pub use manager::InputManager;
