//! Input processing module
//! Handles request file detection and loading

pub mod file_detector;
pub mod manager;

pub use manager::InputManager;
