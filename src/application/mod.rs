/// Service traits for each API resource
pub mod interfaces;
/// Request and response models
pub mod models;
/// Service implementations
pub mod services;
