/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
