/// Bearer token storage with optional on-disk persistence
pub mod store;

pub use store::TokenStore;
