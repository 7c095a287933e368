// Adapters layer: concrete implementations for external systems (storage, http, randomness).

pub mod http;
pub mod storage;
pub mod tokens;
