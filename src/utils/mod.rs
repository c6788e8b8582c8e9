// Shared utilities

pub mod cancel;
pub mod constants;
pub mod jwt;
pub mod pagination;
pub mod storage;

pub use cancel::CancelToken;
pub use constants::*;
pub use storage::*;
