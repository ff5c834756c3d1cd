pub mod ipinfo;
pub mod payload;

// Re-export commonly used types
pub use ipinfo::IpInfo;
pub use payload::{LocateParams, LocatePayload, NOT_FOUND_MESSAGE};
