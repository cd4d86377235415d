//! MLB stats API integration: live-feed HTTP client and wire types.

pub mod http;
pub mod types;
