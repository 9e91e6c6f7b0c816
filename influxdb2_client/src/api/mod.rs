//! InfluxDB v2.0 Client API
//!
//! Each module adds the operations of one resource family to
//! [`Client`](crate::Client).

pub mod authorization;
pub mod bucket;
pub mod dashboard;
pub mod health;
pub mod ready;
pub mod user;
