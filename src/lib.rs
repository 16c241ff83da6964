//! RentR Mail — notification dispatch relay.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod mailer;
pub mod message;
pub mod notify;
