//! Shared API DTOs for the strato edge-management cloud service.
//!
//! This crate defines the request/response contracts exchanged between the
//! cloud management service, its API consumers, and edges: cloud credential
//! profiles, log-collector configurations, log upload metadata, HTTP service
//! proxies, and per-tenant/user property bags. Almost everything here is
//! declarative; the one logic core is [`log_collector::validate_log_collector`],
//! which checks a proposed collector configuration against its cloud
//! credential and returns a normalized copy.
//!
//! Persistence, HTTP transport, and authorization live in the surrounding
//! services; this crate is a plain library with no I/O.

#![warn(missing_docs)]

pub mod base;
pub mod cloud_creds;
pub mod error;
pub mod log_collector;
pub mod log_entry;
pub mod props;
pub mod service_proxy;

pub use error::ValidationError;
pub use log_collector::validate_log_collector;
