//! ECHO brokerage CRM core.
//!
//! The library hosts the two server-side components behind the ECHO listing
//! workspace: the marketing-copy template resolver and the agreement
//! lifecycle manager, together with the config, telemetry, and error plumbing
//! shared by the API service.

pub mod config;
pub mod error;
pub mod listings;
pub mod telemetry;
