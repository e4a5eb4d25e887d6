//! Networking modules for the gateway's HTTP endpoints.

pub mod api;
