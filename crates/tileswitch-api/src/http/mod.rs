//! HTTP interface.

pub mod handlers;
pub mod routes;

pub(crate) mod monitoring;
