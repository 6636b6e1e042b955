pub mod application;
pub mod backend;
pub mod domain;
pub mod loader;
pub mod markup;
pub mod page;
pub mod routes;

pub use wire_shared::{error_chain_fmt, settings, telemetry};
