mod health_check;
pub mod profile;

pub use health_check::*;
