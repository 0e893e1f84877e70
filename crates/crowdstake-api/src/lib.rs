//! crowdstake-api: HTTP API layer for crowdstake
//!
//! Exposes the page's inputs and a rendered view so any frontend can drive the
//! simulation, plus the driver that ties the simulated clock to wall time.

pub mod driver;
pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use driver::ClockDriver;
pub use server::*;
pub use state::{ApiStateError, AppState};
