//! HTTP API module for the settlement calculation engine.
//!
//! Exposes the calculators to the petition drafting pipeline over a single
//! REST endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
