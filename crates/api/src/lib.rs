//! Museum API server library.
//!
//! Exposes the building blocks (config, state, error handling, router,
//! handlers, invocation adapter) so the binaries and the integration tests
//! share the exact same request path.

pub mod config;
pub mod error;
pub mod handlers;
pub mod invocation;
pub mod request;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
