//! Request handlers.
//!
//! Each resource is served by a single `dispatch` function mounted on one
//! path for every method. It picks the operation from the HTTP method and
//! delegates to the corresponding repository in `museum_db`. OPTIONS never
//! reaches these handlers: the CORS layer answers it.

pub mod exhibits;
pub mod tours;
