//! EcoTrack client-side session layer
//!
//! The state container behind the EcoTrack frontend: a process-wide
//! session store mirroring authentication state, the route guard that
//! consumes it, and a typed client for the HTTP API. The store is an
//! explicit state object driven by pure transition functions, so ordering
//! and error-clearing guarantees are testable without any UI framework.

pub mod api;
pub mod guard;
pub mod session;

pub use api::{ApiClient, ApiClientError};
pub use guard::{decide, RouteDecision};
pub use session::{PersistedSession, SessionState, SessionStore, SessionUser};
