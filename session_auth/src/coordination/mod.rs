//! Authentication coordination module
//!
//! High-level register/login/logout flows that tie the credential hasher,
//! the user store and the session manager together. Handlers in an HTTP layer
//! are expected to call these rather than the lower modules directly.

mod errors;
mod user;

pub use errors::CoordinationError;
pub use user::{SignedIn, current_user, login_user, logout_user, register_user};
