//! Application services for session handling.

mod session;

pub use session::{FormValidationError, SessionError, SessionService};
