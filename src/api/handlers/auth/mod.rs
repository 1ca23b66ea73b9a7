//! Auth handlers and supporting modules.
//!
//! The flows mirror the passwordless model of the identity platform:
//!
//! - **sign-up / sign-in** request a one-time passcode email and hand the
//!   account id back to the frontend. Sign-up also creates the profile
//!   document on first contact; a passcode is sent on every attempt so a
//!   user retrying the form always receives a fresh code.
//! - **verify** exchanges the passcode for a session and sets the session
//!   cookie (`HttpOnly; SameSite=Strict; Secure`).
//! - **me / sign-out** resolve or tear down the session behind the cookie.
//!
//! Upstream failures are logged once with context and surfaced as HTTP
//! errors; sign-out is the exception and always clears the cookie and
//! redirects, even when the upstream deletion fails.

pub(crate) mod accounts;
pub(crate) mod session;
mod state;
pub(crate) mod types;
mod utils;

pub use state::{AuthConfig, AuthState};
