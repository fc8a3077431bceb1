//! Session authentication for Clipstream
//!
//! Issues and verifies signed, time-bound session tokens, decides role- and
//! ownership-based access, and provides axum extractors that work with any
//! domain state implementing `FromRef<S>` for `TokenAuthority`.

mod authority;
mod claims;
mod clock;
mod config;
mod error;
mod extractors;
mod jwt;
mod policy;
mod types;

pub use authority::TokenAuthority;
pub use claims::{IdentityClaim, SessionPrincipal};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{AuthUser, CreatorUser};
pub use policy::{authorize, require, RoleRequirement};
pub use types::Role;
