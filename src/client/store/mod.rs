//! Process-wide client state.
//!
//! [`SessionStore`] is the single source of truth for who is logged in. Views do not hold it
//! as an ambient global: the app root creates one and provides it through context, mirroring
//! its [`Session`] into a [`SessionState`] signal that guards and pages read.

pub mod session;
pub mod state;

pub use session::{Bearer, Session, SessionStore};
pub use state::SessionState;
