use crate::client::store::Session;

/// Session snapshot as seen by the view layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub session: Session,
    /// Whether start-up restoration of the persisted token has finished. Guards wait for this
    /// before redirecting so a reload on a protected page does not bounce through login.
    pub restored: bool,
}
