use crate::SessionSignal;

/// Where the landing page's call-to-action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    AuthenticatedEntry,
    SignInEntry,
}

impl Destination {
    pub fn for_session(session: SessionSignal) -> Self {
        match session {
            SessionSignal::Present => Destination::AuthenticatedEntry,
            SessionSignal::Absent => Destination::SignInEntry,
        }
    }

    /// Path the platform router must serve for this destination.
    pub fn path(self) -> &'static str {
        match self {
            Destination::AuthenticatedEntry => "/play",
            Destination::SignInEntry => "/signin",
        }
    }
}
