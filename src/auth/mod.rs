//! Authentication collaborator.
//!
//! Warble does not manage credentials. The navigation shell only asks
//! whether someone is signed in and asks the collaborator to sign out.

/// Source of the signed-in signal
pub trait Authenticator {
    /// Whether a user is signed in
    fn is_authenticated(&self) -> bool;

    /// Sign the current user out
    fn logout(&mut self);
}

/// In-memory session for the running process
#[derive(Debug, Clone, Default)]
pub struct Session {
    handle: Option<String>,
}

impl Session {
    /// A session already signed in as `handle`
    pub fn signed_in(handle: &str) -> Self {
        Self {
            handle: Some(handle.to_string()),
        }
    }

    /// Sign in as `handle`
    pub fn login(&mut self, handle: &str) {
        tracing::info!(handle, "signed in");
        self.handle = Some(handle.to_string());
    }

    /// Handle of the signed-in user
    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }
}

impl Authenticator for Session {
    fn is_authenticated(&self) -> bool {
        self.handle.is_some()
    }

    fn logout(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::info!(handle, "signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_login_logout() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());

        session.login("me");
        assert!(session.is_authenticated());
        assert_eq!(session.handle(), Some("me"));

        session.logout();
        assert!(!session.is_authenticated());
        // Logging out twice is fine
        session.logout();
        assert!(session.handle().is_none());
    }
}
