use crate::errors::AuthError;
use crate::models::session::Session;

/// Source of truth for who may log in.
///
/// `resolve` returns the username to attach to the session, or `None` when
/// the identifier is not allowed.
pub trait AllowList {
    fn resolve(&self, identifier: &str) -> Option<String>;
}

impl<F> AllowList for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, identifier: &str) -> Option<String> {
        self(identifier)
    }
}

/// Allow-list read from the configuration file.
#[derive(Debug, Clone)]
pub struct StaticAllowList {
    entries: Vec<String>,
    case_sensitive: bool,
}

impl StaticAllowList {
    pub fn new(entries: Vec<String>, case_sensitive: bool) -> Self {
        Self {
            entries,
            case_sensitive,
        }
    }
}

impl AllowList for StaticAllowList {
    fn resolve(&self, identifier: &str) -> Option<String> {
        if self.case_sensitive {
            return self
                .entries
                .iter()
                .find(|e| e.as_str() == identifier)
                .cloned();
        }

        // Case-insensitive match attributes rows to the configured spelling.
        let wanted = identifier.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.to_lowercase() == wanted)
            .cloned()
    }
}

/// Login gate in front of the job form.
pub struct AuthGate<A: AllowList> {
    allow_list: A,
}

impl<A: AllowList> AuthGate<A> {
    pub fn new(allow_list: A) -> Self {
        Self { allow_list }
    }

    /// Check `identifier` against the allow-list.
    ///
    /// No attempt counting: callers may retry as often as they like.
    pub fn login(&self, identifier: &str) -> Result<Session, AuthError> {
        match self.allow_list.resolve(identifier) {
            Some(username) => {
                log::info!("login accepted for '{}'", username);
                Ok(Session::authenticated(username))
            }
            None => {
                log::info!("login rejected");
                Err(AuthError::InvalidCredential)
            }
        }
    }

    /// Replace `session` with the outcome of a new login attempt.
    ///
    /// A failed attempt leaves the session anonymous, even if it was
    /// authenticated before; a successful one never merges with the old state.
    pub fn attempt(&self, session: &mut Session, identifier: &str) -> Result<(), AuthError> {
        match self.login(identifier) {
            Ok(next) => {
                *session = next;
                Ok(())
            }
            Err(e) => {
                *session = Session::anonymous();
                Err(e)
            }
        }
    }
}
