/// Login state of the current user interaction.
///
/// The username is only present for an authenticated session; the flag is
/// derived from it, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { username: None }
    }

    pub(crate) fn authenticated(username: String) -> Self {
        Self {
            username: Some(username),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}
