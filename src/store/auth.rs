use chrono::{Local, NaiveDate};

use crate::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

/// Mock session holder. Credentials are accepted as given; there is nothing
/// to check them against.
#[derive(Debug, Default)]
pub struct AuthStore {
    session: Option<User>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        if self.session.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Install a session for `email`. Any existing session is replaced.
    pub fn login(&mut self, email: &str, _password: &str) -> &User {
        let name = User::name_from_email(email);
        self.install(User::new(name, email.to_string(), today()))
    }

    pub fn signup(&mut self, name: &str, email: &str, _password: &str) -> &User {
        self.install(User::new(name.to_string(), email.to_string(), today()))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.take() {
            tracing::info!(email = %user.email, "session ended");
        }
    }

    /// Edit the signed-in user's name and email. `false` when nobody is signed in.
    pub fn update_profile(&mut self, name: &str, email: &str) -> bool {
        match self.session.as_mut() {
            Some(user) => {
                user.name = name.to_string();
                user.email = email.to_string();
                tracing::info!(email = %user.email, "profile updated");
                true
            }
            None => false,
        }
    }

    fn install(&mut self, user: User) -> &User {
        tracing::info!(email = %user.email, name = %user.name, "session started");
        self.session.insert(user)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
