//! Session and role authority for the staff/admin console.

use serde::{Deserialize, Serialize};

/// Role of an authenticated console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Returns the role name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
        }
    }

    /// The home route for this role, used as the redirect target when a
    /// user lands on a view gated for the other role.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Staff => "/staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated identity. Created on login, destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The role granted at login.
    pub role: Role,

    /// Display name of the signed-in user.
    pub name: String,
}

/// Outcome of an authorization check against a gated view.
///
/// The routing layer performs the redirect each variant implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The session role matches; render the view.
    Authorized,

    /// No session; redirect to login.
    Unauthenticated,

    /// A session exists but for the other role; redirect to its home.
    WrongRole {
        /// Home route of the role the session actually holds.
        home: Role,
    },
}

/// Holds the current session, if any, and answers authorization queries.
///
/// One reusable predicate consumed by every gated entry point, rather than
/// a per-view role check. The state machine is `LoggedOut` plus one
/// authenticated state per role; the only transitions are `login` and
/// `logout`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionAuthority {
    session: Option<Session>,
}

impl SessionAuthority {
    /// Creates a logged-out authority.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs a user in, replacing any existing session.
    ///
    /// Always succeeds; credential verification is not in scope for this
    /// core.
    pub fn login(&mut self, role: Role, name: impl Into<String>) {
        let name = name.into();
        tracing::info!(role = %role, user = %name, "session opened");
        self.session = Some(Session { role, name });
    }

    /// Signs the current user out unconditionally.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(role = %session.role, user = %session.name, "session closed");
        }
    }

    /// Checks whether the current session may enter a view gated for
    /// `required`. Pure, idempotent, and side-effect free.
    pub fn authorize(&self, required: Role) -> Access {
        match &self.session {
            None => Access::Unauthenticated,
            Some(session) if session.role == required => Access::Authorized,
            Some(session) => Access::WrongRole { home: session.role },
        }
    }

    /// Returns the current session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns true if a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
