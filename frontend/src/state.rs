use std::rc::Rc;

use yew::Reducible;

use crate::identity::IdentitySnapshot;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }
}

/// State of the login/signup modal. Lives for the whole page visit, so it
/// outlasts closing and reopening the modal.
///
/// The mode only picks which form is shown; the identity survives mode
/// switches and is dropped only by an explicit sign-out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthPanel {
    pub mode: AuthMode,
    pub identity: Option<IdentitySnapshot>,
}

impl AuthPanel {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            identity: None,
        }
    }

    pub fn with_mode(&self, mode: AuthMode) -> Self {
        Self {
            mode,
            identity: self.identity.clone(),
        }
    }

    pub fn signed_in(&self, identity: IdentitySnapshot) -> Self {
        Self {
            mode: self.mode,
            identity: Some(identity),
        }
    }

    pub fn signed_out(&self) -> Self {
        Self::new(self.mode)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    SelectMode(AuthMode),
    SignedIn(IdentitySnapshot),
    SignedOut,
}

impl Reducible for AuthPanel {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            AuthAction::SelectMode(mode) if mode == self.mode => return self,
            AuthAction::SelectMode(mode) => self.with_mode(mode),
            AuthAction::SignedIn(identity) => self.signed_in(identity),
            AuthAction::SignedOut => self.signed_out(),
        };
        Rc::new(next)
    }
}
