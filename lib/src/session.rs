// lib/src/session.rs

use log::{debug, info};

use models::{User, UserRole};

use crate::navigation::Page;

/// Who is signed in. Passed explicitly to whatever needs an access decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    pub fn new(current_user: Option<User>) -> Self {
        Session { current_user }
    }

    pub fn anonymous() -> Self {
        Session::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn set_current_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => info!("Session user is now {} ({})", u.name, u.role),
            None => info!("Session signed out"),
        }
        self.current_user = user;
    }

    pub fn sign_out(&mut self) {
        self.set_current_user(None);
    }

    /// Nobody signed in has no access; administrators have all of it.
    /// Otherwise the user's role must equal `required`, when one is given.
    pub fn has_access(&self, required: Option<UserRole>) -> bool {
        let Some(user) = &self.current_user else {
            return false;
        };
        if user.role == UserRole::Administrator {
            return true;
        }
        match required {
            None => true,
            Some(role) => user.role == role,
        }
    }

    pub fn can_open(&self, page: Page) -> bool {
        let allowed = page.is_public() || self.has_access(page.required_role());
        debug!("access to {:?}: {}", page, allowed);
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_data::demo_user;

    fn admin() -> User {
        User {
            role: UserRole::Administrator,
            ..demo_user()
        }
    }

    #[test]
    fn nobody_signed_in_has_no_access() {
        let session = Session::anonymous();
        assert!(!session.has_access(None));
        assert!(!session.has_access(Some(UserRole::Doctor)));
    }

    #[test]
    fn administrator_passes_every_check() {
        let session = Session::new(Some(admin()));
        assert!(session.has_access(None));
        assert!(session.has_access(Some(UserRole::Doctor)));
        assert!(session.can_open(Page::UserRoles));
    }

    #[test]
    fn doctor_needs_a_matching_role() {
        let session = Session::new(Some(demo_user()));
        assert!(session.has_access(None));
        assert!(session.has_access(Some(UserRole::Doctor)));
        assert!(!session.has_access(Some(UserRole::Administrator)));
        assert!(session.can_open(Page::Patients));
        assert!(!session.can_open(Page::Permissions));
    }

    #[test]
    fn signing_out_revokes_access_but_not_public_pages() {
        let mut session = Session::new(Some(demo_user()));
        session.sign_out();
        assert!(session.current_user().is_none());
        assert!(!session.can_open(Page::Dashboard));
        assert!(session.can_open(Page::Login));
    }
}
