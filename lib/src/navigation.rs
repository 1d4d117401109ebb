// lib/src/navigation.rs

//! Route table and sidebar of the application shell.

use std::fmt;

use serde::{Deserialize, Serialize};

use models::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Login,
    ForgotPassword,
    Dashboard,
    Patients,
    Doctors,
    Appointments,
    Records,
    Analytics,
    Pharmacy,
    Settings,
    UserRoles,
    Permissions,
    UserActivity,
    NotFound,
}

impl Page {
    /// Every routable page, in route table order. `NotFound` has no path.
    pub const ROUTED: [Page; 13] = [
        Page::Login,
        Page::ForgotPassword,
        Page::Dashboard,
        Page::Patients,
        Page::Doctors,
        Page::Appointments,
        Page::Records,
        Page::Analytics,
        Page::Pharmacy,
        Page::Settings,
        Page::UserRoles,
        Page::Permissions,
        Page::UserActivity,
    ];

    pub fn path(&self) -> Option<&'static str> {
        let path = match self {
            Page::Login => "/",
            Page::ForgotPassword => "/forgot-password",
            Page::Dashboard => "/dashboard",
            Page::Patients => "/patients",
            Page::Doctors => "/doctors",
            Page::Appointments => "/appointments",
            Page::Records => "/records",
            Page::Analytics => "/analytics",
            Page::Pharmacy => "/pharmacy",
            Page::Settings => "/settings",
            Page::UserRoles => "/user-roles",
            Page::Permissions => "/permissions",
            Page::UserActivity => "/user-activity",
            Page::NotFound => return None,
        };
        Some(path)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::ForgotPassword => "Forgot Password",
            Page::Dashboard => "Dashboard",
            Page::Patients => "Patients",
            Page::Doctors => "Doctors",
            Page::Appointments => "Appointments",
            Page::Records => "Medical Records",
            Page::Analytics => "Analytics",
            Page::Pharmacy => "Pharmacy",
            Page::Settings => "Settings",
            Page::UserRoles => "User Roles",
            Page::Permissions => "Permission Settings",
            Page::UserActivity => "User Activity",
            Page::NotFound => "Page Not Found",
        }
    }

    /// Whether the page renders inside the sidebar layout.
    pub fn uses_layout(&self) -> bool {
        !matches!(self, Page::Login | Page::ForgotPassword)
    }

    /// Role needed to open the page, beyond being signed in.
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Page::UserRoles | Page::Permissions | Page::UserActivity => Some(UserRole::Administrator),
            _ => None,
        }
    }

    /// Login and password recovery are reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Page::Login | Page::ForgotPassword | Page::NotFound)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Maps a path to its page. Unknown paths resolve to [`Page::NotFound`].
pub fn resolve(path: &str) -> Page {
    Page::ROUTED
        .iter()
        .copied()
        .find(|page| page.path() == Some(path))
        .unwrap_or(Page::NotFound)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub page: Page,
}

pub const SIDEBAR: [NavItem; 8] = [
    NavItem { title: "Dashboard", url: "/dashboard", page: Page::Dashboard },
    NavItem { title: "Patients", url: "/patients", page: Page::Patients },
    NavItem { title: "Doctors", url: "/doctors", page: Page::Doctors },
    NavItem { title: "Appointments", url: "/appointments", page: Page::Appointments },
    NavItem { title: "Medical Records", url: "/records", page: Page::Records },
    NavItem { title: "Analytics", url: "/analytics", page: Page::Analytics },
    NavItem { title: "Pharmacy", url: "/pharmacy", page: Page::Pharmacy },
    NavItem { title: "Settings", url: "/settings", page: Page::Settings },
];

pub fn sidebar() -> &'static [NavItem] {
    &SIDEBAR
}

/// A sidebar entry is highlighted only on an exact path match.
pub fn is_active(current_path: &str, item: &NavItem) -> bool {
    current_path == item.url
}
