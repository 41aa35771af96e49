//! Role-based route gating.
//!
//! Landing path, permitted paths and the sidebar menu are all pure functions
//! of the session role so the policy lives in one place instead of being
//! scattered through page components.

use crate::app::session::Role;

/// Where `/` resolves for a given role. `None` means no role on the session
/// (still authenticated; lands on the dashboard).
pub fn landing_path(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Agency) => "/form",
        Some(Role::Hospital) => "/medical-reports",
        Some(Role::Admin) | Some(Role::Pi) | None => "/dashboard",
    }
}

/// Whether a role may visit a path. Paths not listed here are handled by the
/// not-found redirect before gating applies.
pub fn is_allowed(role: Option<Role>, path: &str) -> bool {
    match role {
        Some(Role::Admin) | Some(Role::Pi) | None => {
            path == "/form" || path == "/medical-reports" || path.starts_with("/dashboard")
        }
        Some(Role::Agency) => path == "/form",
        Some(Role::Hospital) => {
            path == "/medical-reports" || path == "/hospital-dashboard" || path == "/form"
        }
    }
}

/// A sidebar menu entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
}

const ADMIN_MENU: &[MenuEntry] = &[
    MenuEntry { label: "Dashboard", path: "/dashboard" },
    MenuEntry { label: "Users", path: "/dashboard/users" },
    MenuEntry { label: "Countries", path: "/dashboard/countries" },
    MenuEntry { label: "Cities", path: "/dashboard/cities" },
    MenuEntry { label: "Agencies", path: "/dashboard/agencies" },
    MenuEntry { label: "Hospitals", path: "/dashboard/hospitals" },
    MenuEntry { label: "Positions", path: "/dashboard/positions" },
    MenuEntry { label: "Appointments", path: "/dashboard/appointments" },
    MenuEntry { label: "Payments", path: "/dashboard/payments" },
    MenuEntry { label: "Candidate Form", path: "/form" },
    MenuEntry { label: "Medical Reports", path: "/medical-reports" },
];

const AGENCY_MENU: &[MenuEntry] = &[MenuEntry { label: "Candidate Form", path: "/form" }];

const HOSPITAL_MENU: &[MenuEntry] = &[
    MenuEntry { label: "Dashboard", path: "/hospital-dashboard" },
    MenuEntry { label: "Medical Reports", path: "/medical-reports" },
];

/// Sidebar entries for a role
pub fn menu(role: Option<Role>) -> &'static [MenuEntry] {
    match role {
        Some(Role::Admin) | Some(Role::Pi) | None => ADMIN_MENU,
        Some(Role::Agency) => AGENCY_MENU,
        Some(Role::Hospital) => HOSPITAL_MENU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_by_role() {
        assert_eq!(landing_path(Some(Role::Agency)), "/form");
        assert_eq!(landing_path(Some(Role::Hospital)), "/medical-reports");
        assert_eq!(landing_path(Some(Role::Admin)), "/dashboard");
        assert_eq!(landing_path(Some(Role::Pi)), "/dashboard");
        assert_eq!(landing_path(None), "/dashboard");
    }

    #[test]
    fn agency_is_confined_to_the_form() {
        assert!(is_allowed(Some(Role::Agency), "/form"));
        assert!(!is_allowed(Some(Role::Agency), "/dashboard"));
        assert!(!is_allowed(Some(Role::Agency), "/dashboard/payments"));
        assert!(!is_allowed(Some(Role::Agency), "/medical-reports"));
    }

    #[test]
    fn hospital_paths() {
        assert!(is_allowed(Some(Role::Hospital), "/medical-reports"));
        assert!(is_allowed(Some(Role::Hospital), "/hospital-dashboard"));
        assert!(!is_allowed(Some(Role::Hospital), "/dashboard/users"));
    }

    #[test]
    fn admin_covers_dashboard_tree() {
        for path in ["/dashboard", "/dashboard/countries", "/dashboard/payments"] {
            assert!(is_allowed(Some(Role::Admin), path), "{path}");
            assert!(is_allowed(Some(Role::Pi), path), "{path}");
        }
        assert!(!is_allowed(Some(Role::Admin), "/hospital-dashboard"));
    }

    #[test]
    fn roleless_sessions_are_gated_like_admins() {
        assert!(is_allowed(None, "/dashboard"));
        assert!(is_allowed(None, "/form"));
        assert!(!is_allowed(None, "/hospital-dashboard"));
        assert_eq!(landing_path(None), "/dashboard");
    }

    #[test]
    fn menus_match_roles() {
        assert_eq!(menu(Some(Role::Agency)).len(), 1);
        assert_eq!(menu(Some(Role::Hospital)).len(), 2);
        assert!(menu(Some(Role::Admin))
            .iter()
            .any(|e| e.path == "/dashboard/positions"));
        // registered exactly once
        let positions = menu(Some(Role::Admin))
            .iter()
            .filter(|e| e.path == "/dashboard/positions")
            .count();
        assert_eq!(positions, 1);
    }
}
