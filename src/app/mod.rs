//! Dioxus application root.
//!
//! The router owns page dispatch; everything except the login screen sits
//! behind [`RequireSession`], which waits for session restore, bounces
//! unauthenticated visitors to the login page, and bounces authenticated
//! visitors off paths their role is not allowed to see.

pub mod api;
pub mod auth;
pub mod candidate;
pub mod chat;
pub mod components;
pub mod pages;
pub mod report;
pub mod routing;
pub mod seed;
pub mod session;
pub mod storage;

use dioxus::prelude::*;

use auth::{use_auth, use_auth_provider};
use chat::use_chat_provider;
use pages::{
    Agencies, Appointments, CandidateForm, Cities, Countries, CreateUser, Dashboard,
    HospitalDashboard, Hospitals, Login, MedicalReports, Payments, Positions, RegisterAdmin,
    Users,
};
use routing::landing_path;

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(RequireSession)]
        #[route("/")]
        Home {},
        #[route("/form")]
        CandidateForm {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/users")]
        Users {},
        #[route("/dashboard/create-user")]
        CreateUser {},
        #[route("/dashboard/register-admin")]
        RegisterAdmin {},
        #[route("/dashboard/countries")]
        Countries {},
        #[route("/dashboard/cities")]
        Cities {},
        #[route("/dashboard/agencies")]
        Agencies {},
        #[route("/dashboard/hospitals")]
        Hospitals {},
        #[route("/dashboard/positions")]
        Positions {},
        #[route("/dashboard/appointments")]
        Appointments {},
        #[route("/dashboard/payments")]
        Payments {},
        #[route("/hospital-dashboard")]
        HospitalDashboard {},
        #[route("/medical-reports?:passport&:mode")]
        MedicalReports { passport: String, mode: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Application entry point, launched for both web and server renders.
#[component]
pub fn App() -> Element {
    use_auth_provider();
    use_chat_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Sends signed-in users to their role's landing page.
#[component]
fn Home() -> Element {
    let auth = use_auth();

    use_effect(move || {
        if auth.is_restored() {
            navigator().replace(landing_path(auth.role()));
        }
    });

    rsx! {
        div { class: "p-8 text-muted", "Loading..." }
    }
}

/// Catch-all; unknown paths land on the role redirect.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    use_effect(move || {
        navigator().replace("/");
    });

    rsx! {
        div { class: "p-8 text-muted", "Redirecting..." }
    }
}

/// Session guard layout wrapping every page except login.
///
/// Rendering is deferred until the stored session has been restored so a
/// hard refresh does not flash the login page at a signed-in user.
#[component]
fn RequireSession() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    use_effect(move || {
        if !auth.is_restored() {
            return;
        }
        if !auth.is_authenticated() {
            navigator().replace("/login");
            return;
        }
        // Strip the query before the role check; role-less sessions are
        // gated too (they follow the admin path set)
        let role = auth.role();
        let current = route.to_string();
        let bare = current.split('?').next().unwrap_or(&current);
        if !routing::is_allowed(role, bare) {
            navigator().replace(landing_path(role));
        }
    });

    if !auth.is_restored() || !auth.is_authenticated() {
        return rsx! {
            div { class: "p-8 text-muted", "Loading..." }
        };
    }

    rsx! {
        Outlet::<Route> {}
    }
}
