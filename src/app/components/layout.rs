//! Page shell: sidebar, topbar and the admin chat overlay.

use dioxus::prelude::*;

use super::chat_panel::ChatPanel;
use super::nav::Sidebar;
use crate::app::auth::use_auth;
use crate::app::chat::{refresh_chat, use_chat};
use crate::app::session::Role;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Path of the page, used for sidebar highlighting
    pub active_path: String,
    /// Page content
    pub children: Element,
}

/// Main layout wrapping all authenticated pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let auth = use_auth();
    let chat = use_chat();

    let version = env!("CARGO_PKG_VERSION");
    let role = auth.role();
    let user = auth.user();
    let full_title = format!("{} - MCM Console", props.title);

    let identity = user
        .as_ref()
        .map(|u| u.username.clone().unwrap_or_else(|| u.email.clone()))
        .unwrap_or_default();
    let role_label = role.map(|r| r.label()).unwrap_or("");
    let chat_available = matches!(role, Some(Role::Admin) | Some(Role::Pi));

    let on_logout = move |_| {
        auth.logout();
        navigator().push("/login");
    };

    let on_chat_toggle = move |_| {
        if !chat.is_open() {
            refresh_chat(chat, auth.token());
        }
        chat.toggle();
    };

    rsx! {
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: asset!("/public/mcm.css") }

        div { class: "flex min-h-screen",
            Sidebar { role: role, active_path: props.active_path.clone() }

            div { class: "flex-1 flex flex-col",
                header { class: "flex items-center justify-between border-b px-6 py-3",
                    h2 { class: "text-lg font-semibold", "{props.title}" }
                    div { class: "flex items-center gap-3",
                        if chat_available {
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: on_chat_toggle,
                                "Messages"
                            }
                        }
                        span { class: "text-sm text-muted", "{identity}" }
                        if !role_label.is_empty() {
                            span { class: "badge badge-primary", "{role_label}" }
                        }
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: on_logout,
                            "Log out"
                        }
                    }
                }

                main { class: "flex-1 px-6 py-4",
                    {props.children}
                }

                footer { class: "px-6 py-3 text-center",
                    small { class: "text-muted", "MCM Console v{version}" }
                }
            }

            if chat_available && chat.is_open() {
                ChatPanel {}
            }
        }
    }
}
