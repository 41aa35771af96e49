//! User accounts listing page.

use dioxus::prelude::*;

use crate::app::api::{self, AccountUser};
use crate::app::auth::use_auth;
use crate::app::components::{Layout, SelectField};

/// Account list filtered by role server-side.
#[component]
pub fn Users() -> Element {
    let auth = use_auth();
    let mut role_filter = use_signal(String::new);
    let mut search = use_signal(String::new);

    let users = use_resource(move || {
        let token = auth.token();
        let role = role_filter();
        async move {
            let url = if role.is_empty() {
                "/api/auth/users".to_string()
            } else {
                format!("/api/auth/users?role={}", urlencoding::encode(&role))
            };
            api::get_json::<Vec<AccountUser>>(&url, token.as_deref())
                .await
                .ok()
        }
    });

    let needle = search().to_lowercase();
    let list: Vec<AccountUser> = users
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .filter(|u| {
            needle.is_empty()
                || u.email.to_lowercase().contains(&needle)
                || u.username
                    .as_deref()
                    .map(|n| n.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect();

    rsx! {
        Layout {
            title: "Users".to_string(),
            active_path: "/dashboard/users".to_string(),

            div { class: "flex items-end gap-4 mb-4",
                div { class: "w-48",
                    SelectField {
                        label: "Role",
                        value: role_filter(),
                        options: vec![
                            ("ADMIN".to_string(), "Administrator".to_string()),
                            ("PI".to_string(), "Principal Investigator".to_string()),
                            ("AGENCY".to_string(), "Agency".to_string()),
                            ("HOSPITAL".to_string(), "Hospital".to_string()),
                        ],
                        on_change: move |v| role_filter.set(v),
                    }
                }
                input {
                    class: "input w-64 mb-3",
                    placeholder: "Search by name or email...",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
                a { href: "/dashboard/create-user", class: "btn btn-primary btn-sm mb-3", "Create user" }
                a { href: "/dashboard/register-admin", class: "btn btn-ghost btn-sm mb-3", "Register admin" }
            }

            table { class: "w-full",
                thead {
                    tr {
                        th { class: "text-left p-2", "Username" }
                        th { class: "text-left p-2", "Email" }
                        th { class: "text-left p-2", "Role" }
                        th { class: "text-left p-2", "Phone" }
                    }
                }
                tbody {
                    for user in list {
                        tr { key: "{user.id}", class: "border-t",
                            td { class: "p-2", "{user.username.clone().unwrap_or_default()}" }
                            td { class: "p-2", "{user.email}" }
                            td { class: "p-2",
                                span { class: "badge", "{user.role}" }
                            }
                            td { class: "p-2", "{user.phone.clone().unwrap_or_default()}" }
                        }
                    }
                }
            }
        }
    }
}
