//! Agencies reference-data page.

use dioxus::prelude::*;

use crate::app::api::{self, Agency};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout, TextField};

#[derive(serde::Serialize)]
struct AgencyCreateRequest {
    name: String,
    email: String,
    phone: String,
    address: String,
}

/// Only phone and address are editable after creation.
#[derive(serde::Serialize)]
struct AgencyUpdateRequest {
    phone: String,
    address: String,
}

/// Agencies CRUD page with an edit modal.
#[component]
pub fn Agencies() -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| "view".to_string());
    let mut error = use_signal(|| None::<String>);
    let mut filter = use_signal(String::new);

    // Create form
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut name_error = use_signal(|| false);

    // Edit modal
    let mut editing = use_signal(|| None::<Agency>);
    let mut edit_phone = use_signal(String::new);
    let mut edit_address = use_signal(String::new);

    let mut agencies = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<Agency>>("/api/agencies", token.as_deref())
                .await
                .ok()
        }
    });

    let create = move |_| {
        let name_value = name().trim().to_string();
        name_error.set(name_value.is_empty());
        if name_value.is_empty() {
            return;
        }
        let token = auth.token();
        let req = AgencyCreateRequest {
            name: name_value,
            email: email(),
            phone: phone(),
            address: address(),
        };
        spawn(async move {
            match api::post_json_no_response("/api/agencies", token.as_deref(), &req).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    address.set(String::new());
                    tab.set("view".to_string());
                    agencies.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let save_edit = move |_| {
        let Some(agency) = editing() else { return };
        let token = auth.token();
        let req = AgencyUpdateRequest {
            phone: edit_phone(),
            address: edit_address(),
        };
        spawn(async move {
            let url = format!("/api/agencies/{}", agency.id);
            match api::patch_json::<_, Agency>(&url, token.as_deref(), &req).await {
                Ok(_) => {
                    editing.set(None);
                    agencies.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let mut remove = move |agency: Agency| {
        if !api::confirm(&format!("Delete agency \"{}\"?", agency.name)) {
            return;
        }
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/agencies/{}", agency.id);
            match api::delete(&url, token.as_deref()).await {
                Ok(()) => agencies.restart(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let needle = filter().to_lowercase();
    let list: Vec<Agency> = agencies
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .filter(|a| needle.is_empty() || a.name.to_lowercase().contains(&needle))
        .collect();

    rsx! {
        Layout {
            title: "Agencies".to_string(),
            active_path: "/dashboard/agencies".to_string(),

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            div { class: "flex gap-2 mb-4",
                button {
                    class: if tab() == "view" { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" },
                    onclick: move |_| tab.set("view".to_string()),
                    "View"
                }
                button {
                    class: if tab() == "create" { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" },
                    onclick: move |_| tab.set("create".to_string()),
                    "Create"
                }
            }

            if tab() == "view" {
                input {
                    class: "input w-64 mb-4",
                    placeholder: "Filter by name...",
                    value: "{filter}",
                    oninput: move |e| filter.set(e.value()),
                }
                div { class: "grid gap-2",
                    for agency in list {
                        div { key: "{agency.id}", class: "card p-4 flex items-center justify-between",
                            div {
                                p { class: "font-semibold", "{agency.name}" }
                                p { class: "text-sm text-muted",
                                    "{agency.phone.clone().unwrap_or_default()} {agency.address.clone().unwrap_or_default()}"
                                }
                            }
                            div { class: "flex gap-2",
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    onclick: {
                                        let agency = agency.clone();
                                        move |_| {
                                            edit_phone.set(agency.phone.clone().unwrap_or_default());
                                            edit_address.set(agency.address.clone().unwrap_or_default());
                                            editing.set(Some(agency.clone()));
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-ghost btn-sm text-error",
                                    onclick: {
                                        let agency = agency.clone();
                                        move |_| remove(agency.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "card p-6 max-w-md",
                    TextField {
                        label: "Agency name",
                        value: name(),
                        error: name_error(),
                        on_input: move |v| name.set(v),
                    }
                    TextField {
                        label: "Email",
                        value: email(),
                        input_type: "email",
                        on_input: move |v| email.set(v),
                    }
                    TextField {
                        label: "Phone",
                        value: phone(),
                        on_input: move |v| phone.set(v),
                    }
                    TextField {
                        label: "Address",
                        value: address(),
                        on_input: move |v| address.set(v),
                    }
                    button { class: "btn btn-primary mt-2", onclick: create, "Create agency" }
                }
            }

            // Edit modal
            if let Some(agency) = editing() {
                div { class: "fixed inset-0 bg-black/40 flex items-center justify-center",
                    div { class: "card p-6 w-96 bg-surface",
                        h3 { class: "text-lg font-semibold mb-3", "Edit {agency.name}" }
                        TextField {
                            label: "Phone",
                            value: edit_phone(),
                            on_input: move |v| edit_phone.set(v),
                        }
                        TextField {
                            label: "Address",
                            value: edit_address(),
                            on_input: move |v| edit_address.set(v),
                        }
                        div { class: "flex gap-2 mt-2",
                            button { class: "btn btn-primary", onclick: save_edit, "Save" }
                            button {
                                class: "btn btn-ghost",
                                onclick: move |_| editing.set(None),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
