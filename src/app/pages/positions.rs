//! Job positions reference-data page.

use dioxus::prelude::*;

use crate::app::api::{self, Position};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout, TextField};

#[derive(serde::Serialize)]
struct PositionRequest {
    name: String,
}

/// Positions CRUD page.
#[component]
pub fn Positions() -> Element {
    let auth = use_auth();
    let mut error = use_signal(|| None::<String>);
    let mut new_name = use_signal(String::new);
    let mut new_name_error = use_signal(|| false);

    let mut editing = use_signal(|| None::<Position>);
    let mut edit_name = use_signal(String::new);

    let mut positions = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<Position>>("/api/locations/positions", token.as_deref())
                .await
                .ok()
        }
    });

    let create = move |_| {
        let name = new_name().trim().to_string();
        new_name_error.set(name.is_empty());
        if name.is_empty() {
            return;
        }
        let token = auth.token();
        spawn(async move {
            let req = PositionRequest { name };
            match api::post_json_no_response("/api/locations/positions", token.as_deref(), &req)
                .await
            {
                Ok(()) => {
                    new_name.set(String::new());
                    positions.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let save_edit = move |_| {
        let Some(position) = editing() else { return };
        let token = auth.token();
        let req = PositionRequest { name: edit_name() };
        spawn(async move {
            let url = format!("/api/locations/positions/{}", position.id);
            match api::patch_json::<_, Position>(&url, token.as_deref(), &req).await {
                Ok(_) => {
                    editing.set(None);
                    positions.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let mut remove = move |position: Position| {
        if !api::confirm(&format!("Delete position \"{}\"?", position.name)) {
            return;
        }
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/locations/positions/{}", position.id);
            match api::delete(&url, token.as_deref()).await {
                Ok(()) => positions.restart(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let list = positions.read().clone().flatten().unwrap_or_default();

    rsx! {
        Layout {
            title: "Positions".to_string(),
            active_path: "/dashboard/positions".to_string(),

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            div { class: "card p-6 max-w-md mb-6",
                TextField {
                    label: "New position",
                    value: new_name(),
                    error: new_name_error(),
                    placeholder: "e.g. Electrician",
                    on_input: move |v| new_name.set(v),
                }
                button { class: "btn btn-primary mt-2", onclick: create, "Add position" }
            }

            div { class: "grid gap-2 max-w-xl",
                for position in list {
                    div { key: "{position.id}", class: "card p-3 flex items-center justify-between",
                        span { "{position.name}" }
                        div { class: "flex gap-2",
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: {
                                    let position = position.clone();
                                    move |_| {
                                        edit_name.set(position.name.clone());
                                        editing.set(Some(position.clone()));
                                    }
                                },
                                "Edit"
                            }
                            button {
                                class: "btn btn-ghost btn-sm text-error",
                                onclick: {
                                    let position = position.clone();
                                    move |_| remove(position.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }

            if let Some(position) = editing() {
                div { class: "fixed inset-0 bg-black/40 flex items-center justify-center",
                    div { class: "card p-6 w-96 bg-surface",
                        h3 { class: "text-lg font-semibold mb-3", "Edit {position.name}" }
                        TextField {
                            label: "Name",
                            value: edit_name(),
                            on_input: move |v| edit_name.set(v),
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
