//! Administrator registration page.

use dioxus::prelude::*;

use crate::app::api::{self, RegisterRequest};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout, TextField};

/// Register another ADMIN account via `/auth/register`.
#[component]
pub fn RegisterAdmin() -> Element {
    let auth = use_auth();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut flags = use_signal(Vec::<&'static str>::new);
    let mut error = use_signal(|| None::<String>);
    let mut created = use_signal(|| false);

    let submit = move |_| {
        created.set(false);
        let mut missing = Vec::new();
        for (field, value) in [
            ("username", username()),
            ("email", email()),
            ("password", password()),
        ] {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        flags.set(missing.clone());
        if !missing.is_empty() {
            return;
        }
        let req = RegisterRequest {
            username: username(),
            email: email(),
            password: password(),
            role: "ADMIN".to_string(),
            phone: None,
        };
        let token = auth.token();
        spawn(async move {
            match api::post_json_no_response("/api/auth/register", token.as_deref(), &req).await {
                Ok(()) => {
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    created.set(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let flagged = flags();

    rsx! {
        Layout {
            title: "Register Admin".to_string(),
            active_path: "/dashboard/register-admin".to_string(),

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }
            if created() {
                div { class: "card bg-primary/10 p-3 mb-4", "Administrator account created" }
            }

            div { class: "card p-6 max-w-md",
                TextField {
                    label: "Username",
                    value: username(),
                    error: flagged.contains(&"username"),
                    on_input: move |v| username.set(v),
                }
                TextField {
                    label: "Email",
                    value: email(),
                    input_type: "email",
                    error: flagged.contains(&"email"),
                    on_input: move |v| email.set(v),
                }
                TextField {
                    label: "Password",
                    value: password(),
                    input_type: "password",
                    error: flagged.contains(&"password"),
                    on_input: move |v| password.set(v),
                }
                button { class: "btn btn-primary mt-2", onclick: submit, "Register" }
            }
        }
    }
}
