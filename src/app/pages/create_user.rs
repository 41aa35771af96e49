//! Staff-side account creation (agency and hospital roles).

use dioxus::prelude::*;

use crate::app::api::{self, RegisterRequest};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout, SelectField, TextField};

/// Create an AGENCY or HOSPITAL account via `/auth/register`.
#[component]
pub fn CreateUser() -> Element {
    let auth = use_auth();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(String::new);
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
            ("role", role()),
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
            role: role(),
            phone: Some(phone()).filter(|p| !p.is_empty()),
        };
        let token = auth.token();
        spawn(async move {
            match api::post_json_no_response("/api/auth/register", token.as_deref(), &req).await {
                Ok(()) => {
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    phone.set(String::new());
                    role.set(String::new());
                    created.set(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let flagged = flags();

    rsx! {
        Layout {
            title: "Create User".to_string(),
            active_path: "/dashboard/create-user".to_string(),

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }
            if created() {
                div { class: "card bg-primary/10 p-3 mb-4", "Account created" }
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
                TextField {
                    label: "Phone",
                    value: phone(),
                    on_input: move |v| phone.set(v),
                }
                SelectField {
                    label: "Role",
                    value: role(),
                    error: flagged.contains(&"role"),
                    options: vec![
                        ("AGENCY".to_string(), "Agency".to_string()),
                        ("HOSPITAL".to_string(), "Hospital".to_string()),
                    ],
                    on_change: move |v| role.set(v),
                }
                button { class: "btn btn-primary mt-2", onclick: submit, "Create account" }
            }
        }
    }
}
