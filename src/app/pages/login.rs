//! Login page.

use dioxus::prelude::*;

use crate::app::api::{self, LoginRequest, LoginResponse};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, TextField};
use crate::app::routing::landing_path;
use crate::app::session::decode_token;

/// Email/password login. On success the session is stored and the browser
/// navigates to the role's landing path.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // Already signed in: skip the form
    use_effect(move || {
        if auth.is_restored() && auth.is_authenticated() {
            navigator().replace(landing_path(auth.role()));
        }
    });

    let submit = move |_| {
        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            let req = LoginRequest {
                email: email_value,
                password: password_value,
            };
            match api::post_json::<_, LoginResponse>("/api/auth/login", None, &req).await {
                Ok(resp) => {
                    // Backend may omit the user record; fall back to the token claims
                    let user = resp.user.or_else(|| decode_token(&resp.token));
                    match user {
                        Some(user) => {
                            let landing = landing_path(user.role());
                            auth.login(resp.token, user);
                            navigator().push(landing);
                        }
                        None => {
                            error.set(Some("Login succeeded but the session is unusable".into()));
                        }
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        document::Title { "Sign in - MCM Console" }
        document::Link { rel: "stylesheet", href: asset!("/public/mcm.css") }

        div { class: "min-h-screen flex items-center justify-center",
            div { class: "card w-96 p-6",
                h1 { class: "text-xl font-bold mb-4", "MCM Console" }

                if let Some(message) = error() {
                    ErrorAlert {
                        message: message,
                        on_dismiss: move |_| error.set(None),
                    }
                }

                TextField {
                    label: "Email",
                    value: email(),
                    input_type: "email",
                    placeholder: "you@example.com",
                    on_input: move |v| email.set(v),
                }
                TextField {
                    label: "Password",
                    value: password(),
                    input_type: "password",
                    on_input: move |v| password.set(v),
                }

                button {
                    class: "btn btn-primary w-full mt-2",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
