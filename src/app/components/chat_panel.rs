//! Direct-message overlay panel.

use dioxus::prelude::*;

use crate::app::api;
use crate::app::auth::use_auth;
use crate::app::chat::{format_timestamp, refresh_chat, use_chat};

#[derive(serde::Serialize)]
struct SendMessageRequest {
    subject: String,
    message: String,
}

/// Contact list plus the selected thread. Rendered as a fixed overlay so it
/// floats over whatever page is open.
#[component]
pub fn ChatPanel() -> Element {
    let auth = use_auth();
    let chat = use_chat();
    let mut input = use_signal(String::new);

    let contacts = (chat.contacts)();
    let threads = (chat.threads)();
    let selected = (chat.selected)();
    let error = (chat.error)();

    let selected_thread = selected
        .and_then(|id| threads.get(&id).cloned())
        .unwrap_or_default();

    let send = move |_| {
        let text = input().trim().to_string();
        if text.is_empty() {
            return;
        }
        let token = auth.token();
        let mut error_signal = chat.error;
        spawn(async move {
            let req = SendMessageRequest {
                subject: "Direct Message".to_string(),
                message: text,
            };
            match api::post_json_no_response("/api/messages", token.as_deref(), &req).await {
                Ok(()) => {
                    input.set(String::new());
                    refresh_chat(chat, token);
                }
                Err(e) => error_signal.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div { class: "fixed right-4 bottom-4 w-96 max-h-[70vh] card shadow-lg flex flex-col bg-surface",
            div { class: "flex items-center justify-between border-b px-4 py-2",
                strong { "Messages" }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| chat.toggle(),
                    "×"
                }
            }

            if let Some(message) = error {
                p { class: "text-xs text-error px-4 py-1", "{message}" }
            }

            div { class: "flex flex-1 overflow-hidden",
                // Contact roster, most recent first
                ul { class: "w-40 border-r overflow-y-auto",
                    for contact in contacts {
                        li {
                            key: "{contact.user_id}",
                            button {
                                class: if Some(contact.user_id) == selected {
                                    "w-full text-left px-3 py-2 bg-primary/10 font-semibold"
                                } else {
                                    "w-full text-left px-3 py-2 hover:bg-elevated"
                                },
                                onclick: move |_| chat.select(contact.user_id),
                                span { class: "block text-sm truncate", "{contact.name}" }
                                span { class: "block text-xs text-muted", "{contact.kind.label()}" }
                            }
                        }
                    }
                }

                // Selected thread, oldest first
                div { class: "flex-1 flex flex-col",
                    div { class: "flex-1 overflow-y-auto p-3 space-y-2",
                        if selected.is_none() {
                            p { class: "text-sm text-muted", "Select a contact" }
                        }
                        for message in selected_thread {
                            div { key: "{message.id}", class: "card p-2",
                                p { class: "text-sm", "{message.message}" }
                                if let Some(at) = message.created_at {
                                    p { class: "text-xs text-muted", "{format_timestamp(&at)}" }
                                }
                            }
                        }
                    }
                    div { class: "flex gap-2 border-t p-2",
                        input {
                            class: "input flex-1",
                            value: "{input}",
                            placeholder: "Write a message...",
                            oninput: move |e| input.set(e.value()),
                        }
                        button {
                            class: "btn btn-primary btn-sm",
                            onclick: send,
                            "Send"
                        }
                    }
                }
            }
        }
    }
}
