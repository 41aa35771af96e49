//! Manual payment verification page.

use dioxus::prelude::*;

use crate::app::api::{self, PendingPayment};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout};

/// Pending payments queue. Verifying confirms the booking, so it goes
/// through a browser confirmation first; exactly one POST per confirmation.
#[component]
pub fn Payments() -> Element {
    let auth = use_auth();
    let mut error = use_signal(|| None::<String>);

    let mut payments = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<PendingPayment>>("/api/payment/pending", token.as_deref())
                .await
                .ok()
        }
    });

    let mut verify = move |payment_id: i64| {
        if !api::confirm(
            "Are you sure you want to verify this payment? This will confirm the booking and notify the agency.",
        ) {
            return;
        }
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/payment/{payment_id}/verify");
            match api::post_json_no_response(&url, token.as_deref(), &serde_json::json!({})).await {
                Ok(()) => payments.restart(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let mut open_bordereau = move |payment_id: i64| {
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/payment/bordereau/{payment_id}");
            match api::fetch_blob_url(&url, token.as_deref()).await {
                Ok(blob_url) => api::open_in_new_tab(&blob_url),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let list = payments.read().clone().flatten().unwrap_or_default();

    rsx! {
        Layout {
            title: "Payments".to_string(),
            active_path: "/dashboard/payments".to_string(),

            p { class: "text-muted mb-4",
                "Review and approve manual payments (bordereau) for candidate bookings."
            }

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            if list.is_empty() {
                div { class: "card p-6", "No payments awaiting verification." }
            } else {
                div { class: "grid gap-2",
                    for payment in list {
                        div { key: "{payment.id}", class: "card p-4 flex items-center justify-between",
                            div {
                                p { class: "font-semibold",
                                    "{payment.payer_name.clone().unwrap_or_else(|| \"Unknown payer\".to_string())}"
                                }
                                if let Some(amount) = payment.amount {
                                    p { class: "text-sm text-muted", "Amount: {amount}" }
                                }
                                if let Some(reference) = payment.reference.clone() {
                                    p { class: "text-sm text-muted font-mono", "{reference}" }
                                }
                            }
                            div { class: "flex gap-2",
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    onclick: move |_| open_bordereau(payment.id),
                                    "View bordereau"
                                }
                                button {
                                    class: "btn btn-primary btn-sm",
                                    onclick: move |_| verify(payment.id),
                                    "Verify"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
