//! Bookings monitor for administrators.
//!
//! Server-side filtering by status and passport number; slip and bordereau
//! documents open through blob URLs fetched with the session token.

use dioxus::prelude::*;

use crate::app::api::{self, Booking};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout, SelectField};

/// Bookings list page.
#[component]
pub fn Appointments() -> Element {
    let auth = use_auth();
    let mut error = use_signal(|| None::<String>);
    let mut status_filter = use_signal(String::new);
    let mut passport_search = use_signal(String::new);
    // Applied on button press, not on every keystroke
    let mut applied_search = use_signal(String::new);

    let bookings = use_resource(move || {
        let token = auth.token();
        let status = status_filter();
        let passport = applied_search();
        async move {
            let mut params = Vec::new();
            if !status.is_empty() {
                params.push(format!("status={}", urlencoding::encode(&status)));
            }
            if !passport.is_empty() {
                params.push(format!("passport_number={}", urlencoding::encode(&passport)));
            }
            let url = if params.is_empty() {
                "/api/bookings".to_string()
            } else {
                format!("/api/bookings?{}", params.join("&"))
            };
            api::get_json::<Vec<Booking>>(&url, token.as_deref()).await.ok()
        }
    });

    let mut open_slip = move |booking_id: i64| {
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/bookings/{booking_id}/slip");
            match api::fetch_blob_url(&url, token.as_deref()).await {
                Ok(blob_url) => api::open_in_new_tab(&blob_url),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let mut open_bordereau = move |booking_id: i64| {
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/payment/bordereau/{booking_id}");
            match api::fetch_blob_url(&url, token.as_deref()).await {
                Ok(blob_url) => api::open_in_new_tab(&blob_url),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let list = bookings.read().clone().flatten().unwrap_or_default();

    rsx! {
        Layout {
            title: "Appointments".to_string(),
            active_path: "/dashboard/appointments".to_string(),

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            div { class: "flex items-end gap-4 mb-4",
                div { class: "w-48",
                    SelectField {
                        label: "Status",
                        value: status_filter(),
                        options: vec![
                            ("PENDING".to_string(), "Pending".to_string()),
                            ("CONFIRMED".to_string(), "Confirmed".to_string()),
                            ("COMPLETED".to_string(), "Completed".to_string()),
                            ("CANCELLED".to_string(), "Cancelled".to_string()),
                        ],
                        on_change: move |v| status_filter.set(v),
                    }
                }
                input {
                    class: "input w-64 mb-3",
                    placeholder: "Passport number...",
                    value: "{passport_search}",
                    oninput: move |e| passport_search.set(e.value()),
                }
                button {
                    class: "btn btn-primary btn-sm mb-3",
                    onclick: move |_| applied_search.set(passport_search()),
                    "Search"
                }
            }

            div { class: "grid gap-2",
                for booking in list {
                    div { key: "{booking.id}", class: "card p-4 flex items-center justify-between",
                        div {
                            p { class: "font-semibold", "{booking.first_name} {booking.last_name}" }
                            p { class: "text-sm text-muted font-mono", "PASS: {booking.passport_number}" }
                            if let Some(date) = booking.appointment_date.clone() {
                                p { class: "text-sm text-muted", "{date}" }
                            }
                        }
                        div { class: "flex items-center gap-2",
                            span { class: "badge", "{booking.status}" }
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: move |_| open_slip(booking.id),
                                "Slip"
                            }
                            button {
                                class: "btn btn-ghost btn-sm",
                                onclick: move |_| open_bordereau(booking.id),
                                "Bordereau"
                            }
                        }
                    }
                }
            }
        }
    }
}
