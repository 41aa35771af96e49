//! Hospital booking queue.
//!
//! Hospitals see their day's bookings, filter client-side, and jump into the
//! report wizard pre-filled for a candidate's passport.

use dioxus::prelude::*;

use crate::app::api::{self, Booking};
use crate::app::auth::use_auth;
use crate::app::components::Layout;

/// Hospital booking queue page.
#[component]
pub fn HospitalDashboard() -> Element {
    let auth = use_auth();
    let mut filter = use_signal(|| "ALL".to_string());
    let mut search = use_signal(String::new);

    let bookings = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<Booking>>("/api/bookings", token.as_deref())
                .await
                .ok()
        }
    });

    let needle = search().to_lowercase();
    let active_filter = filter();
    let list: Vec<Booking> = bookings
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .filter(|b| {
            let matches_search = needle.is_empty()
                || b.first_name.to_lowercase().contains(&needle)
                || b.last_name.to_lowercase().contains(&needle)
                || b.passport_number.to_lowercase().contains(&needle);
            let matches_filter = active_filter == "ALL" || b.status == active_filter;
            matches_search && matches_filter
        })
        .collect();

    rsx! {
        Layout {
            title: "Hospital Dashboard".to_string(),
            active_path: "/hospital-dashboard".to_string(),

            div { class: "flex items-center gap-2 mb-4",
                for status in ["ALL", "PENDING", "COMPLETED"] {
                    button {
                        class: if filter() == status { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" },
                        onclick: move |_| filter.set(status.to_string()),
                        "{status}"
                    }
                }
                input {
                    class: "input w-72 ml-auto",
                    placeholder: "Search by name, passport, or ref...",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
            }

            if list.is_empty() {
                div { class: "card p-6", "No bookings match." }
            } else {
                div { class: "grid gap-2",
                    for booking in list {
                        div { key: "{booking.id}", class: "card p-4 flex items-center justify-between",
                            div {
                                p { class: "font-semibold", "{booking.first_name} {booking.last_name}" }
                                p { class: "text-sm text-muted font-mono", "PASS: {booking.passport_number}" }
                                if let Some(position) = booking.position_applied.clone() {
                                    p { class: "text-sm text-muted", "{position}" }
                                }
                            }
                            div { class: "flex items-center gap-2",
                                span { class: "badge", "{booking.status}" }
                                if booking.status != "COMPLETED" && booking.status != "CANCELLED" {
                                    a {
                                        class: "btn btn-primary btn-sm",
                                        href: "/medical-reports?passport={booking.passport_number}",
                                        "Start report"
                                    }
                                } else {
                                    a {
                                        class: "btn btn-ghost btn-sm",
                                        href: "/medical-reports?passport={booking.passport_number}&mode=view",
                                        "View report"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
