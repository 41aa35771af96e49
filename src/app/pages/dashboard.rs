//! Administrator dashboard.

use dioxus::prelude::*;

use crate::app::api::{self, Booking, PendingPayment};
use crate::app::auth::use_auth;
use crate::app::components::Layout;

/// Welcome page with queue counters and shortcuts into the busiest pages.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();

    let bookings = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<Booking>>("/api/bookings", token.as_deref())
                .await
                .ok()
        }
    });

    let pending_payments = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<PendingPayment>>("/api/payment/pending", token.as_deref())
                .await
                .ok()
        }
    });

    let booking_list = bookings.read().clone().flatten().unwrap_or_default();
    let total_bookings = booking_list.len();
    let pending_bookings = booking_list
        .iter()
        .filter(|b| b.status == "PENDING")
        .count();
    let payments_waiting = pending_payments
        .read()
        .clone()
        .flatten()
        .map(|p| p.len())
        .unwrap_or(0);

    let identity = auth
        .user()
        .map(|u| u.username.unwrap_or(u.email))
        .unwrap_or_default();

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            active_path: "/dashboard".to_string(),

            div { class: "card p-6 mb-6",
                h1 { class: "text-2xl font-bold mb-1", "Welcome back" }
                p { class: "text-muted", "{identity}" }
            }

            div { class: "grid gap-4 grid-cols-1 md:grid-cols-3",
                a { href: "/dashboard/appointments", class: "card p-6 hover:bg-elevated",
                    p { class: "text-sm text-muted", "Bookings" }
                    p { class: "text-3xl font-bold", "{total_bookings}" }
                }
                a { href: "/dashboard/appointments", class: "card p-6 hover:bg-elevated",
                    p { class: "text-sm text-muted", "Pending bookings" }
                    p { class: "text-3xl font-bold", "{pending_bookings}" }
                }
                a { href: "/dashboard/payments", class: "card p-6 hover:bg-elevated",
                    p { class: "text-sm text-muted", "Payments awaiting verification" }
                    p { class: "text-3xl font-bold", "{payments_waiting}" }
                }
            }
        }
    }
}
