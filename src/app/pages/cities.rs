//! Cities reference-data page.
//!
//! The global list is shown alongside a per-country view; creation happens
//! under a selected country.

use dioxus::prelude::*;

use crate::app::api::{self, City, Country};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout, SelectField, TextField};

#[derive(serde::Serialize)]
struct CityCreateRequest {
    name: String,
}

/// Cities CRUD page.
#[component]
pub fn Cities() -> Element {
    let auth = use_auth();
    let mut error = use_signal(|| None::<String>);
    let mut selected_country = use_signal(String::new);
    let mut new_city = use_signal(String::new);
    let mut new_city_error = use_signal(|| false);

    let countries = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<Country>>("/api/locations/countries", token.as_deref())
                .await
                .ok()
        }
    });

    // Global list when no country is selected, per-country list otherwise
    let mut cities = use_resource(move || {
        let token = auth.token();
        let country = selected_country();
        async move {
            let url = if country.is_empty() {
                "/api/locations/cities".to_string()
            } else {
                format!("/api/locations/countries/{country}/cities")
            };
            api::get_json::<Vec<City>>(&url, token.as_deref()).await.ok()
        }
    });

    let create = move |_| {
        let country = selected_country();
        let city_name = new_city().trim().to_string();
        new_city_error.set(city_name.is_empty());
        if country.is_empty() {
            error.set(Some("Select a country before adding a city".to_string()));
            return;
        }
        if city_name.is_empty() {
            return;
        }
        let token = auth.token();
        spawn(async move {
            let req = CityCreateRequest { name: city_name };
            let url = format!("/api/locations/countries/{country}/cities");
            match api::post_json_no_response(&url, token.as_deref(), &req).await {
                Ok(()) => {
                    new_city.set(String::new());
                    cities.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let country_options: Vec<(String, String)> = countries
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .map(|c| (c.id.to_string(), c.name))
        .collect();

    let city_list = cities.read().clone().flatten().unwrap_or_default();

    rsx! {
        Layout {
            title: "Cities".to_string(),
            active_path: "/dashboard/cities".to_string(),

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            div { class: "card p-6 max-w-md mb-6",
                SelectField {
                    label: "Country",
                    value: selected_country(),
                    options: country_options,
                    on_change: move |v| selected_country.set(v),
                }
                TextField {
                    label: "New city name",
                    value: new_city(),
                    error: new_city_error(),
                    on_input: move |v| new_city.set(v),
                }
                button { class: "btn btn-primary mt-2", onclick: create, "Add city" }
            }

            h3 { class: "text-lg font-semibold mb-2",
                if selected_country().is_empty() { "All cities" } else { "Cities in selected country" }
            }
            if city_list.is_empty() {
                p { class: "text-sm text-muted", "No cities" }
            } else {
                div { class: "grid gap-2 grid-cols-1 md:grid-cols-3",
                    for city in city_list {
                        div { key: "{city.id}", class: "card p-3",
                            "{city.name}"
                            if let Some(country_name) = city.country_name {
                                span { class: "text-xs text-muted ml-2", "{country_name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
