//! Countries reference-data page.
//!
//! View tab groups the list into destination / affiliated / national
//! sections; the create tab maps the category selector onto the two backend
//! flags. A bulk import walks the built-in seed list, creating each country
//! and its capital and tolerating already-exists failures.

use dioxus::prelude::*;

use crate::app::api::{self, Country, CountryCreateRequest};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout, SelectField, TextField};
use crate::app::seed::SEED_LOCATIONS;

#[derive(serde::Serialize)]
struct CityCreateRequest {
    name: String,
}

/// Countries CRUD page.
#[component]
pub fn Countries() -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| "view".to_string());
    let mut error = use_signal(|| None::<String>);

    // Create form state
    let mut name = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut name_error = use_signal(|| false);
    let mut category_error = use_signal(|| false);

    // Bulk import progress
    let mut importing = use_signal(|| false);
    let mut import_done = use_signal(|| 0usize);

    let mut countries = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<Country>>("/api/locations/countries", token.as_deref())
                .await
                .ok()
        }
    });

    let create = move |_| {
        let name_value = name().trim().to_string();
        let category_value = category();
        name_error.set(name_value.is_empty());
        category_error.set(category_value.is_empty());
        if name_value.is_empty() || category_value.is_empty() {
            return;
        }
        let token = auth.token();
        spawn(async move {
            let req = CountryCreateRequest::from_category(&name_value, &category_value);
            match api::post_json::<_, Country>(
                "/api/locations/countries",
                token.as_deref(),
                &req,
            )
            .await
            {
                Ok(_) => {
                    name.set(String::new());
                    category.set(String::new());
                    tab.set("view".to_string());
                    countries.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let bulk_import = move |_| {
        let prompt = format!(
            "This will attempt to import {} countries and their capitals. Continue?",
            SEED_LOCATIONS.len()
        );
        if !api::confirm(&prompt) {
            return;
        }
        let token = auth.token();
        importing.set(true);
        import_done.set(0);
        spawn(async move {
            for (country_name, capital) in SEED_LOCATIONS {
                let req = CountryCreateRequest::from_category(country_name, "");
                // Already-present countries fail the create; skip them
                let created = api::post_json::<_, Country>(
                    "/api/locations/countries",
                    token.as_deref(),
                    &req,
                )
                .await;
                if let Ok(country) = created {
                    let city_req = CityCreateRequest {
                        name: capital.to_string(),
                    };
                    let url = format!("/api/locations/countries/{}/cities", country.id);
                    let _ = api::post_json_no_response(&url, token.as_deref(), &city_req).await;
                }
                import_done.with_mut(|n| *n += 1);
            }
            importing.set(false);
            countries.restart();
        });
    };

    let list = countries.read().clone().flatten().unwrap_or_default();
    let destination: Vec<Country> = list.iter().filter(|c| c.is_destination).cloned().collect();
    let affiliated: Vec<Country> = list
        .iter()
        .filter(|c| c.is_affiliated && !c.is_destination)
        .cloned()
        .collect();
    let national: Vec<Country> = list
        .iter()
        .filter(|c| !c.is_destination && !c.is_affiliated)
        .cloned()
        .collect();

    let progress = import_done();
    let total = SEED_LOCATIONS.len();

    rsx! {
        Layout {
            title: "Countries".to_string(),
            active_path: "/dashboard/countries".to_string(),

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            div { class: "flex gap-2 mb-4",
                button {
                    class: if tab() == "view" { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" },
                    onclick: move |_| tab.set("view".to_string()),
                    "View"
                }
                button {
                    class: if tab() == "create" { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" },
                    onclick: move |_| tab.set("create".to_string()),
                    "Create"
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    disabled: importing(),
                    onclick: bulk_import,
                    if importing() { "Importing {progress}/{total}..." } else { "Bulk import" }
                }
            }

            if tab() == "view" {
                CountrySection { heading: "Destination countries", countries: destination }
                CountrySection { heading: "Affiliated countries", countries: affiliated }
                CountrySection { heading: "National countries", countries: national }
            } else {
                div { class: "card p-6 max-w-md",
                    TextField {
                        label: "Country name",
                        value: name(),
                        error: name_error(),
                        on_input: move |v| name.set(v),
                    }
                    SelectField {
                        label: "Category",
                        value: category(),
                        error: category_error(),
                        options: vec![
                            ("destination".to_string(), "Destination".to_string()),
                            ("affiliated".to_string(), "Affiliated".to_string()),
                            ("national".to_string(), "National".to_string()),
                        ],
                        on_change: move |v| category.set(v),
                    }
                    button { class: "btn btn-primary mt-2", onclick: create, "Create country" }
                }
            }
        }
    }
}

#[component]
fn CountrySection(heading: &'static str, countries: Vec<Country>) -> Element {
    rsx! {
        div { class: "mb-6",
            h3 { class: "text-lg font-semibold mb-2", "{heading}" }
            if countries.is_empty() {
                p { class: "text-sm text-muted", "None" }
            } else {
                div { class: "grid gap-2 grid-cols-1 md:grid-cols-3",
                    for country in countries {
                        div { key: "{country.id}", class: "card p-3", "{country.name}" }
                    }
                }
            }
        }
    }
}
