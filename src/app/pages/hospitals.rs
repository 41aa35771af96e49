//! Hospitals reference-data page.
//!
//! Creation provisions the hospital together with its owner account
//! credentials; the list can be narrowed by country and city. Editing is
//! limited to the name and daily intake cap.

use dioxus::prelude::*;

use crate::app::api::{self, City, Country, Hospital};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout, SelectField, TextField};

#[derive(serde::Serialize)]
struct HospitalCreateRequest {
    name: String,
    email: String,
    password: String,
    phone: String,
    address: String,
    country_id: i64,
    city_id: i64,
    max_daily_candidates: i64,
}

#[derive(serde::Serialize)]
struct HospitalUpdateRequest {
    name: String,
    max_daily_candidates: i64,
}

/// Hospitals CRUD page.
#[component]
pub fn Hospitals() -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| "view".to_string());
    let mut error = use_signal(|| None::<String>);

    // List filters
    let mut filter_country = use_signal(String::new);
    let mut filter_city = use_signal(String::new);

    // Create form
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut country_id = use_signal(String::new);
    let mut city_id = use_signal(String::new);
    let mut max_daily = use_signal(String::new);
    let mut flags = use_signal(Vec::<&'static str>::new);

    // Edit modal
    let mut editing = use_signal(|| None::<Hospital>);
    let mut edit_name = use_signal(String::new);
    let mut edit_max_daily = use_signal(String::new);

    let countries = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<Country>>("/api/locations/countries", token.as_deref())
                .await
                .ok()
        }
    });

    // Cities for the currently selected create-form country
    let form_cities = use_resource(move || {
        let token = auth.token();
        let country = country_id();
        async move {
            if country.is_empty() {
                return Some(Vec::new());
            }
            api::get_json::<Vec<City>>(
                &format!("/api/locations/countries/{country}/cities"),
                token.as_deref(),
            )
            .await
            .ok()
        }
    });

    let mut hospitals = use_resource(move || {
        let token = auth.token();
        let country = filter_country();
        let city = filter_city();
        async move {
            let mut url = "/api/hospitals".to_string();
            let mut params = Vec::new();
            if !country.is_empty() {
                params.push(format!("country_id={country}"));
            }
            if !city.is_empty() {
                params.push(format!("city_id={city}"));
            }
            if !params.is_empty() {
                url = format!("{url}?{}", params.join("&"));
            }
            api::get_json::<Vec<Hospital>>(&url, token.as_deref()).await.ok()
        }
    });

    let create = move |_| {
        let mut missing = Vec::new();
        for (field, value) in [
            ("name", name()),
            ("email", email()),
            ("password", password()),
            ("country_id", country_id()),
            ("city_id", city_id()),
            ("max_daily_candidates", max_daily()),
        ] {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        flags.set(missing.clone());
        if !missing.is_empty() {
            return;
        }
        let req = HospitalCreateRequest {
            name: name(),
            email: email(),
            password: password(),
            phone: phone(),
            address: address(),
            country_id: country_id().parse().unwrap_or_default(),
            city_id: city_id().parse().unwrap_or_default(),
            max_daily_candidates: max_daily().parse().unwrap_or_default(),
        };
        let token = auth.token();
        spawn(async move {
            match api::post_json_no_response("/api/hospitals", token.as_deref(), &req).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    phone.set(String::new());
                    address.set(String::new());
                    country_id.set(String::new());
                    city_id.set(String::new());
                    max_daily.set(String::new());
                    tab.set("view".to_string());
                    hospitals.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let save_edit = move |_| {
        let Some(hospital) = editing() else { return };
        let req = HospitalUpdateRequest {
            name: edit_name(),
            max_daily_candidates: edit_max_daily().parse().unwrap_or_default(),
        };
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/hospitals/{}", hospital.id);
            match api::patch_json::<_, Hospital>(&url, token.as_deref(), &req).await {
                Ok(_) => {
                    editing.set(None);
                    hospitals.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let mut remove = move |hospital: Hospital| {
        if !api::confirm(&format!("Delete hospital \"{}\"?", hospital.name)) {
            return;
        }
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/hospitals/{}", hospital.id);
            match api::delete(&url, token.as_deref()).await {
                Ok(()) => hospitals.restart(),
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
    let city_options: Vec<(String, String)> = form_cities
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .map(|c| (c.id.to_string(), c.name))
        .collect();
    let list = hospitals.read().clone().flatten().unwrap_or_default();
    let flagged = flags();

    rsx! {
        Layout {
            title: "Hospitals".to_string(),
            active_path: "/dashboard/hospitals".to_string(),

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
            }

            if tab() == "view" {
                div { class: "flex gap-4 mb-4 max-w-xl",
                    SelectField {
                        label: "Filter by country",
                        value: filter_country(),
                        options: country_options.clone(),
                        on_change: move |v| {
                            filter_country.set(v);
                            filter_city.set(String::new());
                        },
                    }
                    TextField {
                        label: "City id",
                        value: filter_city(),
                        on_input: move |v| filter_city.set(v),
                    }
                }
                div { class: "grid gap-2",
                    for hospital in list {
                        div { key: "{hospital.id}", class: "card p-4 flex items-center justify-between",
                            div {
                                p { class: "font-semibold", "{hospital.name}" }
                                p { class: "text-sm text-muted",
                                    "Daily cap: {hospital.max_daily_candidates.unwrap_or_default()}"
                                }
                            }
                            div { class: "flex gap-2",
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    onclick: {
                                        let hospital = hospital.clone();
                                        move |_| {
                                            edit_name.set(hospital.name.clone());
                                            edit_max_daily.set(
                                                hospital
                                                    .max_daily_candidates
                                                    .map(|n| n.to_string())
                                                    .unwrap_or_default(),
                                            );
                                            editing.set(Some(hospital.clone()));
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-ghost btn-sm text-error",
                                    onclick: {
                                        let hospital = hospital.clone();
                                        move |_| remove(hospital.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "card p-6 max-w-md",
                    TextField {
                        label: "Hospital name",
                        value: name(),
                        error: flagged.contains(&"name"),
                        on_input: move |v| name.set(v),
                    }
                    TextField {
                        label: "Owner email",
                        value: email(),
                        input_type: "email",
                        error: flagged.contains(&"email"),
                        on_input: move |v| email.set(v),
                    }
                    TextField {
                        label: "Owner password",
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
                    TextField {
                        label: "Address",
                        value: address(),
                        on_input: move |v| address.set(v),
                    }
                    SelectField {
                        label: "Country",
                        value: country_id(),
                        options: country_options,
                        error: flagged.contains(&"country_id"),
                        on_change: move |v| {
                            country_id.set(v);
                            city_id.set(String::new());
                        },
                    }
                    SelectField {
                        label: "City",
                        value: city_id(),
                        options: city_options,
                        error: flagged.contains(&"city_id"),
                        on_change: move |v| city_id.set(v),
                    }
                    TextField {
                        label: "Max daily candidates",
                        value: max_daily(),
                        input_type: "number",
                        error: flagged.contains(&"max_daily_candidates"),
                        on_input: move |v| max_daily.set(v),
                    }
                    button { class: "btn btn-primary mt-2", onclick: create, "Create hospital" }
                }
            }

            if let Some(hospital) = editing() {
                div { class: "fixed inset-0 bg-black/40 flex items-center justify-center",
                    div { class: "card p-6 w-96 bg-surface",
                        h3 { class: "text-lg font-semibold mb-3", "Edit {hospital.name}" }
                        TextField {
                            label: "Name",
                            value: edit_name(),
                            on_input: move |v| edit_name.set(v),
                        }
                        TextField {
                            label: "Max daily candidates",
                            value: edit_max_daily(),
                            input_type: "number",
                            on_input: move |v| edit_max_daily.set(v),
                        }
                        div { class: "flex gap-2 mt-2",
                            button { class: "btn btn-primary", onclick: save_edit, "Save" }
                            button {
                                class: "btn btn-ghost",
                                onclick: move |_| editing.set(None),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
