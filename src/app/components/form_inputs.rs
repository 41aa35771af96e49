//! Reusable form input components.
//!
//! Every wizard and CRUD form renders through these so validation flags and
//! styling stay uniform. A flagged field gets the error border and keeps it
//! until the next validation pass.

use dioxus::prelude::*;

/// A labeled text input with an error flag.
#[component]
pub fn TextField(
    /// Input label
    label: String,
    /// Current value
    value: String,
    /// Input type, defaults to "text"
    #[props(default = "text".to_string())]
    input_type: String,
    /// Placeholder text
    #[props(default)]
    placeholder: String,
    /// Validation flag; draws the error border
    #[props(default = false)]
    error: bool,
    /// Read-only fields render without an input cursor (derived values)
    #[props(default = false)]
    readonly: bool,
    /// Called with the new value on every input
    on_input: EventHandler<String>,
) -> Element {
    let input_class = if error {
        "input w-full border-error"
    } else {
        "input w-full"
    };

    rsx! {
        div { class: "mb-3",
            label { class: "block text-sm font-medium mb-1", "{label}" }
            input {
                class: input_class,
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                readonly: readonly,
                oninput: move |e| on_input.call(e.value()),
            }
            if error {
                p { class: "text-xs text-error mt-1", "This field is required" }
            }
        }
    }
}

/// A labeled select input with an error flag.
#[component]
pub fn SelectField(
    /// Input label
    label: String,
    /// Current value
    value: String,
    /// (value, label) pairs
    options: Vec<(String, String)>,
    /// Validation flag; draws the error border
    #[props(default = false)]
    error: bool,
    /// Called with the selected value
    on_change: EventHandler<String>,
) -> Element {
    let select_class = if error {
        "input w-full border-error"
    } else {
        "input w-full"
    };

    rsx! {
        div { class: "mb-3",
            label { class: "block text-sm font-medium mb-1", "{label}" }
            select {
                class: select_class,
                value: "{value}",
                onchange: move |e| on_change.call(e.value()),
                option { value: "", "Select..." }
                for (option_value, option_label) in options {
                    option {
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
            if error {
                p { class: "text-xs text-error mt-1", "This field is required" }
            }
        }
    }
}

/// A labeled checkbox with an error flag.
#[component]
pub fn CheckboxField(
    /// Checkbox label
    label: String,
    /// Current checked state
    checked: bool,
    /// Validation flag
    #[props(default = false)]
    error: bool,
    /// Called when the checkbox changes
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "mb-3",
            label { class: "flex items-center gap-2 text-sm",
                input {
                    r#type: "checkbox",
                    checked: checked,
                    onchange: move |e| on_change.call(e.checked()),
                }
                span { class: if error { "text-error" } else { "" }, "{label}" }
            }
        }
    }
}
