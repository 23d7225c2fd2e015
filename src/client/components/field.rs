use dioxus::prelude::*;

/// Control classes, with the error variant when the field failed validation
fn field_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{base} {base}-error w-full")
    } else {
        format!("{base} w-full")
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    mut value: Signal<String>,
    #[props(default = "text")] kind: &'static str,
    error: Option<String>,
) -> Element {
    let class = field_class("input", error.is_some());

    rsx!(
        fieldset { class: "fieldset w-full",
            legend { class: "fieldset-legend", "{label}" }
            input {
                class: class,
                r#type: kind,
                name: name,
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(error) = &error {
                p { class: "label text-error", "{error}" }
            }
        }
    )
}

#[component]
pub fn TextArea(
    label: &'static str,
    name: &'static str,
    mut value: Signal<String>,
    #[props(default = 4)] rows: u32,
    error: Option<String>,
) -> Element {
    let class = field_class("textarea", error.is_some());

    rsx!(
        fieldset { class: "fieldset w-full",
            legend { class: "fieldset-legend", "{label}" }
            textarea {
                class: class,
                name: name,
                rows: "{rows}",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(error) = &error {
                p { class: "label text-error", "{error}" }
            }
        }
    )
}

/// Select over `options`; the empty value is offered as `placeholder`.
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    mut value: Signal<String>,
    options: Vec<&'static str>,
    #[props(default = "Select...")] placeholder: &'static str,
    error: Option<String>,
) -> Element {
    let class = field_class("select", error.is_some());

    rsx!(
        fieldset { class: "fieldset w-full",
            legend { class: "fieldset-legend", "{label}" }
            select {
                class: class,
                name: name,
                value: "{value}",
                onchange: move |evt| value.set(evt.value()),
                option { value: "", "{placeholder}" }
                for choice in options {
                    option {
                        value: choice,
                        selected: value.read().as_str() == choice,
                        "{choice}"
                    }
                }
            }
            if let Some(error) = &error {
                p { class: "label text-error", "{error}" }
            }
        }
    )
}
