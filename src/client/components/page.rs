use dioxus::prelude::*;

/// Full-height page body offset below the fixed navbar.
#[component]
pub fn Page(#[props(default = "")] class: &'static str, children: Element) -> Element {
    rsx!(
        main {
            class: "min-h-screen pt-[80px] px-4 pb-8 {class}",
            {children}
        }
    )
}
