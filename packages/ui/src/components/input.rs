use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            disabled: disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(#[props(default = String::new())] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}
