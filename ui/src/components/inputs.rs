//! Input controls shared by the auth forms.

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub required: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            required: props.required,
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct PinCellInputProps {
    pub value: String,
    pub disabled: bool,
    pub on_input: EventHandler<FormEvent>,
    pub on_keydown: EventHandler<KeyboardEvent>,
    pub on_mounted: EventHandler<MountedEvent>,
}

/// One single-character PIN slot. Raw keyboard and mount events are handed
/// back to the form, which owns the digit state and the focus chain.
#[component]
pub fn PinCellInput(props: PinCellInputProps) -> Element {
    rsx! {
        input {
            class: "pin-cell",
            r#type: "password",
            inputmode: "numeric",
            autocomplete: "off",
            maxlength: "1",
            value: "{props.value}",
            disabled: props.disabled,
            oninput: move |event| props.on_input.call(event),
            onkeydown: move |event| props.on_keydown.call(event),
            onmounted: move |event| props.on_mounted.call(event)
        }
    }
}
