use dioxus::events::MouseEvent;
use dioxus::prelude::*;

/// Visual treatment for [`Button`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

/// Sizing for [`Button`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Regular,
    Full,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Small => "button--sm",
            ButtonSize::Regular => "button--md",
            ButtonSize::Full => "button--full",
        }
    }
}

/// Shared clickable surface: a variant, a size, an optional leading icon,
/// and whatever the caller renders as the label.
#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default = ButtonSize::Regular)] size: ButtonSize,
    icon: Option<Element>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = format!("button {} {}", variant.class(), size.class());

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = onclick.as_ref() {
                    handler.call(evt);
                }
            },
            if let Some(icon) = icon {
                span { class: "button__icon", aria_hidden: "true", {icon} }
            }
            span { class: "button__label", {children} }
        }
    }
}
