use yew::prelude::*;
use shared::{PresentationDirective, Tone};
use crate::styles;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub directive: Option<PresentationDirective>,
    pub on_claim: Callback<MouseEvent>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(directive) = &props.directive else {
        return html! {};
    };

    let (gradient_classes, animation_class) = match directive.tone {
        Tone::Celebrate => ("from-red-500 to-orange-500 border-red-300", "animate-bounce"),
        Tone::Encourage => ("from-amber-400 to-yellow-500 border-amber-300", "animate-pulse"),
        Tone::Console => ("from-gray-400 to-gray-600 border-gray-300", ""),
    };

    html! {
        <div class="mt-6 mb-2 flex flex-col items-center justify-center gap-4">
            <div class={classes!(
                "flex",
                "items-center",
                "justify-center",
                "px-6",
                "py-4",
                "rounded-xl",
                "bg-gradient-to-r",
                "text-white",
                "font-bold",
                "text-xl",
                "shadow-lg",
                "border-2",
                "transition-all",
                "duration-500",
                animation_class,
                gradient_classes
            )}>
                <span>{&directive.message}</span>
            </div>
            if directive.show_claim {
                <button onclick={props.on_claim.clone()} class={styles::BUTTON_CLAIM}>
                    {"Claim prize"}
                </button>
            }
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub enabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = !props.enabled;
    let button_text = if is_disabled { "Spinning..." } else { "Spin the wheel" };

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0 animate-pulse-subtle"
    };

    let spin_icon_class = if is_disabled {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DebtBadgeProps {
    pub text: Option<String>,
}

#[function_component(DebtBadge)]
pub fn debt_badge(props: &DebtBadgeProps) -> Html {
    match &props.text {
        Some(text) => html! {
            <div class="mt-4 text-center">
                <span class="text-sm font-medium text-pink-700 dark:text-pink-300 bg-pink-50 dark:bg-pink-900/30 px-4 py-2 rounded-full">
                    {text}
                </span>
            </div>
        },
        None => html! {},
    }
}
