mod surface;
mod wheel_canvas;
mod wheel_utils;

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use gloo_timers::future::TimeoutFuture;
use shared::{LotteryController, PresentationDirective, SpinEngine, WheelConfig};
use crate::config::load_wheel_config;
use crate::styles;

use surface::YewSurface;
use wheel_canvas::WheelCanvas;
use wheel_utils::{DebtBadge, ResultDisplay, SpinButton};

const CUSTOM_CSS: &str = r#"
@keyframes pulse-subtle {
    0% { transform: scale(1); box-shadow: 0 0 0 0 rgba(255, 215, 0, 0.4); }
    70% { transform: scale(1.02); box-shadow: 0 0 0 10px rgba(255, 215, 0, 0); }
    100% { transform: scale(1); box-shadow: 0 0 0 0 rgba(255, 215, 0, 0); }
}

.animate-pulse-subtle {
    animation: pulse-subtle 2s infinite;
}
"#;

/// Path of the clip played when a prize is claimed.
const CLAIM_AUDIO_SRC: &str = "assets/claim.mp3";

fn build_controller() -> LotteryController {
    let config = load_wheel_config();
    match LotteryController::from_config(config) {
        Ok(controller) => controller,
        Err(e) => {
            log::warn!("Falling back to the standard wheel: {}", e);
            let config = WheelConfig::default();
            let table = shared::SegmentTable::standard();
            LotteryController::new(SpinEngine::new(table, config))
        }
    }
}

#[function_component(LotteryPage)]
pub fn lottery_page() -> Html {
    // Apply custom CSS
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(CUSTOM_CSS));
                    head.append_child(&style).ok()?;
                    Some(style)
                });

            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    let controller = use_mut_ref(build_controller);
    let table = controller.borrow().engine().table().clone();
    let guarantee_period = controller.borrow().config().guarantee_period;

    let rotation = use_state(|| 0.0);
    let transition_ms = use_state(|| 0u32);
    let trigger_enabled = use_state(|| true);
    let result = use_state(|| None::<PresentationDirective>);
    let debt = use_state(|| None::<String>);
    let modal_open = use_state(|| true);
    let content_revealed = use_state(|| false);
    let audio_ref = use_node_ref();

    let surface = YewSurface {
        rotation: rotation.clone(),
        transition_ms: transition_ms.clone(),
        trigger_enabled: trigger_enabled.clone(),
        result: result.clone(),
        debt: debt.clone(),
        modal_open: modal_open.clone(),
        content_revealed: content_revealed.clone(),
        audio_ref: audio_ref.clone(),
    };

    // Start from a wheel at rest
    {
        let controller = controller.clone();
        let mut surface = surface.clone();
        use_effect_with((), move |_| {
            controller.borrow().attach(&mut surface);
            || ()
        });
    }

    let start_spin = {
        let controller = controller.clone();
        let surface = surface.clone();
        Callback::from(move |_: MouseEvent| {
            let mut surface = surface.clone();
            let Some(outcome) = controller.borrow_mut().begin_spin(&mut surface) else {
                return;
            };
            log::info!("Spin {} started, landing on {:?}", outcome.attempt, outcome.segment.label);

            let duration = controller.borrow().config().spin_duration_ms;
            let controller = controller.clone();
            spawn_local(async move {
                TimeoutFuture::new(duration).await;
                controller.borrow_mut().finish_spin(&mut surface);
            });
        })
    };

    let claim = {
        let controller = controller.clone();
        let surface = surface.clone();
        Callback::from(move |_: MouseEvent| {
            controller.borrow_mut().claim(&mut surface.clone());
        })
    };

    let dismiss = {
        let controller = controller.clone();
        let surface = surface.clone();
        Callback::from(move |_: MouseEvent| {
            controller.borrow_mut().dismiss(&mut surface.clone());
        })
    };

    html! {
        <div class={styles::CONTAINER}>
            <audio ref={audio_ref} src={CLAIM_AUDIO_SRC} preload="auto" />

            if *content_revealed {
                <div class="max-w-3xl mx-auto py-12">
                    <div class={styles::CARD}>
                        <h1 class={styles::TEXT_H1}>{"Welcome!"}</h1>
                        <p class={classes!("mt-4", styles::TEXT_BODY)}>
                            {"Thanks for giving the wheel a spin. The page is all yours now."}
                        </p>
                    </div>
                </div>
            }

            if *modal_open {
                <div class={styles::MODAL_BACKDROP}>
                    <div class={styles::MODAL_CARD}>
                        <button onclick={dismiss} class={styles::MODAL_CLOSE} aria-label="Close">
                            <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor">
                                <path fill-rule="evenodd" d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z" clip-rule="evenodd" />
                            </svg>
                        </button>

                        <h2 class="text-3xl font-bold mb-6 text-center">
                            <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Lucky Wheel"}</span>
                        </h2>

                        <WheelCanvas
                            table={table}
                            rotation={*rotation}
                            transition_ms={*transition_ms}
                            is_spinning={!*trigger_enabled}
                        />

                        <div class="flex justify-center mt-8">
                            <div class="w-full max-w-[300px]">
                                <SpinButton enabled={*trigger_enabled} onclick={start_spin} />
                            </div>
                        </div>

                        <ResultDisplay directive={(*result).clone()} on_claim={claim} />
                        <DebtBadge text={(*debt).clone()} />

                        <p class={classes!("mt-6", "text-center", styles::TEXT_SMALL)}>
                            {format!("A guaranteed prize every {} spins.", guarantee_period)}
                        </p>
                    </div>
                </div>
            }
        </div>
    }
}
