use yew::prelude::*;
use web_sys::HtmlAudioElement;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use shared::spin_engine::continue_rotation;
use shared::{PresentationDirective, WheelSurface};

/// [`WheelSurface`] backed by the lottery page's Yew state.
#[derive(Clone)]
pub struct YewSurface {
    pub rotation: UseStateHandle<f64>,
    pub transition_ms: UseStateHandle<u32>,
    pub trigger_enabled: UseStateHandle<bool>,
    pub result: UseStateHandle<Option<PresentationDirective>>,
    pub debt: UseStateHandle<Option<String>>,
    pub modal_open: UseStateHandle<bool>,
    pub content_revealed: UseStateHandle<bool>,
    pub audio_ref: NodeRef,
}

impl WheelSurface for YewSurface {
    fn reset_rotation(&mut self) {
        self.transition_ms.set(0);
        self.rotation.set(0.0);
    }

    fn apply_rotation(&mut self, degrees: f64, duration_ms: u32) {
        // Stack onto the current angle so every spin turns forward.
        let target = continue_rotation(*self.rotation, degrees);
        self.transition_ms.set(duration_ms);
        self.rotation.set(target);
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled.set(enabled);
    }

    fn show_result(&mut self, directive: &PresentationDirective) {
        self.result.set(Some(directive.clone()));
    }

    fn hide_result(&mut self) {
        self.result.set(None);
    }

    fn show_debt(&mut self, text: &str) {
        self.debt.set(Some(text.to_string()));
    }

    fn close_modal(&mut self) {
        self.modal_open.set(false);
    }

    fn reveal_content(&mut self) {
        self.content_revealed.set(true);
    }

    fn play_audio(&mut self) {
        let Some(audio) = self.audio_ref.cast::<HtmlAudioElement>() else {
            return;
        };
        match audio.play() {
            Ok(promise) => spawn_local(async move {
                // Autoplay policies may refuse; nothing to recover.
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("Audio playback refused: {:?}", e);
                }
            }),
            Err(e) => log::debug!("Audio playback failed: {:?}", e),
        }
    }

    fn show_summary(&mut self, text: &str) {
        gloo::dialogs::alert(text);
    }
}
