use shared::WheelConfig;
use web_sys::window;

/// Id of the optional `<script type="application/json">` block holding the wheel config.
pub const CONFIG_ELEMENT_ID: &str = "wheel-config";

pub fn load_wheel_config() -> WheelConfig {
    let text = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(text) = text else {
        log::debug!("No #{} element, using the default wheel", CONFIG_ELEMENT_ID);
        return WheelConfig::default();
    };

    match WheelConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring wheel config: {}", e);
            WheelConfig::default()
        }
    }
}
