use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use engine::animation::{DEFAULT_PEAK_SCALE, DEFAULT_PERIOD_MS};

use crate::error::WidgetError;

/// 위젯 설정. JS에서 일부 키만 넘겨도 나머지는 기본값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub board_id: String,
    pub selected_color: String,
    pub selected_shadow: String,
    pub target_color: String,

    pub piece_selector: String,
    pub pulse_button_id: String,
    pub reset_button_id: String,
    pub pulse_period_ms: u32,
    pub pulse_scale: f64,
    pub pulse_transition: String,

    pub flip_card_id: String,
    pub explore_button_id: String,
    pub scroll_target: String,

    pub modal_id: String,
    pub modal_title_id: String,
    pub modal_content_id: String,
    pub close_modal_id: String,
    pub read_more_selector: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            board_id: "chessBoard".to_string(),
            selected_color: "#e67e22".to_string(),
            selected_shadow: "0 0 15px rgba(230, 126, 34, 0.7)".to_string(),
            target_color: "#16a085".to_string(),

            piece_selector: ".chess-piece".to_string(),
            pulse_button_id: "pulseBtn".to_string(),
            reset_button_id: "resetBtn".to_string(),
            pulse_period_ms: DEFAULT_PERIOD_MS,
            pulse_scale: DEFAULT_PEAK_SCALE,
            pulse_transition: "transform 0.5s ease".to_string(),

            flip_card_id: "flipCard".to_string(),
            explore_button_id: "exploreBtn".to_string(),
            scroll_target: ".blog-posts".to_string(),

            modal_id: "articleModal".to_string(),
            modal_title_id: "modalTitle".to_string(),
            modal_content_id: "modalContent".to_string(),
            close_modal_id: "closeModal".to_string(),
            read_more_selector: ".read-more".to_string(),
        }
    }
}

impl WidgetConfig {
    /// undefined / null이면 기본값
    pub fn from_js(value: JsValue) -> Result<Self, WidgetError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| WidgetError::Config(e.to_string()))
    }
}
