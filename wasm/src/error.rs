use thiserror::Error;
use wasm_bindgen::{JsError, JsValue};

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("window 객체가 없습니다")]
    NoWindow,
    #[error("document 객체가 없습니다")]
    NoDocument,
    #[error("'{0}' 요소를 찾을 수 없습니다")]
    MissingElement(String),
    #[error("'{0}' 요소가 HTML 요소가 아닙니다")]
    NotHtml(String),
    #[error("설정을 읽을 수 없습니다: {0}")]
    Config(String),
    #[error("JS 오류: {0}")]
    Js(String),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        WidgetError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}
