use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent, Window};

use crate::error::WidgetError;

pub fn window() -> Result<Window, WidgetError> {
    web_sys::window().ok_or(WidgetError::NoWindow)
}

pub fn document() -> Result<Document, WidgetError> {
    window()?.document().ok_or(WidgetError::NoDocument)
}

/// id로 필수 요소 찾기
pub fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WidgetError::NotHtml(id.to_string()))
}

/// 없어도 되는 요소. 없으면 경고만 남긴다
pub fn optional_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    match element_by_id(document, id) {
        Ok(el) => Some(el),
        Err(err) => {
            log::warn!("{} - 해당 기능은 건너뜁니다", err);
            None
        }
    }
}

pub fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>, WidgetError> {
    match document.query_selector(selector)? {
        Some(el) => el
            .dyn_into::<HtmlElement>()
            .map(Some)
            .map_err(|_| WidgetError::NotHtml(selector.to_string())),
        None => Ok(None),
    }
}

/// 셀렉터에 맞는 HTML 요소 전부 (HTML이 아닌 노드는 건너뜀)
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, WidgetError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn create(document: &Document, tag: &str) -> Result<HtmlElement, WidgetError> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WidgetError::NotHtml(tag.to_string()))
}

/// 클릭 리스너 등록. 페이지가 살아있는 동안 유지되므로 클로저는 leak한다
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), WidgetError>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
