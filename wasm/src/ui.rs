use engine::articles::{self, Article};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Node, ScrollBehavior, ScrollIntoViewOptions};

use crate::config::WidgetConfig;
use crate::dom;
use crate::error::WidgetError;

/// 뒤집기 카드
pub fn toggle_flip(card: &HtmlElement) -> Result<bool, WidgetError> {
    Ok(card.class_list().toggle("flipped")?)
}

pub fn wire_flip_card(document: &Document, config: &WidgetConfig) -> Result<(), WidgetError> {
    let Some(card) = dom::optional_by_id(document, &config.flip_card_id) else {
        return Ok(());
    };
    let target = card.clone();
    dom::on_click(&card, move |_| {
        if let Err(err) = toggle_flip(&target) {
            log::error!("카드 뒤집기 실패: {}", err);
        }
    })
}

/// 탐색 버튼 -> 글 목록으로 부드럽게 스크롤
pub fn wire_explore(document: &Document, config: &WidgetConfig) -> Result<(), WidgetError> {
    let Some(button) = dom::optional_by_id(document, &config.explore_button_id) else {
        return Ok(());
    };
    let document = document.clone();
    let selector = config.scroll_target.clone();
    dom::on_click(&button, move |_| match dom::query(&document, &selector) {
        Ok(Some(section)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => log::warn!("스크롤 대상 '{}'이 없습니다", selector),
        Err(err) => log::error!("스크롤 실패: {}", err),
    })
}

/// 글 모달
#[derive(Clone)]
pub struct Modal {
    document: Document,
    root: HtmlElement,
    title: HtmlElement,
    content: HtmlElement,
}

impl Modal {
    pub fn find(document: &Document, config: &WidgetConfig) -> Result<Self, WidgetError> {
        Ok(Self {
            document: document.clone(),
            root: dom::element_by_id(document, &config.modal_id)?,
            title: dom::element_by_id(document, &config.modal_title_id)?,
            content: dom::element_by_id(document, &config.modal_content_id)?,
        })
    }

    /// id에 해당하는 글을 채우고 연다. 모르는 id면 "찾을 수 없음" 글
    pub fn show(&self, article_id: &str) -> Result<(), WidgetError> {
        let article = articles::lookup(article_id);
        log::debug!("article '{}' -> {}", article_id, article.title);
        self.title.set_text_content(Some(article.title));
        self.fill(article)?;
        self.root.class_list().add_1("active")?;
        Ok(())
    }

    pub fn close(&self) -> Result<(), WidgetError> {
        self.root.class_list().remove_1("active")?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.root.class_list().contains("active")
    }

    fn fill(&self, article: &Article) -> Result<(), WidgetError> {
        self.content.set_inner_html("");
        self.append_text("p", article.lead)?;
        if let Some(section) = article.section {
            self.append_text("h3", section)?;
        }
        if !article.points.is_empty() {
            let list = dom::create(&self.document, "ul")?;
            for &point in article.points {
                let item = dom::create(&self.document, "li")?;
                item.set_text_content(Some(point));
                list.append_child(&item)?;
            }
            self.content.append_child(&list)?;
        }
        if let Some(closing) = article.closing {
            self.append_text("p", closing)?;
        }
        Ok(())
    }

    fn append_text(&self, tag: &str, text: &str) -> Result<(), WidgetError> {
        let el = dom::create(&self.document, tag)?;
        el.set_text_content(Some(text));
        self.content.append_child(&el)?;
        Ok(())
    }
}

/// 읽기 버튼, 닫기 버튼, 배경 클릭을 모달에 연결
pub fn wire_modal(document: &Document, config: &WidgetConfig) -> Result<Option<Modal>, WidgetError> {
    let modal = match Modal::find(document, config) {
        Ok(modal) => modal,
        Err(err) => {
            log::warn!("{} - 글 모달은 건너뜁니다", err);
            return Ok(None);
        }
    };

    for button in dom::query_all(document, &config.read_more_selector)? {
        let target = modal.clone();
        let source = button.clone();
        dom::on_click(&button, move |_| {
            let id = source.get_attribute("data-article").unwrap_or_default();
            if let Err(err) = target.show(&id) {
                log::error!("글 열기 실패: {}", err);
            }
        })?;
    }

    if let Some(close) = dom::optional_by_id(document, &config.close_modal_id) {
        let target = modal.clone();
        dom::on_click(&close, move |_| {
            if let Err(err) = target.close() {
                log::error!("모달 닫기 실패: {}", err);
            }
        })?;
    }

    // 모달 바깥 배경을 누르면 닫기
    let target = modal.clone();
    let window = dom::window()?;
    dom::on_click(&window, move |event| {
        let clicked = event.target();
        let clicked_node = clicked.as_ref().and_then(|t| t.dyn_ref::<Node>());
        if target.root.is_same_node(clicked_node) {
            if let Err(err) = target.close() {
                log::error!("모달 닫기 실패: {}", err);
            }
        }
    })?;

    Ok(Some(modal))
}
