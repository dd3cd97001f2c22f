use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use engine::{articles, Board, Square};

pub mod animation;
pub mod board_view;
pub mod config;
pub mod dom;
pub mod error;
pub mod ui;

use animation::PieceAnimation;
use board_view::{BoardView, Palette};
use config::WidgetConfig;
use error::WidgetError;
use ui::Modal;

/// JS로 전달할 칸 정보
#[derive(Serialize)]
pub struct JsCell {
    pub index: usize,
    pub row: i32,
    pub col: i32,
    pub shade: &'static str,
    pub piece: Option<String>,
    pub color: Option<&'static str>,
    pub kind: Option<&'static str>,
}

/// JS에서 사용할 보드 래퍼 (DOM 없이 데이터만)
#[wasm_bindgen]
pub struct ChessBoard {
    board: Board,
}

#[wasm_bindgen]
impl ChessBoard {
    /// 시작 배치로 생성
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChessBoard {
        ChessBoard {
            board: Board::initial(),
        }
    }

    /// 64칸 상태 (행 우선)
    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        let cells: Vec<JsCell> = self
            .board
            .cells()
            .map(|cell| JsCell {
                index: cell.square.index(),
                row: cell.square.row(),
                col: cell.square.col(),
                shade: cell.shade.class_name(),
                piece: cell.piece.map(|p| p.glyph().to_string()),
                color: cell.piece.map(|p| p.color.label()),
                kind: cell.piece.map(|p| p.kind.name()),
            })
            .collect();
        Ok(serde_wasm_bindgen::to_value(&cells)?)
    }

    /// 특정 칸 기물의 하이라이트 목록. 빈 칸이거나 보드 밖이면 빈 배열
    #[wasm_bindgen]
    pub fn get_highlights(&self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        let marks = Square::new(row, col)
            .and_then(|sq| self.board.highlights_from(sq))
            .map(|set| set.marks())
            .unwrap_or_default();
        Ok(serde_wasm_bindgen::to_value(&marks)?)
    }

    /// 백 - 흑 기물 점수
    #[wasm_bindgen]
    pub fn material_advantage(&self) -> i32 {
        self.board.material_advantage().score
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// 마운트된 위젯 핸들
#[wasm_bindgen]
pub struct Widget {
    view: Rc<RefCell<BoardView>>,
    animation: Rc<RefCell<PieceAnimation>>,
    modal: Option<Modal>,
}

#[wasm_bindgen]
impl Widget {
    /// 보드 좌표의 기물을 선택한 것처럼 하이라이트. 기물이 있었으면 true
    #[wasm_bindgen]
    pub fn select(&self, row: i32, col: i32) -> Result<bool, JsValue> {
        Ok(self.view.borrow_mut().select_at(row, col)?)
    }

    #[wasm_bindgen]
    pub fn clear_highlights(&self) -> Result<(), JsValue> {
        Ok(self.view.borrow_mut().clear()?)
    }

    /// 현재 하이라이트된 칸 수 (선택 칸 포함)
    #[wasm_bindgen]
    pub fn highlighted_count(&self) -> usize {
        self.view.borrow().current().map_or(0, |set| set.iter().count())
    }

    #[wasm_bindgen]
    pub fn material_advantage(&self) -> i32 {
        self.view.borrow().board().material_advantage().score
    }

    #[wasm_bindgen]
    pub fn pulse(&self) -> Result<(), JsValue> {
        Ok(self.animation.borrow_mut().pulse()?)
    }

    #[wasm_bindgen]
    pub fn reset_animation(&self) -> Result<(), JsValue> {
        Ok(self.animation.borrow_mut().reset()?)
    }

    #[wasm_bindgen]
    pub fn is_animating(&self) -> bool {
        self.animation.borrow().is_running()
    }

    #[wasm_bindgen]
    pub fn show_article(&self, id: &str) -> Result<(), JsValue> {
        match &self.modal {
            Some(modal) => Ok(modal.show(id)?),
            None => Err(WidgetError::MissingElement("article modal".to_string()).into()),
        }
    }

    #[wasm_bindgen]
    pub fn close_article(&self) -> Result<(), JsValue> {
        match &self.modal {
            Some(modal) => Ok(modal.close()?),
            None => Ok(()),
        }
    }
}

/// 보드를 그리고 페이지의 버튼들을 연결
///
/// 보드 컨테이너가 없으면 에러. 나머지 요소는 없으면 경고 후 건너뛴다.
pub fn mount_with(config: WidgetConfig) -> Result<Widget, WidgetError> {
    let window = dom::window()?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;

    let container = dom::element_by_id(&document, &config.board_id)?;
    let view = BoardView::render(&document, &container, Board::initial(), Palette::from(&config))?;

    let animation = Rc::new(RefCell::new(PieceAnimation::new(window, document.clone(), &config)));
    if let Some(button) = dom::optional_by_id(&document, &config.pulse_button_id) {
        let handle = Rc::clone(&animation);
        dom::on_click(&button, move |_| {
            if let Err(err) = handle.borrow_mut().pulse() {
                log::error!("애니메이션 시작 실패: {}", err);
            }
        })?;
    }
    if let Some(button) = dom::optional_by_id(&document, &config.reset_button_id) {
        let handle = Rc::clone(&animation);
        dom::on_click(&button, move |_| {
            if let Err(err) = handle.borrow_mut().reset() {
                log::error!("애니메이션 초기화 실패: {}", err);
            }
        })?;
    }

    ui::wire_explore(&document, &config)?;
    ui::wire_flip_card(&document, &config)?;
    let modal = ui::wire_modal(&document, &config)?;

    Ok(Widget {
        view,
        animation,
        modal,
    })
}

/// JS 진입점. 설정 객체를 생략하면 기본값
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<Widget, JsValue> {
    let config = WidgetConfig::from_js(config)?;
    Ok(mount_with(config)?)
}

/// id로 글 조회. 모르는 id면 "Article Not Found"
#[wasm_bindgen]
pub fn article(id: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(articles::lookup(id))?)
}

#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // 이미 로거가 있으면 그대로 둔다
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Chessboard WASM initialized!");
}
