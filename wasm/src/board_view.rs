use std::cell::RefCell;
use std::rc::Rc;

use engine::{highlight, Board, HighlightKind, HighlightSet, Piece, Square};
use web_sys::{Document, HtmlElement};

use crate::config::WidgetConfig;
use crate::dom;
use crate::error::WidgetError;

/// 하이라이트 색
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub selected_color: String,
    pub selected_shadow: String,
    pub target_color: String,
}

impl From<&WidgetConfig> for Palette {
    fn from(config: &WidgetConfig) -> Self {
        Self {
            selected_color: config.selected_color.clone(),
            selected_shadow: config.selected_shadow.clone(),
            target_color: config.target_color.clone(),
        }
    }
}

/// 화면에 그려진 보드
///
/// 칸 요소를 인덱스 순서로 들고 있어서 하이라이트할 때 DOM을 다시 뒤지지 않는다.
pub struct BoardView {
    board: Board,
    squares: Vec<HtmlElement>,
    palette: Palette,
    current: Option<HighlightSet>,
}

impl BoardView {
    /// 컨테이너를 비우고 64칸을 행 우선으로 채운 뒤 기물 칸에 클릭을 건다
    pub fn render(
        document: &Document,
        container: &HtmlElement,
        board: Board,
        palette: Palette,
    ) -> Result<Rc<RefCell<Self>>, WidgetError> {
        container.set_inner_html("");

        let mut squares = Vec::with_capacity(64);
        for cell in board.cells() {
            let el = dom::create(document, "div")?;
            el.set_class_name(&format!("chess-square {}", cell.shade.class_name()));
            if let Some(piece) = cell.piece {
                let glyph = piece.glyph().to_string();
                el.set_text_content(Some(&glyph));
                el.set_attribute("data-piece", &glyph)?;
            }
            container.append_child(&el)?;
            squares.push(el);
        }

        let pieces: Vec<(Square, Piece)> = board.pieces().collect();
        let view = Rc::new(RefCell::new(Self {
            board,
            squares,
            palette,
            current: None,
        }));

        for (square, piece) in pieces {
            let el = view.borrow().squares[square.index()].clone();
            let handle = Rc::clone(&view);
            dom::on_click(&el, move |_| {
                if let Err(err) = handle.borrow_mut().select(square, piece) {
                    log::error!("하이라이트 실패: {}", err);
                }
            })?;
        }

        log::info!("Material advantage: {}", view.borrow().board.material_advantage());
        Ok(view)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn square_element(&self, square: Square) -> Option<&HtmlElement> {
        self.squares.get(square.index())
    }

    pub fn current(&self) -> Option<&HighlightSet> {
        self.current.as_ref()
    }

    /// 이전 하이라이트를 지우고 새로 칠한다
    pub fn select(&mut self, square: Square, piece: Piece) -> Result<(), WidgetError> {
        self.clear()?;
        let set = highlight(square, piece);
        self.paint(&set)?;
        log::debug!("selected {} ({} target(s))", square.to_notation(), set.targets().len());
        self.current = Some(set);
        Ok(())
    }

    /// 보드 좌표로 선택. 빈 칸이면 하이라이트만 지운다
    pub fn select_at(&mut self, row: i32, col: i32) -> Result<bool, WidgetError> {
        let occupied = Square::new(row, col).and_then(|sq| self.board.piece_at(sq).map(|p| (sq, p)));
        match occupied {
            Some((square, piece)) => {
                self.select(square, piece)?;
                Ok(true)
            }
            None => {
                self.clear()?;
                Ok(false)
            }
        }
    }

    pub fn clear(&mut self) -> Result<(), WidgetError> {
        if let Some(previous) = self.current.take() {
            for (square, _) in previous.iter() {
                if let Some(el) = self.squares.get(square.index()) {
                    let style = el.style();
                    style.remove_property("background-color")?;
                    style.remove_property("box-shadow")?;
                }
            }
        }
        Ok(())
    }

    fn paint(&self, set: &HighlightSet) -> Result<(), WidgetError> {
        for (square, kind) in set.iter() {
            let Some(el) = self.squares.get(square.index()) else {
                continue;
            };
            let style = el.style();
            match kind {
                HighlightKind::Selected => {
                    style.set_property("background-color", &self.palette.selected_color)?;
                    style.set_property("box-shadow", &self.palette.selected_shadow)?;
                }
                HighlightKind::Target => {
                    style.set_property("background-color", &self.palette.target_color)?;
                }
            }
        }
        Ok(())
    }
}
