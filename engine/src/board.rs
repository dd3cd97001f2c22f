use serde::Serialize;
use thiserror::Error;

use crate::highlight::{self, HighlightSet};
use crate::material::{self, MaterialAdvantage};
use crate::piece::{Color, Piece};
use crate::square::{Square, BOARD_SIZE, SQUARE_COUNT};

/// 빈 칸 표기
pub const EMPTY_GLYPH: char = '.';

/// 표준 시작 배치 (row 0 = 흑 진영)
pub const INITIAL_ROWS: [&str; 8] = [
    "♜♞♝♛♚♝♞♜",
    "♟♟♟♟♟♟♟♟",
    "........",
    "........",
    "........",
    "........",
    "♙♙♙♙♙♙♙♙",
    "♖♘♗♕♔♗♘♖",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{row}번째 줄의 칸 수가 {len}개입니다 (8개 필요)")]
    RowLength { row: usize, len: usize },
    #[error("알 수 없는 기물 글리프 '{glyph}' ({row}, {col})")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
}

/// 칸 색
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// (row + col)이 짝수면 밝은 칸
    pub fn of(square: Square) -> Shade {
        if (square.row() + square.col()) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }

    /// CSS 클래스 이름
    pub fn class_name(&self) -> &'static str {
        match self {
            Shade::Light => "light",
            Shade::Dark => "dark",
        }
    }
}

/// 렌더링용 칸 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub square: Square,
    pub shade: Shade,
    pub piece: Option<Piece>,
}

/// 64칸 배치. 페이지가 살아있는 동안 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [None; SQUARE_COUNT] }
    }

    /// 표준 시작 배치
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (row, line) in INITIAL_ROWS.iter().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                board.cells[row * BOARD_SIZE as usize + col] = Piece::from_glyph(glyph);
            }
        }
        board
    }

    /// 글리프 8줄에서 배치 생성. 빈 칸은 `.`
    pub fn from_rows(rows: &[&str; 8]) -> Result<Self, BoardError> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE as usize {
                return Err(BoardError::RowLength { row, len });
            }
            for (col, glyph) in line.chars().enumerate() {
                if glyph == EMPTY_GLYPH {
                    continue;
                }
                let piece = Piece::from_glyph(glyph)
                    .ok_or(BoardError::UnknownGlyph { glyph, row, col })?;
                board.cells[row * BOARD_SIZE as usize + col] = Some(piece);
            }
        }
        Ok(board)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    pub fn place(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index()] = piece;
    }

    /// 행 우선 순서의 64칸 정보
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Square::all().map(move |square| Cell {
            square,
            shade: Shade::of(square),
            piece: self.piece_at(square),
        })
    }

    /// 놓인 기물 전체 (칸 순서)
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().map(|(_, p)| p).filter(move |p| p.color == color)
    }

    /// 백 - 흑 기물 점수 차
    pub fn material_advantage(&self) -> MaterialAdvantage {
        material::advantage(self.pieces_of(Color::White), self.pieces_of(Color::Black))
    }

    /// 해당 칸의 기물 기준 하이라이트. 빈 칸이면 None
    pub fn highlights_from(&self, square: Square) -> Option<HighlightSet> {
        self.piece_at(square).map(|piece| highlight::highlight(square, piece))
    }
}
