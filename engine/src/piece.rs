use serde::{Deserialize, Serialize};

/// 진영
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn label(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// 기물 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// 행마 단위
///
/// `Leap`은 한 번만, `Slide`는 보드 끝까지 같은 방향으로 반복한다.
/// 막힘 판정은 하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stride {
    Leap(i32, i32),
    Slide(i32, i32),
}

const KNIGHT_LEAPS: [Stride; 8] = [
    Stride::Leap(-2, -1),
    Stride::Leap(-2, 1),
    Stride::Leap(-1, -2),
    Stride::Leap(-1, 2),
    Stride::Leap(1, -2),
    Stride::Leap(1, 2),
    Stride::Leap(2, -1),
    Stride::Leap(2, 1),
];

const QUEEN_SLIDES: [Stride; 8] = [
    Stride::Slide(0, 1),
    Stride::Slide(0, -1),
    Stride::Slide(1, 0),
    Stride::Slide(-1, 0),
    Stride::Slide(1, 1),
    Stride::Slide(1, -1),
    Stride::Slide(-1, 1),
    Stride::Slide(-1, -1),
];

const DIAGONAL_LEAPS: [Stride; 4] = [
    Stride::Leap(-1, -1),
    Stride::Leap(-1, 1),
    Stride::Leap(1, -1),
    Stride::Leap(1, 1),
];

const WHITE_PAWN: [Stride; 1] = [Stride::Leap(-1, 0)];
const BLACK_PAWN: [Stride; 1] = [Stride::Leap(1, 0)];

impl PieceKind {
    /// 기물 점수 (킹은 0)
    pub fn value(&self) -> i32 {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 9,
            PieceKind::Rook => 5,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 3,
            PieceKind::Pawn => 1,
        }
    }

    /// 하이라이트용 행마 패턴
    ///
    /// 실제 체스 규칙이 아니라 보여주기용 근사치다. 킹, 룩, 비숍은
    /// 대각선 인접 4칸만 표시한다.
    pub fn pattern(&self, color: Color) -> &'static [Stride] {
        match self {
            PieceKind::Pawn => match color {
                Color::White => &WHITE_PAWN,
                Color::Black => &BLACK_PAWN,
            },
            PieceKind::Knight => &KNIGHT_LEAPS,
            PieceKind::Queen => &QUEEN_SLIDES,
            PieceKind::King | PieceKind::Rook | PieceKind::Bishop => &DIAGONAL_LEAPS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }
}

/// 기물
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// 유니코드 체스 글리프에서 변환
    pub fn from_glyph(glyph: char) -> Option<Self> {
        use Color::*;
        use PieceKind::*;
        let piece = match glyph {
            '♔' => Piece::new(White, King),
            '♕' => Piece::new(White, Queen),
            '♖' => Piece::new(White, Rook),
            '♗' => Piece::new(White, Bishop),
            '♘' => Piece::new(White, Knight),
            '♙' => Piece::new(White, Pawn),
            '♚' => Piece::new(Black, King),
            '♛' => Piece::new(Black, Queen),
            '♜' => Piece::new(Black, Rook),
            '♝' => Piece::new(Black, Bishop),
            '♞' => Piece::new(Black, Knight),
            '♟' => Piece::new(Black, Pawn),
            _ => return None,
        };
        Some(piece)
    }

    /// 문자열 심볼에서 변환 (글리프 한 글자만 허용)
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_glyph(c),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    pub fn pattern(&self) -> &'static [Stride] {
        self.kind.pattern(self.color)
    }
}
