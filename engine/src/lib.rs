//! 체스판 위젯의 보드 모델과 하이라이트 계산
//!
//! 브라우저와 무관한 순수 로직만 모아둔다. DOM 쪽은 `wasm` 크레이트가 담당.

pub mod animation;
pub mod articles;
pub mod board;
pub mod highlight;
pub mod material;
pub mod piece;
pub mod square;

pub use animation::{Animator, Pulse, Scheduler};
pub use articles::Article;
pub use board::{Board, BoardError, Cell, Shade};
pub use highlight::{highlight, HighlightKind, HighlightMark, HighlightSet};
pub use material::MaterialAdvantage;
pub use piece::{Color, Piece, PieceKind, Stride};
pub use square::Square;
