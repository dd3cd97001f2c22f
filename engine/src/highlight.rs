use std::collections::BTreeSet;

use serde::Serialize;

use crate::piece::{Piece, Stride};
use crate::square::{Square, BOARD_SIZE};

/// 하이라이트 종류. 선택한 칸과 이동 후보 칸은 다른 색으로 칠한다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Selected,
    Target,
}

/// JS로 넘기는 하이라이트 한 칸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightMark {
    pub row: i32,
    pub col: i32,
    pub kind: HighlightKind,
}

/// 클릭 한 번에 대한 하이라이트 결과
///
/// 클릭할 때마다 새로 만들어서 이전 것을 통째로 대체한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSet {
    origin: Square,
    targets: BTreeSet<Square>,
}

impl HighlightSet {
    pub fn origin(&self) -> Square {
        self.origin
    }

    pub fn targets(&self) -> &BTreeSet<Square> {
        &self.targets
    }

    pub fn contains_target(&self, square: Square) -> bool {
        self.targets.contains(&square)
    }

    /// 선택 칸을 먼저, 이어서 후보 칸들을 칸 순서대로
    pub fn iter(&self) -> impl Iterator<Item = (Square, HighlightKind)> + '_ {
        std::iter::once((self.origin, HighlightKind::Selected))
            .chain(self.targets.iter().map(|&sq| (sq, HighlightKind::Target)))
    }

    pub fn marks(&self) -> Vec<HighlightMark> {
        self.iter()
            .map(|(sq, kind)| HighlightMark { row: sq.row(), col: sq.col(), kind })
            .collect()
    }
}

/// 행마 패턴을 보드 위 칸으로 펼친다. 보드 밖 칸은 버린다
pub fn expand(origin: Square, pattern: &[Stride]) -> BTreeSet<Square> {
    let mut squares = BTreeSet::new();
    for stride in pattern {
        match *stride {
            Stride::Leap(dr, dc) => {
                if let Some(sq) = origin.offset(dr, dc) {
                    squares.insert(sq);
                }
            }
            Stride::Slide(dr, dc) => {
                for step in 1..BOARD_SIZE {
                    match origin.offset(dr * step, dc * step) {
                        Some(sq) => {
                            squares.insert(sq);
                        }
                        None => break,
                    }
                }
            }
        }
    }
    squares
}

/// 클릭한 칸과 기물로 하이라이트 계산
pub fn highlight(origin: Square, piece: Piece) -> HighlightSet {
    let targets = expand(origin, piece.pattern());
    log::debug!(
        "{} {} at {}: {} target(s)",
        piece.color.label(),
        piece.kind.name(),
        origin.to_notation(),
        targets.len()
    );
    HighlightSet { origin, targets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::piece::{Color, PieceKind};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn target_set(set: &HighlightSet) -> Vec<(i32, i32)> {
        set.targets().iter().map(|s| (s.row(), s.col())).collect()
    }

    #[test]
    fn test_white_pawn_from_start() {
        let board = Board::initial();
        let set = board.highlights_from(sq(6, 4)).unwrap();
        assert_eq!(target_set(&set), vec![(5, 4)]);
        assert_eq!(set.origin(), sq(6, 4));
    }

    #[test]
    fn test_black_pawn_moves_down() {
        let set = highlight(sq(1, 2), Piece::new(Color::Black, PieceKind::Pawn));
        assert_eq!(target_set(&set), vec![(2, 2)]);
    }

    #[test]
    fn test_pawn_on_last_row_has_no_target() {
        let set = highlight(sq(0, 5), Piece::new(Color::White, PieceKind::Pawn));
        assert!(set.targets().is_empty());
        let set = highlight(sq(7, 5), Piece::new(Color::Black, PieceKind::Pawn));
        assert!(set.targets().is_empty());
    }

    #[test]
    fn test_white_knight_from_start() {
        let board = Board::initial();
        let set = board.highlights_from(sq(7, 1)).unwrap();
        assert_eq!(target_set(&set), vec![(5, 0), (5, 2), (6, 3)]);
    }

    #[test]
    fn test_knight_in_centre_has_eight_targets() {
        let set = highlight(sq(3, 3), Piece::new(Color::Black, PieceKind::Knight));
        assert_eq!(set.targets().len(), 8);
        assert!(set.contains_target(sq(1, 2)));
        assert!(set.contains_target(sq(5, 4)));
    }

    #[test]
    fn test_queen_from_centre() {
        let set = highlight(sq(3, 3), Piece::new(Color::White, PieceKind::Queen));
        assert_eq!(set.targets().len(), 27);
        assert!(!set.contains_target(sq(3, 3)));
        assert!(set.contains_target(sq(0, 0)));
        assert!(set.contains_target(sq(7, 7)));
        assert!(set.contains_target(sq(0, 6)));
        assert!(set.contains_target(sq(6, 0)));
        assert!(!set.contains_target(sq(5, 4)));
    }

    #[test]
    fn test_queen_ignores_blockers() {
        // 시작 배치에서도 막힘 없이 줄 전체가 후보가 된다
        let board = Board::initial();
        let set = board.highlights_from(sq(7, 3)).unwrap();
        assert!(set.contains_target(sq(0, 3)));
        assert!(set.contains_target(sq(7, 0)));
        assert_eq!(set.targets().len(), 21);
    }

    #[test]
    fn test_fallback_diagonals() {
        let set = highlight(sq(4, 4), Piece::new(Color::White, PieceKind::Rook));
        assert_eq!(target_set(&set), vec![(3, 3), (3, 5), (5, 3), (5, 5)]);

        let set = highlight(sq(0, 0), Piece::new(Color::Black, PieceKind::King));
        assert_eq!(target_set(&set), vec![(1, 1)]);
    }

    #[test]
    fn test_marks_put_origin_first() {
        let set = highlight(sq(6, 0), Piece::new(Color::White, PieceKind::Pawn));
        let marks = set.marks();
        assert_eq!(
            marks,
            vec![
                HighlightMark { row: 6, col: 0, kind: HighlightKind::Selected },
                HighlightMark { row: 5, col: 0, kind: HighlightKind::Target },
            ]
        );
    }
}
