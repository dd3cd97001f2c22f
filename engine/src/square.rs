use serde::{Deserialize, Serialize};

/// 한 변의 칸 수
pub const BOARD_SIZE: i32 = 8;
/// 전체 칸 수
pub const SQUARE_COUNT: usize = 64;

/// 보드 좌표 (0-indexed: row=0~7, col=0~7)
///
/// row 0은 백 기준 맨 위 줄(흑 진영 8랭크), col 0은 a파일.
/// 생성자를 통해서만 만들어지므로 항상 보드 안의 칸이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// 범위를 벗어나면 None
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// 선형 인덱스(0..64)에서 변환. row = index / 8, col = index % 8
    pub fn from_index(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Some(Self {
                row: (index / BOARD_SIZE as usize) as u8,
                col: (index % BOARD_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    pub fn in_bounds(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
    }

    pub fn row(&self) -> i32 {
        self.row as i32
    }

    pub fn col(&self) -> i32 {
        self.col as i32
    }

    /// 행 우선 선형 인덱스
    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// (drow, dcol)만큼 떨어진 칸. 보드 밖이면 None
    pub fn offset(&self, drow: i32, dcol: i32) -> Option<Self> {
        Self::new(self.row() + drow, self.col() + dcol)
    }

    /// "e4" 같은 문자열에서 파싱
    pub fn from_notation(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return None;
        }
        let col = (chars[0] as i32) - ('a' as i32);
        let rank = (chars[1] as i32) - ('0' as i32);
        Self::new(BOARD_SIZE - rank, col)
    }

    /// 체스 표기법으로 변환
    pub fn to_notation(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{}{}", file, rank)
    }

    /// 보드의 64칸을 행 우선으로 순회
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for i in 0..SQUARE_COUNT {
            let sq = Square::from_index(i).unwrap();
            assert_eq!(sq.row() as usize * 8 + sq.col() as usize, i);
            assert_eq!(sq.index(), i);
        }
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn test_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(-1, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::new(8, 3).is_none());
    }

    #[test]
    fn test_offset_clips_to_board() {
        let corner = Square::new(7, 0).unwrap();
        assert_eq!(corner.offset(-1, 1), Square::new(6, 1));
        assert!(corner.offset(1, 0).is_none());
        assert!(corner.offset(0, -1).is_none());
    }

    #[test]
    fn test_square_notation() {
        // row 0 = 8랭크
        let e4 = Square::from_notation("e4").unwrap();
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.col(), 4);
        assert_eq!(e4.to_notation(), "e4");

        let a8 = Square::from_notation("a8").unwrap();
        assert_eq!(a8.index(), 0);

        let h1 = Square::from_notation("h1").unwrap();
        assert_eq!(h1.index(), 63);

        assert!(Square::from_notation("i1").is_none());
        assert!(Square::from_notation("a9").is_none());
        assert!(Square::from_notation("e").is_none());
    }

    #[test]
    fn test_all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[9], Square::new(1, 1).unwrap());
        assert_eq!(squares[63], Square::new(7, 7).unwrap());
    }
}
