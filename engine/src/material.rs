use std::fmt;

use serde::Serialize;

use crate::piece::{Color, Piece};

/// 백 기준 기물 점수 차. 양수면 백 우세, 음수면 흑 우세
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaterialAdvantage {
    pub score: i32,
}

impl MaterialAdvantage {
    /// 앞선 진영. 동점이면 None
    pub fn leader(&self) -> Option<Color> {
        match self.score {
            s if s > 0 => Some(Color::White),
            s if s < 0 => Some(Color::Black),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.leader() {
            Some(Color::White) => "White is ahead",
            Some(Color::Black) => "Black is ahead",
            None => "Material is equal",
        }
    }
}

impl fmt::Display for MaterialAdvantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.score, self.label())
    }
}

/// 심볼 하나의 점수. 모르는 심볼은 0점
pub fn symbol_value(symbol: &str) -> i32 {
    Piece::from_symbol(symbol).map_or(0, |p| p.value())
}

pub fn side_score<I>(pieces: I) -> i32
where
    I: IntoIterator<Item = Piece>,
{
    pieces.into_iter().map(|p| p.value()).sum()
}

/// 백 기물 합 - 흑 기물 합
pub fn advantage<W, B>(white: W, black: B) -> MaterialAdvantage
where
    W: IntoIterator<Item = Piece>,
    B: IntoIterator<Item = Piece>,
{
    MaterialAdvantage {
        score: side_score(white) - side_score(black),
    }
}

/// 심볼 목록 버전. JS 쪽에서 글리프 배열을 그대로 넘길 때 사용
pub fn advantage_of_symbols<'a, W, B>(white: W, black: B) -> MaterialAdvantage
where
    W: IntoIterator<Item = &'a str>,
    B: IntoIterator<Item = &'a str>,
{
    let white: i32 = white.into_iter().map(symbol_value).sum();
    let black: i32 = black.into_iter().map(symbol_value).sum();
    MaterialAdvantage { score: white - black }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_value() {
        assert_eq!(symbol_value("♕"), 9);
        assert_eq!(symbol_value("♛"), 9);
        assert_eq!(symbol_value("♔"), 0);
        assert_eq!(symbol_value("♟"), 1);
        assert_eq!(symbol_value("?"), 0);
        assert_eq!(symbol_value(""), 0);
    }

    #[test]
    fn test_advantage_of_symbols() {
        let adv = advantage_of_symbols(["♕", "♖"], ["♜", "♟", "x"]);
        assert_eq!(adv.score, 8);
        assert_eq!(adv.leader(), Some(Color::White));

        let adv = advantage_of_symbols(["♘"], ["♛"]);
        assert_eq!(adv.score, -6);
        assert_eq!(adv.label(), "Black is ahead");
    }

    #[test]
    fn test_display() {
        let adv = MaterialAdvantage { score: 0 };
        assert_eq!(adv.to_string(), "0 (Material is equal)");
        let adv = MaterialAdvantage { score: 3 };
        assert_eq!(adv.to_string(), "3 (White is ahead)");
    }
}
