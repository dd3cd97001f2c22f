use serde::Serialize;

/// 모달에 띄우는 글
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: &'static str,
    pub title: &'static str,
    pub lead: &'static str,
    pub section: Option<&'static str>,
    pub points: &'static [&'static str],
    pub closing: Option<&'static str>,
}

pub static NOT_FOUND: Article = Article {
    id: "",
    title: "Article Not Found",
    lead: "The requested article could not be found. Please try another one.",
    section: None,
    points: &[],
    closing: None,
};

pub static ARTICLES: [Article; 3] = [
    Article {
        id: "kings-gambit",
        title: "Mastering the King's Gambit",
        lead: "The King's Gambit is a bold opening that begins with 1.e4 e5 2.f4. By offering a pawn \
               sacrifice, White aims to seize control of the center and launch a rapid attack against \
               Black's position.",
        section: Some("Main Variations"),
        points: &[
            "Accepted Variation: 2...exf4",
            "Declined Variation: 2...Bc5",
            "Falkbeer Countergambit: 2...d5",
        ],
        closing: Some("Study these lines to add this aggressive weapon to your repertoire!"),
    },
    Article {
        id: "sicilian-defense",
        title: "Sicilian Defense: Dragon Variation",
        lead: "The Dragon Variation is one of the most aggressive and theoretical lines in the Sicilian \
               Defense. It arises after the moves: 1.e4 c5 2.Nf3 d6 3.d4 cxd4 4.Nxd4 Nf6 5.Nc3 g6",
        section: Some("Key Ideas"),
        points: &[
            "Black fianchettoes the bishop to g7, controlling the long diagonal",
            "Both sides castle on opposite sides, leading to attacking races",
            "The famous Yugoslav Attack is White's main response: 6.Be3 Bg7 7.f3 O-O 8.Qd2 Nc6 9.Bc4",
        ],
        closing: None,
    },
    Article {
        id: "endgame-techniques",
        title: "Essential Endgame Techniques",
        lead: "Mastering endgames is crucial for converting advantages into victories. Here are key \
               techniques:",
        section: Some("Fundamental Principles"),
        points: &[
            "King Activation: In endgames, the king becomes a strong piece",
            "Passed Pawns: Creating and advancing passed pawns is often decisive",
            "Opposition: A key concept in king and pawn endgames",
            "Zugzwang: Forcing your opponent to make a detrimental move",
        ],
        closing: Some("Practice basic checkmates (K+Q vs. K, K+R vs. K) until they become automatic."),
    },
];

/// id로 글 찾기. 없으면 `NOT_FOUND`
pub fn lookup(id: &str) -> &'static Article {
    ARTICLES.iter().find(|a| a.id == id).unwrap_or(&NOT_FOUND)
}

pub fn is_known(id: &str) -> bool {
    ARTICLES.iter().any(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        let article = lookup("sicilian-defense");
        assert_eq!(article.title, "Sicilian Defense: Dragon Variation");
        assert_eq!(article.points.len(), 3);
        assert!(article.closing.is_none());
        assert_eq!(lookup("endgame-techniques").points.len(), 4);
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("queens-gambit"), &NOT_FOUND);
        assert_eq!(lookup(""), &NOT_FOUND);
        assert!(!is_known(""));
        assert!(is_known("kings-gambit"));
    }
}
