use super::{IllegalMove, Rules, TokenizeError, UnknownToken};
use crate::{Coord, Piece, PieceIds, Placement, Rank, Side, SquareKind};
use tracing::trace;

/// The reference draughts rules.
///
/// Legality is deliberately loose: any piece may be lifted and dropped on any
/// empty playable square. Captures, turn order, promotion, and win detection
/// belong to richer engines, which replace the legality methods without
/// touching the board contract.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Draughts {
    ids: PieceIds,
}

impl Draughts {
    /// Whether `at` is an empty playable square.
    fn is_available_target(&self, placement: &Placement, at: Coord) -> bool {
        let available =
            placement.square(at).is_playable() && matches!(placement.piece(at), Ok(None));

        trace!("target {} available: {}", at, available);

        available
    }
}

impl Rules for Draughts {
    fn tokenize(&self, s: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(s.chars().map(String::from).collect())
    }

    fn parse_token(&mut self, token: &str) -> Result<Option<Piece>, UnknownToken> {
        let (side, rank) = match token {
            "b" => (Side::Black, Rank::Man),
            "B" => (Side::Black, Rank::King),
            "r" => (Side::Red, Rank::Man),
            "R" => (Side::Red, Rank::King),
            "-" | "_" => return Ok(None),
            _ => return Err(UnknownToken(token.to_string())),
        };

        Ok(Some(Piece::new(self.ids.mint(), side, rank)))
    }

    fn render_cell(&self, placement: &Placement, at: Coord) -> String {
        match placement.square(at) {
            SquareKind::OutOfBounds => format!("<error at {}>", at),
            SquareKind::Inactive => " ".to_string(),
            SquareKind::Playable => match placement.piece(at) {
                Ok(Some(piece)) => {
                    let cell = match piece.side() {
                        Side::Black => 'b',
                        Side::Red => 'r',
                    };

                    match piece.rank() {
                        Rank::Man => cell,
                        Rank::King => cell.to_ascii_uppercase(),
                    }
                    .to_string()
                }

                _ => "_".to_string(),
            },
        }
    }

    fn can_select(&self, placement: &Placement, at: Coord) -> bool {
        matches!(placement.piece(at), Ok(Some(_)))
    }

    fn is_valid_move(&self, placement: &Placement, from: Coord, to: Coord) -> bool {
        matches!(placement.piece(from), Ok(Some(_))) && self.is_available_target(placement, to)
    }

    fn execute_move(
        &self,
        placement: &mut Placement,
        from: Coord,
        to: Coord,
    ) -> Result<(), IllegalMove> {
        let Some(piece) = placement.piece(from)? else {
            return Err(IllegalMove::VacantSource(from));
        };

        if !self.is_available_target(placement, to) {
            return Err(IllegalMove::UnavailableTarget(to));
        }

        placement.take(from)?;
        placement.place(Some(piece), to)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{checkerboard, InvalidCoordinate};
    use test_strategy::proptest;

    #[test]
    fn occupied_cell_tokens_parse_to_pieces() {
        let mut rules = Draughts::default();

        for (token, side, rank) in [
            ("b", Side::Black, Rank::Man),
            ("B", Side::Black, Rank::King),
            ("r", Side::Red, Rank::Man),
            ("R", Side::Red, Rank::King),
        ] {
            let piece = rules.parse_token(token).unwrap().unwrap();
            assert_eq!(piece.side(), side);
            assert_eq!(piece.rank(), rank);
        }
    }

    #[proptest]
    fn empty_cell_tokens_parse_to_no_piece() {
        let mut rules = Draughts::default();
        assert_eq!(rules.parse_token("-"), Ok(None));
        assert_eq!(rules.parse_token("_"), Ok(None));
    }

    #[proptest]
    fn tokens_outside_the_vocabulary_are_rejected(
        #[filter(!["b", "B", "r", "R", "-", "_"].contains(&#token.as_str()))] token: String,
    ) {
        assert_eq!(
            Draughts::default().parse_token(&token),
            Err(UnknownToken(token.clone()))
        );
    }

    #[proptest]
    fn parsed_pieces_have_distinct_identities() {
        let mut rules = Draughts::default();
        let p = rules.parse_token("b")?.unwrap();
        let q = rules.parse_token("b")?.unwrap();
        assert_ne!(p.id(), q.id());
    }

    #[proptest]
    fn tokenize_splits_one_token_per_character(s: String) {
        assert_eq!(
            Draughts::default().tokenize(&s),
            Ok(s.chars().map(String::from).collect())
        );
    }

    #[proptest]
    fn render_cell_distinguishes_square_kinds(p: Piece) {
        let rules = Draughts::default();
        let mut placement = checkerboard(8, 8);

        assert_eq!(rules.render_cell(&placement, Coord::new(1, 1)), " ");
        assert_eq!(rules.render_cell(&placement, Coord::new(2, 1)), "_");

        assert_eq!(
            rules.render_cell(&placement, Coord::new(0, 0)),
            format!("<error at {}>", Coord::new(0, 0))
        );

        placement.place(Some(p), Coord::new(2, 1))?;

        let expected = match (p.side(), p.rank()) {
            (Side::Black, Rank::Man) => "b",
            (Side::Black, Rank::King) => "B",
            (Side::Red, Rank::Man) => "r",
            (Side::Red, Rank::King) => "R",
        };

        assert_eq!(rules.render_cell(&placement, Coord::new(2, 1)), expected);
    }

    #[proptest]
    fn pieces_can_be_selected_wherever_they_stand(p: Piece) {
        let rules = Draughts::default();
        let mut placement = checkerboard(8, 8);
        placement.place(Some(p), Coord::new(2, 1))?;

        assert!(rules.can_select(&placement, Coord::new(2, 1)));
        assert!(!rules.can_select(&placement, Coord::new(4, 1)));
        assert!(!rules.can_select(&placement, Coord::new(1, 1)));
        assert!(!rules.can_select(&placement, Coord::new(0, 5)));
    }

    #[proptest]
    fn moves_require_an_occupied_source_and_an_available_target(p: Piece, q: Piece) {
        let rules = Draughts::default();
        let mut placement = checkerboard(8, 8);
        placement.place(Some(p), Coord::new(2, 1))?;

        assert!(rules.is_valid_move(&placement, Coord::new(2, 1), Coord::new(4, 1)));
        assert!(!rules.is_valid_move(&placement, Coord::new(2, 1), Coord::new(1, 1)));
        assert!(!rules.is_valid_move(&placement, Coord::new(2, 1), Coord::new(9, 9)));
        assert!(!rules.is_valid_move(&placement, Coord::new(4, 1), Coord::new(6, 1)));

        placement.place(Some(q), Coord::new(4, 1))?;
        assert!(!rules.is_valid_move(&placement, Coord::new(2, 1), Coord::new(4, 1)));
    }

    #[proptest]
    fn execute_move_transfers_the_piece(p: Piece) {
        let rules = Draughts::default();
        let mut placement = checkerboard(8, 8);
        placement.place(Some(p), Coord::new(2, 1))?;

        assert_eq!(
            rules.execute_move(&mut placement, Coord::new(2, 1), Coord::new(4, 1)),
            Ok(())
        );

        assert_eq!(placement.piece(Coord::new(2, 1)), Ok(None));
        assert_eq!(placement.piece(Coord::new(4, 1)), Ok(Some(p)));
    }

    #[proptest]
    fn execute_move_rejects_a_vacant_source(p: Piece) {
        let rules = Draughts::default();
        let mut placement = checkerboard(8, 8);
        placement.place(Some(p), Coord::new(2, 1))?;

        let before = placement.clone();

        assert_eq!(
            rules.execute_move(&mut placement, Coord::new(4, 1), Coord::new(6, 1)),
            Err(IllegalMove::VacantSource(Coord::new(4, 1)))
        );

        assert_eq!(placement, before);
    }

    #[proptest]
    fn execute_move_rejects_an_unavailable_target(p: Piece, q: Piece) {
        let rules = Draughts::default();
        let mut placement = checkerboard(8, 8);
        placement.place(Some(p), Coord::new(2, 1))?;
        placement.place(Some(q), Coord::new(4, 1))?;

        let before = placement.clone();

        for to in [Coord::new(4, 1), Coord::new(1, 1), Coord::new(9, 9)] {
            assert_eq!(
                rules.execute_move(&mut placement, Coord::new(2, 1), to),
                Err(IllegalMove::UnavailableTarget(to))
            );
        }

        assert_eq!(placement, before);
    }

    #[proptest]
    fn execute_move_rejects_an_out_of_bounds_source(
        #[filter(!(1..=8).contains(&#from.x) || !(1..=8).contains(&#from.y))] from: Coord,
    ) {
        let rules = Draughts::default();
        let mut placement = checkerboard(8, 8);

        assert_eq!(
            rules.execute_move(&mut placement, from, Coord::new(4, 1)),
            Err(IllegalMove::InvalidCoordinate(InvalidCoordinate(from)))
        );
    }
}
