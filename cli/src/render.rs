use tilesweep_core::{CellView, GameSession, Outcome, SessionListener};

pub fn cell_glyph(view: CellView) -> char {
    match view {
        CellView::Covered => '#',
        CellView::Flagged => 'F',
        CellView::IncorrectFlag => 'x',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Mine => '*',
        CellView::Exploded => '@',
    }
}

/// Text grid, one line per row, with column and row indices mod 10.
pub fn render_board<L: SessionListener>(session: &GameSession<L>) -> String {
    let dimension = session.dimension();
    let mut out = String::from("   ");
    for col in 0..dimension {
        out.push(char::from(b'0' + col % 10));
    }
    out.push('\n');

    for row in 0..dimension {
        out.push_str(&format!("{row:>2} "));
        for col in 0..dimension {
            out.push(cell_glyph(session.cell_view((col, row))));
        }
        out.push('\n');
    }
    out
}

pub fn status_line<L: SessionListener>(session: &GameSession<L>, elapsed_secs: u64) -> String {
    let status = match session.outcome() {
        Outcome::Pending => "playing",
        Outcome::Won => "won",
        Outcome::Lost => "lost",
    };
    format!(
        "flags: {}  time: {}s  status: {}",
        session.flags_remaining(),
        elapsed_secs,
        status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilesweep_core::Board;

    #[test]
    fn renders_rows_as_lines() {
        let board = Board::from_mine_coords(3, &[(2, 0)]).unwrap();
        let mut session = GameSession::new(board);
        session.toggle_flag((2, 0)).unwrap();
        session.reveal((0, 2)).unwrap();

        let text = render_board(&session);
        assert_eq!(text, "   012\n 0 .1F\n 1 .11\n 2 ...\n");
    }

    #[test]
    fn renders_loss() {
        let board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut session = GameSession::new(board);
        session.toggle_flag((1, 1)).unwrap();
        session.reveal((0, 0)).unwrap();

        assert_eq!(render_board(&session), "   01\n 0 @1\n 1 1x\n");
        assert_eq!(status_line(&session, 7), "flags: 0  time: 7s  status: lost");
    }
}
