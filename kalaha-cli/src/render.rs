//! Text rendering of a table
//!
//! NORTH is drawn on top, right to left, so each pit sits above the pit it
//! faces. Kalahas are at the ends: NORTH's on the left, SOUTH's on the right.
//!
//! ```text
//!        6    5    4    3    2    1
//!     [  6][  6][  6][  6][  6][  6]
//! [  0]                              [  0]
//!     [  6][  6][  6][  6][  6][  6]
//!        1    2    3    4    5    6
//! ```

use std::fmt::Write;

use kalaha_service::GameView;

const CELL: usize = 5;

pub fn render_board(view: &GameView) -> String {
    let pits = view.southern_pits.len();
    let row_width = pits * CELL;
    let mut out = String::new();

    let north_labels: String = (1..=pits).rev().map(|n| format!("{:>4} ", n)).collect();
    let north_row: String = view.northern_pits.iter().rev().map(|&s| pit_cell(s)).collect();
    let south_row: String = view.southern_pits.iter().map(|&s| pit_cell(s)).collect();
    let south_labels: String = (1..=pits).map(|n| format!("{:>4} ", n)).collect();

    let _ = writeln!(out, "{:5}{}  {}", "", north_labels, view.northern_player);
    let _ = writeln!(out, "{:5}{}", "", north_row);
    let _ = writeln!(
        out,
        "{}{:width$}{}",
        pit_cell(view.northern_kalaha),
        "",
        pit_cell(view.southern_kalaha),
        width = row_width
    );
    let _ = writeln!(out, "{:5}{}", "", south_row);
    let _ = writeln!(out, "{:5}{}  {}", "", south_labels, view.southern_player);

    out
}

/// One line describing whose turn it is or how the game ended
pub fn render_status(view: &GameView) -> String {
    match view.winner {
        Some(winner) => format!(
            "Game over: {} {} - {} {} ({} wins)",
            view.southern_player,
            view.southern_kalaha,
            view.northern_kalaha,
            view.northern_player,
            match winner.side() {
                Some(side) => view.player(side).to_string(),
                None => "nobody".to_string(),
            }
        ),
        None => format!("{} to move ({})", view.player_to_move(), view.current_player),
    }
}

fn pit_cell(stones: u32) -> String {
    format!("[{:>3}]", stones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalaha_core::{Board, Game, Side};

    fn view(south: &[u32], north: &[u32]) -> GameView {
        let board = Board::from_parts(south.to_vec(), north.to_vec(), 2, 9).unwrap();
        GameView::new(1, "alice", "bob", &Game::restore(board, Side::South, false))
    }

    #[test]
    fn test_north_row_is_reversed() {
        let text = render_board(&view(&[1, 2, 3], &[4, 5, 6]));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1].trim(), "[  6][  5][  4]");
        assert_eq!(lines[3].trim(), "[  1][  2][  3]");
    }

    #[test]
    fn test_kalahas_at_the_ends() {
        let text = render_board(&view(&[1, 2, 3], &[4, 5, 6]));
        let kalaha_line = text.lines().nth(2).unwrap();

        assert!(kalaha_line.starts_with("[  9]"));
        assert!(kalaha_line.ends_with("[  2]"));
    }

    #[test]
    fn test_status_lines() {
        let ongoing = view(&[1, 2, 3], &[4, 5, 6]);
        assert_eq!(render_status(&ongoing), "alice to move (SOUTH)");

        let board = Board::from_parts(vec![0, 0], vec![0, 0], 5, 3).unwrap();
        let ended = GameView::new(1, "alice", "bob", &Game::restore(board, Side::North, true));
        assert_eq!(render_status(&ended), "Game over: alice 5 - 3 bob (alice wins)");
    }
}
