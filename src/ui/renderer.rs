use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Cell, Game};
use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};

pub fn ui<R: Rng>(f: &mut Frame, game: &Game<R>, flash_rows: &[usize]) {
    let size = f.size();

    let board_height = BOARD_HEIGHT as u16 + 2;
    let board_width = BOARD_WIDTH as u16 * 2 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(15),
            Constraint::Length(board_width),
            Constraint::Length(17),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let stats_area = horizontal_chunks[1];
    let board_area = horizontal_chunks[2];
    let help_area = horizontal_chunks[3];

    render_board(f, game, flash_rows, board_area);
    render_stats(f, game, stats_area);
    render_help(f, help_area);

    if game.is_game_over() {
        render_game_over_overlay(f, game, board_area);
    }
}

/// `flash_rows` are indices from before a line clear. The whole band at each
/// index is painted over, since its contents have already shifted down.
fn render_board<R: Rng>(f: &mut Frame, game: &Game<R>, flash_rows: &[usize], area: Rect) {
    let mut cells: Vec<Vec<Cell>> = game.board().rows().iter().map(|row| row.to_vec()).collect();

    if let Some(piece) = game.current_piece() {
        for (x, y) in piece.get_blocks() {
            if x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32 {
                cells[y as usize][x as usize] = Cell::Filled(piece.color);
            }
        }
    }

    let mut board_lines = Vec::new();

    for (y, row) in cells.iter().enumerate() {
        let flashing = flash_rows.contains(&y);
        let mut line_spans = Vec::new();
        for (x, cell) in row.iter().enumerate() {
            match cell {
                _ if flashing => {
                    line_spans.push(Span::styled("▓▓", Style::default().fg(Color::White)));
                }
                Cell::Empty => {
                    if (x + y) % 2 == 0 {
                        line_spans.push(Span::styled("░░", Style::default().fg(Color::DarkGray)));
                    } else {
                        line_spans.push(Span::styled("  ", Style::default()));
                    }
                }
                Cell::Filled(color) => {
                    line_spans.push(Span::styled("██", Style::default().fg(*color)));
                }
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default()
               .borders(Borders::ALL)
               .title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_stats<R: Rng>(f: &mut Frame, game: &Game<R>, area: Rect) {
    let stats_text = vec![
        Line::from(vec![Span::styled("Score", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.score().to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Lines", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.lines_cleared().to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Pieces", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.pieces_locked().to_string())]),
    ];

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(stats_widget, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::raw("W/↑  rotate")]),
        Line::from(vec![Span::raw("A/←  left")]),
        Line::from(vec![Span::raw("D/→  right")]),
        Line::from(vec![Span::raw("S/↓  drop")]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R    restart")]),
        Line::from(vec![Span::raw("Q    quit")]),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));

    f.render_widget(help_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay<R: Rng>(f: &mut Frame, game: &Game<R>, area: Rect) {
    let popup_area = centered_rect(80, 40, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Score: {}", game.score()))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R to restart")]),
        Line::from(vec![Span::raw("Q to quit")]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Finished"))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use rand::{rngs::StdRng, SeedableRng};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(game: &Game) -> String {
        draw_flashing(game, &[])
    }

    fn draw_flashing(game: &Game, flash_rows: &[usize]) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, game, flash_rows)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn draws_score_panel() {
        let game = Game::with_seed(5);
        let screen = draw(&game);
        assert!(screen.contains("Score"));
        assert!(screen.contains("blockfall"));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn draws_game_over_overlay() {
        let mut game = Game::with_seed(5);
        while !game.is_game_over() {
            game.tick();
        }
        assert!(draw(&game).contains("GAME OVER"));
    }

    #[test]
    fn flashed_row_covers_filled_cells() {
        let mut board = Board::new();
        for x in 0..5 {
            board.set_cell(x, 19, Color::Green).unwrap();
        }
        let game = Game::with_board(board, StdRng::seed_from_u64(1));

        let screen = draw_flashing(&game, &[19]);

        assert_eq!(screen.matches('▓').count(), BOARD_WIDTH * 2);
        assert_eq!(draw(&game).matches('▓').count(), 0);
    }
}
