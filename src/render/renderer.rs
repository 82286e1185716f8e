use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::game::{GameConfig, GameState, Position};
use crate::gate::Verdict;
use crate::metrics::GameMetrics;

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Head,
    Body,
    Food,
    Empty,
}

impl Cell {
    pub fn at(state: &GameState, pos: Position) -> Self {
        if pos == state.snake.head() {
            Cell::Head
        } else if state.snake.occupies(pos) {
            Cell::Body
        } else if pos == state.food {
            Cell::Food
        } else {
            Cell::Empty
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            Cell::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Body => Span::styled("● ", Style::default().fg(Color::Blue)),
            Cell::Food => Span::styled(
                "◆ ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        config: &GameConfig,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.game_over {
            frame.render_widget(self.render_game_over(state, config), game_area);
        } else if !Self::board_fits(game_area, state.grid_size) {
            frame.render_widget(self.render_too_small(state.grid_size), game_area);
        } else {
            frame.render_widget(self.render_grid(state), game_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Each cell is two columns wide, plus one border cell on every side
    fn board_fits(area: Rect, grid_size: usize) -> bool {
        let width = grid_size * 2 + 2;
        let height = grid_size + 2;
        usize::from(area.width) >= width && usize::from(area.height) >= height
    }

    fn render_too_small(&self, grid_size: usize) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "The {0}x{0} board needs at least {1} columns and {2} rows",
                    grid_size,
                    ((grid_size * 2 + 2) * 10).div_ceil(8),
                    grid_size + 8
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..state.grid_size)
            .map(|y| {
                let spans: Vec<Span> = (0..state.grid_size)
                    .map(|x| Cell::at(state, Position::new(x as i32, y as i32)).span())
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::LightBlue))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Unlocked: ", label),
            Span::styled(metrics.eligible_runs.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, config: &GameConfig) -> Paragraph<'_> {
        let verdict = Verdict::for_score(state.score, config.eligibility_threshold);
        let (accent, border) = match verdict {
            Verdict::Eligible => (Color::LightGreen, Color::Green),
            Verdict::NotEligible => (Color::LightRed, Color::Red),
        };

        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                verdict.headline(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(code) = verdict.code_line(config) {
            text.push(Line::from(Span::styled(
                code,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push(Line::from(""));
        }

        text.extend([
            Line::from(Span::styled(
                verdict.message(config.eligibility_threshold),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ]);

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" / drag to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &GameState) -> String {
        draw_sized(state, 100, 32)
    }

    fn draw_sized(state: &GameState, width: u16, height: u16) -> String {
        let config = GameConfig::default();
        let metrics = GameMetrics::new();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, state, &config, &metrics))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_cell_classification() {
        let mut state = GameState::initial(&GameConfig::default());
        state.snake = Snake::from_body(
            vec![Position::new(3, 3), Position::new(2, 3)],
            Direction::Right,
        );
        state.food = Position::new(7, 7);

        assert_eq!(Cell::at(&state, Position::new(3, 3)), Cell::Head);
        assert_eq!(Cell::at(&state, Position::new(2, 3)), Cell::Body);
        assert_eq!(Cell::at(&state, Position::new(7, 7)), Cell::Food);
        assert_eq!(Cell::at(&state, Position::new(0, 0)), Cell::Empty);
    }

    #[test]
    fn test_running_game_shows_score() {
        let mut state = GameState::initial(&GameConfig::default());
        state.score = 4;

        let screen = draw(&state);

        assert!(screen.contains("Score: 4"));
        assert!(screen.contains("Unlocked: 0"));
        assert!(screen.contains("Snake"));
    }

    #[test]
    fn test_eligible_game_over_reveals_code() {
        let mut state = GameState::initial(&GameConfig::default());
        state.score = 10;
        state.game_over = true;

        let screen = draw(&state);

        assert!(screen.contains("Code : W3W0KD3T0K"));
        assert!(screen.contains("Congratulations! You reached the required score."));
    }

    #[test]
    fn test_short_game_over_asks_to_try_again() {
        let mut state = GameState::initial(&GameConfig::default());
        state.score = 9;
        state.game_over = true;

        let screen = draw(&state);

        assert!(!screen.contains("W3W0KD3T0K"));
        assert!(screen.contains("Try again to reach a score of 10 or more."));
    }

    #[test]
    fn test_short_terminal_warns_instead_of_clipping() {
        let state = GameState::initial(&GameConfig::default());

        let screen = draw_sized(&state, 100, 20);

        assert!(screen.contains("Terminal too small"));
        assert!(!screen.contains(" Snake "));
    }

    #[test]
    fn test_narrow_terminal_warns_instead_of_clipping() {
        let state = GameState::initial(&GameConfig::default());

        let screen = draw_sized(&state, 40, 32);

        assert!(screen.contains("too small"));
    }

    #[test]
    fn test_board_fits_exactly() {
        assert!(Renderer::board_fits(Rect::new(0, 0, 42, 22), 20));
        assert!(!Renderer::board_fits(Rect::new(0, 0, 42, 21), 20));
        assert!(!Renderer::board_fits(Rect::new(0, 0, 41, 22), 20));
    }
}
