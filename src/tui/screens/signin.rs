//! Sign-in screen
//!
//! Static by design: the email field and provider entries carry no sign-in
//! logic. The screen's one real action is navigating to the sign-up wizard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::{two_panel, AppLayout};
use crate::tui::widgets::input::{render_text_field, TextInput};

/// Which control is currently focused on the sign-in screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigninField {
    #[default]
    Email,
    Continue,
    CreateAccount,
}

impl SigninField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Continue,
            Self::Continue => Self::CreateAccount,
            Self::CreateAccount => Self::Email,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Email => Self::CreateAccount,
            Self::Continue => Self::Email,
            Self::CreateAccount => Self::Continue,
        }
    }
}

/// State for the sign-in screen
#[derive(Debug, Clone)]
pub struct SigninScreenState {
    /// Currently focused control
    pub focus: SigninField,

    /// Email input (accepted but never validated or sent anywhere)
    pub email_input: TextInput,
}

impl Default for SigninScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl SigninScreenState {
    pub fn new() -> Self {
        Self {
            focus: SigninField::Email,
            email_input: TextInput::new()
                .label("Email address")
                .placeholder("Email address"),
        }
    }
}

/// Handle key input for the sign-in screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.quit();
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.signin.focus = app.signin.focus.prev();
            } else {
                app.signin.focus = app.signin.focus.next();
            }
        }

        KeyCode::BackTab => {
            app.signin.focus = app.signin.focus.prev();
        }

        KeyCode::Enter => match app.signin.focus {
            // No backend: Continue deliberately does nothing
            SigninField::Email | SigninField::Continue => {}
            SigninField::CreateAccount => {
                app.open_signup();
            }
        },

        KeyCode::Backspace => {
            if app.signin.focus == SigninField::Email {
                app.signin.email_input.backspace();
            }
        }

        KeyCode::Delete => {
            if app.signin.focus == SigninField::Email {
                app.signin.email_input.delete();
            }
        }

        KeyCode::Left => {
            if app.signin.focus == SigninField::Email {
                app.signin.email_input.move_left();
            }
        }

        KeyCode::Right => {
            if app.signin.focus == SigninField::Email {
                app.signin.email_input.move_right();
            }
        }

        KeyCode::Home => {
            if app.signin.focus == SigninField::Email {
                app.signin.email_input.move_start();
            }
        }

        KeyCode::End => {
            if app.signin.focus == SigninField::Email {
                app.signin.email_input.move_end();
            }
        }

        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            if app.signin.focus == SigninField::Email {
                app.signin.email_input.insert(c);
            }
        }

        _ => {}
    }
}

/// Handle pasted text on the sign-in screen
pub fn handle_paste(app: &mut App, text: &str) {
    if app.signin.focus == SigninField::Email {
        for c in text.chars().filter(|c| !c.is_control()) {
            app.signin.email_input.insert(c);
        }
    }
}

/// Render the sign-in screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Brand title
    let title = Paragraph::new(Line::from(Span::styled(
        "TMA Library",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(title, layout.title);

    // Card
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let card_inner = card.inner(layout.card);
    frame.render_widget(card, layout.card);

    let (info, form) = two_panel(card_inner);
    render_info_panel(frame, info);
    render_form_panel(frame, app, form);

    // Hint bar
    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Select  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), layout.hint_bar);
}

/// Left info panel: welcome text
fn render_info_panel(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Welcome Back!",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::raw(""),
        Line::from(Span::styled(
            "Sign in to continue",
            Style::default().fg(Color::White),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Right form panel: heading, email input, actions
fn render_form_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Create-account link
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Email
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Continue button
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Or separator
            Constraint::Length(1), // Providers
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help hint
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let heading = Paragraph::new(Span::styled(
        "Sign in",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, chunks[0]);

    let link_focused = app.signin.focus == SigninField::CreateAccount;
    let link_style = if link_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Blue)
    };
    let link = Line::from(vec![
        Span::styled("New user? ", Style::default().fg(Color::White)),
        Span::styled("Create an account", link_style),
    ]);
    frame.render_widget(Paragraph::new(link), chunks[1]);

    render_text_field(
        frame,
        chunks[3],
        &app.signin.email_input,
        app.signin.focus == SigninField::Email,
        false,
        true,
    );

    let button_focused = app.signin.focus == SigninField::Continue;
    let button_style = if button_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("[ Continue ]", button_style)),
        chunks[5],
    );

    let separator = Line::from(Span::styled(
        "──────────── Or ────────────",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(separator), chunks[7]);

    let providers = Line::from(Span::styled(
        "[ Google ]  [ Facebook ]  [ Apple ]",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(providers), chunks[8]);

    let help = Line::from(Span::styled(
        "Get help signing in",
        Style::default().fg(Color::Blue),
    ));
    frame.render_widget(Paragraph::new(help), chunks[10]);
}
