//! Sign-up wizard screen
//!
//! Two-step wizard with form fields, tab navigation, validation, the
//! password strength meter, and the simulated account creation. The screen
//! owns the three countdowns (email debounce, account creation, redirect);
//! they live and die with this screen instance.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::settings::Settings;
use crate::models::form::{SignupStep, Submission};
use crate::models::reference::{birth_years, COUNTRIES, MONTHS};
use crate::models::strength::{StrengthLabel, STRENGTH_SEGMENTS};
use crate::services::signup::{FlowCommand, SignupFlow};
use crate::tui::app::App;
use crate::tui::layout::{centered_rect_fixed, two_panel, AppLayout};
use crate::tui::timer::{self, Countdown};
use crate::tui::widgets::input::{render_text_field, TextInput};
use crate::tui::widgets::select::{render_select_field, SelectField};

/// Which field is focused on the credentials step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialsField {
    #[default]
    Email,
    Password,
    ConfirmPassword,
}

impl CredentialsField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::ConfirmPassword,
            Self::ConfirmPassword => Self::Email,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Email => Self::ConfirmPassword,
            Self::Password => Self::Email,
            Self::ConfirmPassword => Self::Password,
        }
    }
}

/// Which field is focused on the profile step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    FirstName,
    LastName,
    BirthMonth,
    BirthYear,
    Country,
}

impl ProfileField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::FirstName => Self::LastName,
            Self::LastName => Self::BirthMonth,
            Self::BirthMonth => Self::BirthYear,
            Self::BirthYear => Self::Country,
            Self::Country => Self::FirstName,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::FirstName => Self::Country,
            Self::LastName => Self::FirstName,
            Self::BirthMonth => Self::LastName,
            Self::BirthYear => Self::BirthMonth,
            Self::Country => Self::BirthYear,
        }
    }
}

/// State for the sign-up screen
///
/// Everything here, countdowns included, is rebuilt on navigation; nothing
/// survives leaving the screen.
#[derive(Debug, Clone)]
pub struct SignupScreenState {
    /// The wizard state machine
    pub flow: SignupFlow,

    /// Focused field on the credentials step
    pub credentials_focus: CredentialsField,

    /// Focused field on the profile step
    pub profile_focus: ProfileField,

    /// Reveal the password fields (toggled, both fields together)
    pub show_password: bool,

    /// Email input
    pub email_input: TextInput,

    /// Password input
    pub password_input: TextInput,

    /// Confirm password input
    pub confirm_input: TextInput,

    /// First name input
    pub first_name_input: TextInput,

    /// Last name input
    pub last_name_input: TextInput,

    /// Birth month select
    pub month_select: SelectField,

    /// Birth year select
    pub year_select: SelectField,

    /// Country select
    pub country_select: SelectField,

    /// Email validation debounce countdown
    pub email_debounce: Option<Countdown>,

    /// Simulated account-creation countdown
    pub create_account: Option<Countdown>,

    /// Post-success redirect countdown
    pub redirect: Option<Countdown>,
}

impl Default for SignupScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupScreenState {
    /// Create a fresh sign-up screen state with empty fields
    pub fn new() -> Self {
        Self {
            flow: SignupFlow::new(),
            credentials_focus: CredentialsField::Email,
            profile_focus: ProfileField::FirstName,
            show_password: false,
            email_input: TextInput::new()
                .label("Email address")
                .placeholder("Email address"),
            password_input: TextInput::new()
                .label("Password")
                .placeholder("Password")
                .masked(),
            confirm_input: TextInput::new()
                .label("Confirm Password")
                .placeholder("Confirm Password")
                .masked(),
            first_name_input: TextInput::new()
                .label("First name")
                .placeholder("First name"),
            last_name_input: TextInput::new().label("Last name").placeholder("Last name"),
            month_select: SelectField::new(
                "Month",
                "Select month",
                MONTHS.iter().map(|m| m.to_string()).collect(),
            ),
            year_select: SelectField::new(
                "Year",
                "Select year",
                birth_years().iter().map(|y| y.to_string()).collect(),
            ),
            country_select: SelectField::new(
                "Country/Region",
                "Select a country",
                COUNTRIES.iter().map(|c| c.to_string()).collect(),
            ),
            email_debounce: None,
            create_account: None,
            redirect: None,
        }
    }

    /// Push the email input into the flow and restart the debounce
    fn sync_email(&mut self, settings: &Settings) {
        let command = self.flow.set_email(self.email_input.value().to_string());
        if command == FlowCommand::RestartEmailDebounce {
            self.email_debounce = Some(Countdown::start(settings.email_debounce()));
        }
    }

    /// Advance time-driven state; returns true when the success redirect
    /// asks to navigate back to sign-in
    pub fn on_tick(&mut self, settings: &Settings) -> bool {
        if timer::poll(&mut self.email_debounce) {
            self.flow.email_debounce_elapsed();
        }

        if timer::poll(&mut self.create_account) {
            if let Some(FlowCommand::StartRedirect) = self.flow.create_account_completed() {
                self.redirect = Some(Countdown::start(settings.redirect_delay()));
            }
        }

        if timer::poll(&mut self.redirect) {
            if let Some(FlowCommand::NavigateToSignIn) = self.flow.redirect_elapsed() {
                return true;
            }
        }

        false
    }
}

/// Handle key input for the sign-up screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.signup.flow.submission() {
        // Success view: wait out the redirect
        Submission::Succeeded => return,
        // Request running: controls are disabled
        Submission::InFlight => return,
        Submission::Idle => {}
    }

    match app.signup.flow.step() {
        SignupStep::Credentials => handle_credentials_key(app, key),
        SignupStep::Profile => handle_profile_key(app, key),
    }
}

/// Clipboard chords that must be suppressed on the password fields
fn is_clipboard_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'x' | 'v' | 'C' | 'X' | 'V'))
}

/// Handle keys on the credentials step
fn handle_credentials_key(app: &mut App, key: KeyEvent) {
    let focus = app.signup.credentials_focus;

    // Copy, cut, and paste never touch the password fields
    if is_clipboard_chord(&key)
        && matches!(
            focus,
            CredentialsField::Password | CredentialsField::ConfirmPassword
        )
    {
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.open_signin();
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.signup.credentials_focus = focus.prev();
            } else {
                app.signup.credentials_focus = focus.next();
            }
        }

        KeyCode::BackTab => {
            app.signup.credentials_focus = focus.prev();
        }

        KeyCode::F(2) => {
            app.signup.show_password = !app.signup.show_password;
        }

        KeyCode::Enter => {
            if app.signup.flow.advance() {
                app.signup.profile_focus = ProfileField::FirstName;
            }
        }

        KeyCode::Backspace => {
            edit_credentials_input(app, focus, |input| input.backspace());
        }

        KeyCode::Delete => {
            edit_credentials_input(app, focus, |input| input.delete());
        }

        KeyCode::Left => {
            focused_credentials_input(app, focus).move_left();
        }

        KeyCode::Right => {
            focused_credentials_input(app, focus).move_right();
        }

        KeyCode::Home => {
            focused_credentials_input(app, focus).move_start();
        }

        KeyCode::End => {
            focused_credentials_input(app, focus).move_end();
        }

        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            edit_credentials_input(app, focus, |input| input.insert(c));
        }

        _ => {}
    }
}

/// Borrow the text input for a credentials field
fn focused_credentials_input(app: &mut App, focus: CredentialsField) -> &mut TextInput {
    match focus {
        CredentialsField::Email => &mut app.signup.email_input,
        CredentialsField::Password => &mut app.signup.password_input,
        CredentialsField::ConfirmPassword => &mut app.signup.confirm_input,
    }
}

/// Apply an edit to a credentials input and push the value into the flow
fn edit_credentials_input<F>(app: &mut App, focus: CredentialsField, edit: F)
where
    F: FnOnce(&mut TextInput),
{
    edit(focused_credentials_input(app, focus));
    match focus {
        CredentialsField::Email => {
            let settings = app.settings.clone();
            app.signup.sync_email(&settings);
        }
        CredentialsField::Password => {
            let value = app.signup.password_input.value().to_string();
            app.signup.flow.set_password(value);
        }
        CredentialsField::ConfirmPassword => {
            let value = app.signup.confirm_input.value().to_string();
            app.signup.flow.set_confirm_password(value);
        }
    }
}

/// Handle keys on the profile step
fn handle_profile_key(app: &mut App, key: KeyEvent) {
    let focus = app.signup.profile_focus;

    match key.code {
        KeyCode::Esc => {
            // Profile values are retained across back
            app.signup.flow.back();
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.signup.profile_focus = focus.prev();
            } else {
                app.signup.profile_focus = focus.next();
            }
        }

        KeyCode::BackTab => {
            app.signup.profile_focus = focus.prev();
        }

        KeyCode::Enter => {
            if let Some(FlowCommand::StartCreateAccount) = app.signup.flow.submit() {
                app.signup.create_account =
                    Some(Countdown::start(app.settings.create_account_delay()));
            }
        }

        KeyCode::Up => {
            cycle_profile_select(app, focus, true);
        }

        KeyCode::Down => {
            cycle_profile_select(app, focus, false);
        }

        KeyCode::Backspace => {
            edit_profile_input(app, focus, |input| input.backspace());
        }

        KeyCode::Delete => {
            edit_profile_input(app, focus, |input| input.delete());
        }

        KeyCode::Left => {
            if let Some(input) = focused_profile_input(app, focus) {
                input.move_left();
            }
        }

        KeyCode::Right => {
            if let Some(input) = focused_profile_input(app, focus) {
                input.move_right();
            }
        }

        KeyCode::Home => {
            if let Some(input) = focused_profile_input(app, focus) {
                input.move_start();
            }
        }

        KeyCode::End => {
            if let Some(input) = focused_profile_input(app, focus) {
                input.move_end();
            }
        }

        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            edit_profile_input(app, focus, |input| input.insert(c));
        }

        _ => {}
    }
}

/// Borrow the text input for a profile field, if it is a text field
fn focused_profile_input(app: &mut App, focus: ProfileField) -> Option<&mut TextInput> {
    match focus {
        ProfileField::FirstName => Some(&mut app.signup.first_name_input),
        ProfileField::LastName => Some(&mut app.signup.last_name_input),
        _ => None,
    }
}

/// Apply an edit to a profile text input and push the value into the flow
fn edit_profile_input<F>(app: &mut App, focus: ProfileField, edit: F)
where
    F: FnOnce(&mut TextInput),
{
    let Some(input) = focused_profile_input(app, focus) else {
        return;
    };
    edit(input);
    match focus {
        ProfileField::FirstName => {
            let value = app.signup.first_name_input.value().to_string();
            app.signup.flow.set_first_name(value);
        }
        ProfileField::LastName => {
            let value = app.signup.last_name_input.value().to_string();
            app.signup.flow.set_last_name(value);
        }
        _ => {}
    }
}

/// Cycle a select field and push the selection into the flow
fn cycle_profile_select(app: &mut App, focus: ProfileField, up: bool) {
    let select = match focus {
        ProfileField::BirthMonth => &mut app.signup.month_select,
        ProfileField::BirthYear => &mut app.signup.year_select,
        ProfileField::Country => &mut app.signup.country_select,
        _ => return,
    };

    if up {
        select.prev();
    } else {
        select.next();
    }
    let value = select.value().unwrap_or_default().to_string();

    match focus {
        ProfileField::BirthMonth => app.signup.flow.set_birth_month(value),
        ProfileField::BirthYear => app.signup.flow.set_birth_year(value),
        ProfileField::Country => app.signup.flow.set_country(value),
        _ => {}
    }
}

/// Handle pasted text on the sign-up screen
///
/// Paste is suppressed entirely on the password fields; elsewhere the text
/// is inserted at the cursor with control characters stripped.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.signup.flow.submission() != Submission::Idle {
        return;
    }

    let insert_all = |input: &mut TextInput| {
        for c in text.chars().filter(|c| !c.is_control()) {
            input.insert(c);
        }
    };

    match app.signup.flow.step() {
        SignupStep::Credentials => match app.signup.credentials_focus {
            CredentialsField::Email => {
                edit_credentials_input(app, CredentialsField::Email, insert_all);
            }
            // Paste never reaches the password fields
            CredentialsField::Password | CredentialsField::ConfirmPassword => {}
        },
        SignupStep::Profile => match app.signup.profile_focus {
            ProfileField::FirstName | ProfileField::LastName => {
                edit_profile_input(app, app.signup.profile_focus, insert_all);
            }
            _ => {}
        },
    }
}

/// Render the sign-up screen
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

    // Success replaces the whole card
    if app.signup.flow.submission() == Submission::Succeeded {
        render_success(frame, layout.card);
        let hint = Paragraph::new(Span::styled(
            "Redirecting to sign in...",
            Style::default().fg(Color::Green),
        ));
        frame.render_widget(hint, layout.hint_bar);
        return;
    }

    // Card
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let card_inner = card.inner(layout.card);
    frame.render_widget(card, layout.card);

    let (info, form) = two_panel(card_inner);
    render_info_panel(frame, app, info);

    match app.signup.flow.step() {
        SignupStep::Credentials => render_credentials(frame, app, form),
        SignupStep::Profile => render_profile(frame, app, form),
    }

    render_hint_bar(frame, app, layout.hint_bar);
}

/// Left info panel: step heading and progress
fn render_info_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (heading, step_text) = match app.signup.flow.step() {
        SignupStep::Credentials => ("Create an account", "Step 1 of 2"),
        SignupStep::Profile => ("Complete your profile", "Step 2 of 2"),
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            heading,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::raw(""),
        Line::from(Span::styled(step_text, Style::default().fg(Color::White))).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Inline error line under a field
fn render_error(frame: &mut Frame, area: Rect, error: &Option<String>) {
    if let Some(message) = error {
        let line = Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Meter and label color for a strength score
fn strength_color(score: u8) -> Color {
    match score {
        0 | 1 => Color::Red,
        2 => Color::Yellow,
        3 => Color::LightYellow,
        _ => Color::Green,
    }
}

/// Render the credentials step form
fn render_credentials(frame: &mut Frame, app: &mut App, area: Rect) {
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
            Constraint::Length(1), // Sign-in link
            Constraint::Length(1), // Providers
            Constraint::Length(1), // Or separator
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(1), // Password
            Constraint::Length(1), // Strength meter
            Constraint::Length(1), // Strength label
            Constraint::Length(1), // Rule: length
            Constraint::Length(1), // Rule: casing
            Constraint::Length(1), // Rule: digit/symbol
            Constraint::Length(1), // Rule: not email
            Constraint::Length(1), // Password error
            Constraint::Length(1), // Confirm
            Constraint::Length(1), // Confirm error
            Constraint::Length(1), // Confirm-before-password error
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let heading = Paragraph::new(Span::styled(
        "Create an account",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, chunks[0]);

    let link = Line::from(vec![
        Span::styled("Already have an account? ", Style::default().fg(Color::White)),
        Span::styled("Sign in", Style::default().fg(Color::Blue)),
        Span::styled("  [Esc]", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(link), chunks[1]);

    let providers = Line::from(Span::styled(
        "[ Google ]  [ Facebook ]  [ Apple ]",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(providers), chunks[2]);

    let separator = Line::from(Span::styled(
        "──────────── Or ────────────",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(separator), chunks[3]);

    let errors = app.signup.flow.errors().clone();
    let focus = app.signup.credentials_focus;
    let reveal = app.signup.show_password;

    render_text_field(
        frame,
        chunks[5],
        &app.signup.email_input,
        focus == CredentialsField::Email,
        errors.email.is_some(),
        true,
    );
    render_error(frame, chunks[6], &errors.email);

    render_text_field(
        frame,
        chunks[7],
        &app.signup.password_input,
        focus == CredentialsField::Password,
        errors.password.is_some(),
        reveal,
    );

    // Strength meter and rule checklist appear once a password has been typed
    if app.signup.flow.has_typed_password() {
        let score = app.signup.flow.strength();
        let color = strength_color(score);

        let mut segments = Vec::new();
        for i in 1..=STRENGTH_SEGMENTS {
            let style = if StrengthLabel::segment_filled(score, i) {
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            segments.push(Span::styled("████", style));
            segments.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(segments)), chunks[8]);

        let label = Line::from(vec![
            Span::styled("Password strength: ", Style::default().fg(Color::White)),
            Span::styled(
                StrengthLabel::from_score(score).to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(label), chunks[9]);

        let rules = *app.signup.flow.rules();
        let checklist = [
            (rules.min_length, "At least 8 characters"),
            (rules.mixed_case, "Upper & lowercase letters"),
            (rules.digit_or_symbol, "Number or symbol"),
            (rules.no_email, "Not your email"),
        ];
        for (i, (met, text)) in checklist.iter().enumerate() {
            let (mark, color) = if *met {
                ("✓", Color::Green)
            } else {
                ("✕", Color::Red)
            };
            let line = Line::from(Span::styled(
                format!("{} {}", mark, text),
                Style::default().fg(color),
            ));
            frame.render_widget(Paragraph::new(line), chunks[10 + i]);
        }
    }

    render_error(frame, chunks[14], &errors.password);

    render_text_field(
        frame,
        chunks[15],
        &app.signup.confirm_input,
        focus == CredentialsField::ConfirmPassword,
        errors.confirm_password.is_some() || errors.confirm_before_password.is_some(),
        reveal,
    );
    render_error(frame, chunks[16], &errors.confirm_password);
    render_error(frame, chunks[17], &errors.confirm_before_password);
}

/// Render the profile step form
fn render_profile(frame: &mut Frame, app: &mut App, area: Rect) {
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
            Constraint::Length(1), // Back hint
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // First name
            Constraint::Length(1), // First name error
            Constraint::Length(1), // Last name
            Constraint::Length(1), // Last name error
            Constraint::Length(1), // Date of birth label
            Constraint::Length(1), // Month
            Constraint::Length(1), // Month error
            Constraint::Length(1), // Year
            Constraint::Length(1), // Year error
            Constraint::Length(1), // Country
            Constraint::Length(1), // Country error
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Terms
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let heading = Paragraph::new(Span::styled(
        "Create an account",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, chunks[0]);

    let back = Line::from(Span::styled(
        "Back to email & password  [Esc]",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(back), chunks[1]);

    let errors = app.signup.flow.errors().clone();
    let focus = app.signup.profile_focus;

    render_text_field(
        frame,
        chunks[3],
        &app.signup.first_name_input,
        focus == ProfileField::FirstName,
        errors.first_name.is_some(),
        true,
    );
    render_error(frame, chunks[4], &errors.first_name);

    render_text_field(
        frame,
        chunks[5],
        &app.signup.last_name_input,
        focus == ProfileField::LastName,
        errors.last_name.is_some(),
        true,
    );
    render_error(frame, chunks[6], &errors.last_name);

    let dob_label = Paragraph::new(Span::styled(
        "Date of birth",
        Style::default().fg(Color::White),
    ));
    frame.render_widget(dob_label, chunks[7]);

    render_select_field(
        frame,
        chunks[8],
        &app.signup.month_select,
        focus == ProfileField::BirthMonth,
        errors.birth_month.is_some(),
    );
    render_error(frame, chunks[9], &errors.birth_month);

    render_select_field(
        frame,
        chunks[10],
        &app.signup.year_select,
        focus == ProfileField::BirthYear,
        errors.birth_year.is_some(),
    );
    render_error(frame, chunks[11], &errors.birth_year);

    render_select_field(
        frame,
        chunks[12],
        &app.signup.country_select,
        focus == ProfileField::Country,
        errors.country.is_some(),
    );
    render_error(frame, chunks[13], &errors.country);

    let terms = vec![
        Line::from(Span::styled(
            "By creating an account you accept the Terms of Use.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "See our Privacy Policy for details.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(terms), chunks[15]);
}

/// Render the success view shown after account creation
fn render_success(frame: &mut Frame, area: Rect) {
    let card_area = centered_rect_fixed(48, 7, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Account Created Successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::raw(""),
        Line::from(Span::styled(
            "You will be redirected shortly...",
            Style::default().fg(Color::White),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the key-hint bar for the current step and submission state
fn render_hint_bar(frame: &mut Frame, app: &App, area: Rect) {
    if app.signup.flow.submission() == Submission::InFlight {
        let hint = Paragraph::new(Span::styled(
            "Creating Account...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(hint, area);
        return;
    }

    let hints = match app.signup.flow.step() {
        SignupStep::Credentials => Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::White)),
            Span::raw(" Next  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Continue  "),
            Span::styled("[F2]", Style::default().fg(Color::White)),
            Span::raw(" Show/Hide  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Sign in"),
        ]),
        SignupStep::Profile => Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::White)),
            Span::raw(" Next  "),
            Span::styled("[↑/↓]", Style::default().fg(Color::White)),
            Span::raw(" Change  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Create account  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Back"),
        ]),
    };
    frame.render_widget(Paragraph::new(hints), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_app() -> App {
        let mut app = App::new(&Settings::default());
        app.open_signup();
        app
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key(app, KeyEvent::new(code, modifiers));
    }

    #[test]
    fn test_paste_never_alters_password_fields() {
        let mut app = signup_app();

        app.signup.credentials_focus = CredentialsField::Password;
        press(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);

        handle_paste(&mut app, "Hunter2!");
        assert_eq!(app.signup.password_input.value(), "a");
        assert_eq!(app.signup.flow.form().password, "a");

        app.signup.credentials_focus = CredentialsField::ConfirmPassword;
        handle_paste(&mut app, "Hunter2!");
        assert_eq!(app.signup.confirm_input.value(), "");
        assert_eq!(app.signup.flow.form().confirm_password, "");
    }

    #[test]
    fn test_clipboard_chords_inert_on_password_fields() {
        let mut app = signup_app();

        app.signup.credentials_focus = CredentialsField::Password;
        press(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);

        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('v'), KeyModifiers::CONTROL);
        assert_eq!(app.signup.password_input.value(), "s");

        app.signup.credentials_focus = CredentialsField::ConfirmPassword;
        press(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(app.signup.confirm_input.value(), "");
    }

    #[test]
    fn test_paste_into_email_inserts_and_restarts_debounce() {
        let mut app = signup_app();

        handle_paste(&mut app, "user@example.com");
        assert_eq!(app.signup.email_input.value(), "user@example.com");
        assert_eq!(app.signup.flow.form().email, "user@example.com");
        assert!(app.signup.email_debounce.is_some());
    }
}
