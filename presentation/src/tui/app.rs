//! TUI application — main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)               controller task (tokio::spawn)
//!   ├─ crossterm EventStream            └─ cmd_rx.recv() → handle(cmd)
//!   ├─ ui_rx (UiEvent stream)         health monitor (tokio::spawn)
//!   └─ tick_interval                    └─ probe.check() on interval
//!        └── cmd_tx ─────────────>────┘
//! ```
//!
//! The loop never touches the transcript directly: everything it shows
//! arrives as UiEvents, applied to local state by the presenter.

use super::mode::{Action, KeyHandler, Mode};
use super::presenter::TuiPresenter;
use super::state::{ConfirmPrompt, TuiOptions, TuiState};
use super::widgets::{
    HeaderWidget, InputWidget, MainLayout, NoticeWidget, StatusBarWidget, TranscriptWidget,
};
use campus_application::{
    BehaviorConfig, ChatBackend, ChatCommand, ChatController, HealthMonitor, HealthProbe, Notice,
    UiEvent,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Suggested questions behind the number keys in Normal mode. Each goes
/// through the regular send pipeline, exactly as if the user had typed it.
const QUICK_MESSAGES: &[&str] = &[
    "What are the library hours?",
    "How do I register for courses?",
    "What dining options are open right now?",
    "Where is the student health center?",
];

/// Main TUI application
pub struct TuiApp {
    // -- Actor channels --
    cmd_tx: mpsc::UnboundedSender<ChatCommand>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,

    // -- Presenter (applies UiEvents to state) --
    presenter: TuiPresenter,

    options: TuiOptions,

    // -- Background task handles --
    _controller_handle: tokio::task::JoinHandle<()>,
    _monitor_handle: tokio::task::JoinHandle<()>,
}

impl TuiApp {
    /// Create a new TUI application wired to the controller and monitor
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        probe: Arc<dyn HealthProbe>,
        behavior: BehaviorConfig,
        options: TuiOptions,
    ) -> Self {
        // Channels
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<ChatCommand>();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();

        // Controller (runs in background task, seeds the welcome message)
        let controller = ChatController::new(backend, Arc::clone(&probe), behavior, ui_tx.clone());
        let controller_handle = tokio::spawn(controller.run(cmd_rx));

        // Health monitor (first probe fires immediately)
        let monitor = HealthMonitor::new(probe, options.health_interval, ui_tx);
        let monitor_handle = tokio::spawn(monitor.run());

        Self {
            cmd_tx,
            ui_rx,
            presenter: TuiPresenter::new(),
            options,
            _controller_handle: controller_handle,
            _monitor_handle: monitor_handle,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        let mut state = TuiState::new();
        state.show_timestamps = self.options.show_timestamps;
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            // Render
            terminal.draw(|frame| {
                self.render(frame, &state);
            })?;

            if state.should_quit {
                break;
            }

            // select! on all event sources
            tokio::select! {
                // Terminal events (keyboard, mouse, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // UiEvents from the controller and the health monitor
                Some(ui_event) = self.ui_rx.recv() => {
                    self.presenter.apply(&mut state, ui_event);
                }

                // Tick for toast expiry and the typing animation
                _ = tick.tick() => {
                    state.tick = state.tick.wrapping_add(1);
                    state.expire_notices(self.options.notice_ttl);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(TranscriptWidget::new(state), layout.transcript);
        frame.render_widget(InputWidget::new(state), layout.input);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        // Help overlay
        if state.show_help {
            let help_area = MainLayout::centered_overlay(70, 70, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            self.render_help(frame, help_area);
        }

        // Confirmation modal
        if state.confirm.is_some() {
            let modal_area = MainLayout::centered_overlay(50, 25, frame.area());
            frame.render_widget(ratatui::widgets::Clear, modal_area);
            self.render_confirm(frame, modal_area, state);
        }

        // Notice stack, top-right
        if !state.notices.is_empty() {
            let (width, height) = NoticeWidget::desired_size(state);
            let notice_area = MainLayout::notice_overlay(frame.area(), width, height);
            frame.render_widget(ratatui::widgets::Clear, notice_area);
            frame.render_widget(NoticeWidget::new(state), notice_area);
        }
    }

    fn render_help(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let mut lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Normal Mode:"),
            Line::from("  i      Enter Insert mode"),
            Line::from("  :      Enter Command mode"),
            Line::from("  j/k    Scroll down/up"),
            Line::from("  g/G    Scroll to top/bottom"),
            Line::from("  1-4    Send a suggested question"),
            Line::from("  ?      Toggle this help"),
            Line::from("  q      Quit"),
            Line::from("  Ctrl+C Quit"),
            Line::from(""),
            Line::from("Insert Mode:"),
            Line::from("  Enter  Send message"),
            Line::from("  Esc    Return to Normal"),
            Line::from(""),
            Line::from("Commands (:command):"),
            Line::from("  :q      Quit"),
            Line::from("  :help   Show help"),
            Line::from("  :status Re-check the backend connection"),
            Line::from("  :clear  Clear the transcript (asks first)"),
            Line::from(""),
            Line::from("Suggested questions (number keys):"),
        ];

        for (i, question) in QUICK_MESSAGES.iter().enumerate() {
            lines.push(Line::from(format!("  {}. {}", i + 1, question)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from("Instant replies (no backend call):"));
        lines.push(Line::from("  hello bot, how are you, thank you,"));
        lines.push(Line::from("  good job, awesome"));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_confirm(
        &self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
        state: &TuiState,
    ) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let Some(confirm) = state.confirm.as_ref() else {
            return;
        };

        let lines = vec![
            Line::from(Span::styled(
                confirm.message.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "y: yes  n: cancel  Esc: cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Confirm ")
            .style(Style::default().fg(Color::Yellow));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&self, state: &mut TuiState, event: crossterm::event::Event) {
        match event {
            crossterm::event::Event::Key(key) => {
                // If help is showing, Esc or ? closes it
                if state.show_help {
                    match key.code {
                        crossterm::event::KeyCode::Esc | crossterm::event::KeyCode::Char('?') => {
                            state.show_help = false;
                            return;
                        }
                        _ => {}
                    }
                }

                let action = KeyHandler::handle(state.mode, key);
                self.handle_action(state, action);
            }
            crossterm::event::Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Handle a semantic key action
    fn handle_action(&self, state: &mut TuiState, action: Action) {
        match action {
            Action::None => {}

            // Mode transitions
            Action::EnterInsert => state.mode = Mode::Insert,
            Action::EnterCommand => {
                state.mode = Mode::Command;
                state.command_input.clear();
                state.command_cursor = 0;
            }
            Action::ExitToNormal => state.mode = Mode::Normal,
            Action::Cancel => {
                state.command_input.clear();
                state.command_cursor = 0;
                state.confirm = None;
                state.mode = Mode::Normal;
            }

            // Text editing
            Action::InsertChar(c) => state.insert_char(c),
            Action::DeleteChar => state.delete_char(),
            Action::CursorLeft => state.cursor_left(),
            Action::CursorRight => state.cursor_right(),
            Action::CursorStart => state.cursor_start(),
            Action::CursorEnd => state.cursor_end(),

            // Submit routes by which buffer is active
            Action::Submit => match state.mode {
                Mode::Insert => self.submit_message(state),
                Mode::Command => self.submit_command(state),
                _ => {}
            },

            // Confirmation modal
            Action::ConfirmYes => {
                if state.confirm.take().is_some() {
                    let _ = self.cmd_tx.send(ChatCommand::ClearConfirmed);
                }
                state.mode = Mode::Normal;
            }
            Action::ConfirmNo => {
                state.confirm = None;
                state.mode = Mode::Normal;
            }

            // Scrolling
            Action::ScrollUp => state.scroll_up(),
            Action::ScrollDown => state.scroll_down(),
            Action::ScrollToTop => state.scroll_to_top(),
            Action::ScrollToBottom => state.scroll_to_bottom(),

            // Suggested questions
            Action::QuickMessage(index) => {
                if let Some(text) = QUICK_MESSAGES.get(index) {
                    let _ = self.cmd_tx.send(ChatCommand::Send((*text).to_string()));
                }
            }

            // Application
            Action::Quit => state.should_quit = true,
            Action::ShowHelp => state.show_help = !state.show_help,
        }
    }

    /// Send the typed message to the controller.
    ///
    /// Whitespace-only input is dropped without clearing the buffer. The
    /// user message itself shows up via MessageAppended, not here.
    fn submit_message(&self, state: &mut TuiState) {
        if state.input.trim().is_empty() {
            return;
        }
        let text = state.take_input();
        let _ = self.cmd_tx.send(ChatCommand::Send(text));
    }

    /// Execute a `:command`
    fn submit_command(&self, state: &mut TuiState) {
        let cmd = state.take_command();
        state.mode = Mode::Normal;
        if cmd.is_empty() {
            return;
        }
        match cmd.as_str() {
            "q" | "quit" | "exit" => state.should_quit = true,
            "clear" => {
                state.confirm = Some(ConfirmPrompt {
                    message: "Clear the transcript?".into(),
                });
                state.mode = Mode::Confirm;
            }
            "status" => {
                let _ = self.cmd_tx.send(ChatCommand::CheckStatus);
            }
            "help" => state.show_help = true,
            other => {
                state.push_notice(Notice::warning(format!("Unknown command: {}", other)));
            }
        }
    }
}
