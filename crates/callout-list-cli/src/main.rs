use anyhow::Result;
use callout_list_config::Config;
use callout_list_engine::{FilterConfig, ScanReport, VaultSource, io, pipeline, render};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    source: VaultSource,
    filters: FilterConfig,
    report: ScanReport,
    result_list_state: ListState,
    current_content: Vec<String>,
}

impl App {
    fn new(vault_path: PathBuf, filters: FilterConfig) -> Result<Self> {
        let source = VaultSource::new(vault_path);
        let report = pipeline::run(&source, &filters)?;

        let mut app = Self {
            source,
            filters,
            report,
            result_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first result if available
        if !app.report.results.is_empty() {
            app.result_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    /// Re-run the whole scan, the equivalent of the view-activation
    /// trigger in the original plugin
    fn refresh(&mut self) -> Result<()> {
        self.report = pipeline::run(&self.source, &self.filters)?;

        let selected = self
            .result_list_state
            .selected()
            .filter(|i| *i < self.report.results.len())
            .or(if self.report.results.is_empty() {
                None
            } else {
                Some(0)
            });
        self.result_list_state.select(selected);
        self.update_content_for_selection();
        Ok(())
    }

    fn next_result(&mut self) {
        if self.report.results.is_empty() {
            return;
        }
        let i = match self.result_list_state.selected() {
            Some(i) => (i + 1) % self.report.results.len(),
            None => 0,
        };
        self.result_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_result(&mut self) {
        if self.report.results.is_empty() {
            return;
        }
        let i = match self.result_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.report.results.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.result_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        self.current_content = match self
            .result_list_state
            .selected()
            .and_then(|i| self.report.results.get(i))
        {
            Some(result) => {
                let mut lines = Vec::new();
                for (i, block) in result.blocks.iter().enumerate() {
                    if i > 0 {
                        lines.push(String::new()); // Blank line between blocks
                    }
                    lines.extend(block.lines().iter().cloned());
                }
                lines
            }
            None => Vec::new(),
        };
    }

    fn header_line(&self) -> String {
        // Same filter summary the markdown header carries, minus markup
        render::render_header(&self.filters)
            .lines()
            .last()
            .unwrap_or_default()
            .replace("**", "")
    }
}

fn main() -> Result<()> {
    // Determine vault path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let vault_path;
    let filters;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it, with default filters
        vault_path = PathBuf::from(&args[1]);
        filters = FilterConfig::default();
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                vault_path = config.vault_path.clone();
                filters = config.filter_config();
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No vault path provided and no config file found");
                eprintln!("Usage: {} <vault-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <vault-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [vault-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate vault directory using engine
    if let Err(e) = io::validate_vault_dir(&vault_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Vault path '{}'{} is invalid: {e}",
            vault_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(vault_path, filters)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_result(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_result(),
                KeyCode::Char('r') => app.refresh()?,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.area());

    // Filter summary header
    let header = Paragraph::new(Line::from(Span::raw(app.header_line())));
    f.render_widget(header, outer[0]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(outer[1]);

    // Matched notes panel
    let note_items: Vec<ListItem> = app
        .report
        .results
        .iter()
        .map(|result| {
            let display_text = format!("{} ({})", result.note.path_str(), result.blocks.len());
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let notes_list = List::new(note_items)
        .block(Block::default().borders(Borders::ALL).title("Notes"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(notes_list, chunks[0], &mut app.result_list_state);

    // Callout panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("No matching callouts")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(vec![Span::raw(line.clone())]))
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Callouts"))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions, plus read-failure diagnostics if any
    let mut help_spans = vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("r: Refresh"),
    ];
    if !app.report.skipped.is_empty() {
        help_spans.push(Span::styled(
            format!(" | {} note(s) skipped (read errors)", app.report.skipped.len()),
            Style::default().fg(Color::Red),
        ));
    }

    let help = Paragraph::new(vec![Line::from(help_spans)]).block(Block::default());
    f.render_widget(help, outer[2]);
}
