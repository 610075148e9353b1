mod app;
mod render;

use anyhow::Result;
use app::{App, Flow};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mdlive_config::Config;
use mdlive_engine::view::View;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

/// Rows taken by the editor border and the help line.
const CHROME_ROWS: u16 = 3;

fn init_logging(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    // Session directory from CLI args, else from config file, else default
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", config_path.display());
            process::exit(1);
        }
    };

    let session_dir = match args.len() {
        1 => config.session_dir.clone(),
        2 => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: {} [session-dir]", args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log_file) {
        eprintln!(
            "Warning: logging disabled, cannot open {}: {e}",
            config.log_file.display()
        );
    }
    log::info!("mdlive starting up!");
    log::info!("Config path: {}", config_path.display());
    log::info!("Session directory: {}", session_dir.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let height = terminal.size()?.height.saturating_sub(CHROME_ROWS);
    let mut app = App::new(session_dir, config.export_dir, usize::from(height));

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Editor loop failed: {err:?}");
        println!("{err:?}");
    }
    log::info!("mdlive shutting down");

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let height = terminal.size()?.height.saturating_sub(CHROME_ROWS);
        app.resize(usize::from(height));
        terminal.draw(|f| ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Flow::Quit {
                    return Ok(());
                }
            }
            Event::Paste(text) => app.paste(text),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let view = app.document.view();
    let viewport = view.viewport();
    let mask = app.document.rendering().code_block_mask();

    let rows: Vec<Line> = view
        .lines()
        .iter()
        .zip(mask)
        .skip(viewport.top)
        .take(viewport.height)
        .map(|(line, literal)| render::render_line(line, literal))
        .collect();

    let title = format!(" Document.md  v{} ", app.document.version());
    let editor = Paragraph::new(rows).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(editor, chunks[0]);

    let caret = view.caret_position();
    if let (Ok(row), Ok(col)) = (
        u16::try_from(caret.line.saturating_sub(viewport.top)),
        u16::try_from(caret.column),
    ) {
        f.set_cursor_position((
            chunks[0].x.saturating_add(1).saturating_add(col),
            chunks[0].y.saturating_add(1).saturating_add(row),
        ));
    }

    let selected = view.selection().len();
    let mut help = vec![
        Span::raw("^Q quit | ^S export | ^Z undo | ^Y redo | ^B bold"),
        Span::styled(
            format!(" | {} selected", selected),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if !app.status.is_empty() {
        help.push(Span::styled(
            format!(" | {}", app.status),
            Style::default().fg(Color::Green),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(help)), chunks[1]);
}
