use anyhow::{Context, bail};
use crossterm::{
    event::{Event, KeyEventKind, read},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use quill::app::App;
use quill::cli::{self, CliArgs};
use quill::config::QuillConfig;
use quill::syntax::{resolve_theme, theme_names};
use quill::ui::Theme;
use quill::ui::renderer::TuiRenderer;

/// Parse arguments, load the project, then run the terminal UI until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();

    if cli_args.list_themes {
        let mut themes = theme_names();
        themes.sort();
        println!("Available syntax themes:");
        for theme in themes {
            println!("  {}", theme);
        }
        return Ok(());
    }

    init_logging(cli_args.log_file.as_deref());

    let mut config = QuillConfig::load(cli_args.config.as_deref());
    if let Some(theme) = &cli_args.theme {
        config.syntax_theme = theme.clone();
    }

    let base_path = project_root(&cli_args)?;
    let mut app = App::bootstrap(base_path, &config).await?;

    let theme = Theme::default().with_syntax_theme(resolve_theme(&config.syntax_theme));
    let mut renderer =
        TuiRenderer::new(theme, config.tree_width).context("Failed to create terminal")?;

    // Enable raw mode and enter alternate screen
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let result = run(&mut app, &mut renderer);

    // Leave alternate screen and disable raw mode
    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    if let Err(err) = &result {
        error!("Event loop failed: {:#}", err);
    }
    info!("Exiting");
    result
}

fn run(app: &mut App, renderer: &mut TuiRenderer) -> anyhow::Result<()> {
    // Frame rate limiting constants
    const TARGET_FPS: u64 = 60;
    const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

    let mut last_frame_time = Instant::now();
    let mut needs_redraw = true;

    while !app.should_quit {
        // Only render if needed and enough time has elapsed since last frame
        if needs_redraw && last_frame_time.elapsed() >= FRAME_DURATION {
            renderer.draw(app)?;
            last_frame_time = Instant::now();
            needs_redraw = false;
        }

        // Read event (blocking, with timeout for periodic redraws)
        let event = if needs_redraw {
            let timeout = FRAME_DURATION.saturating_sub(last_frame_time.elapsed());
            if crossterm::event::poll(timeout)? {
                Some(read()?)
            } else {
                None
            }
        } else {
            Some(read()?)
        };

        match event {
            Some(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                app.handle_key(key_event);
                needs_redraw = true;
            }
            Some(Event::Resize(_, _)) => needs_redraw = true,
            _ => {}
        }
    }

    Ok(())
}

/// Absolute project directory from the command line
fn project_root(cli_args: &CliArgs) -> anyhow::Result<PathBuf> {
    if !cli_args.exists() {
        bail!("Path '{}' does not exist", cli_args.path.display());
    }
    if !cli_args.is_directory() {
        bail!("Path '{}' is not a directory", cli_args.path.display());
    }
    cli_args
        .path
        .canonicalize()
        .with_context(|| format!("Failed to resolve '{}'", cli_args.path.display()))
}

/// Send logs to a file, since the terminal belongs to the UI (set RUST_LOG to control verbosity)
fn init_logging(log_file: Option<&Path>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = log_file.map(Path::to_path_buf).or_else(default_log_path)
        && let Ok(file) = File::create(&path)
    {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
}

fn default_log_path() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join("quill");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("quill.log"))
}
