mod input;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{apply_intent, map_key, Intent};
use ratatui::{backend::CrosstermBackend, Terminal};
use serpent::build_info::version_string;
use serpent::core::constants::{LOG_FILE_NAME, POLL_INTERVAL_MS};
use serpent::persistence::save_dir;
use serpent::{Difficulty, GameConfig, GameMachine, JsonFileStore, Persistence};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::snake_scene::{render_snake_scene, Banner};

/// How long a banner stays in the side panel.
const BANNER_SECONDS: u64 = 3;
/// How often to look for best scores written by another session.
const EXTERNAL_SYNC_SECONDS: u64 = 1;

enum Command {
    Play,
    Stats,
    ResetStats,
    Version,
    Help,
}

struct Options {
    command: Command,
    difficulty: Option<Difficulty>,
    config_path: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        command: Command::Play,
        difficulty: None,
        config_path: None,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--difficulty" | "-d" => {
                let value = args.next().ok_or("--difficulty needs a value")?;
                let difficulty = Difficulty::parse(&value)
                    .ok_or_else(|| format!("unknown difficulty: {}", value))?;
                options.difficulty = Some(difficulty);
            }
            "--config" | "-c" => {
                let value = args.next().ok_or("--config needs a path")?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--stats" => options.command = Command::Stats,
            "--reset-stats" => options.command = Command::ResetStats,
            "--version" | "-v" => options.command = Command::Version,
            "--help" | "-h" => options.command = Command::Help,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(options)
}

fn print_help() {
    println!("Serpent - Terminal Snake\n");
    println!("Usage: serpent [options]\n");
    println!("Options:");
    println!("  -d, --difficulty <easy|normal|hard>  Pick a pacing preset");
    println!("  -c, --config <path>                  Load a JSON game config");
    println!("      --stats                          Show lifetime stats and achievements");
    println!("      --reset-stats                    Forget best score, stats and achievements");
    println!("  -v, --version                        Show version information");
    println!("  -h, --help                           Show this help message");
}

/// Log to `~/.serpent/serpent.log`; the terminal belongs to the UI.
fn init_tracing() {
    let Ok(dir) = save_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// File-backed persistence, or in-memory if the home directory is unusable.
fn open_persistence() -> Persistence {
    match JsonFileStore::default_location() {
        Ok(store) => Persistence::new(store),
        Err(e) => {
            warn!(error = %e, "falling back to in-memory persistence");
            eprintln!("Warning: progress will not be saved ({})", e);
            Persistence::in_memory()
        }
    }
}

fn resolve_config(options: &Options, persistence: &mut Persistence) -> io::Result<GameConfig> {
    if let Some(path) = &options.config_path {
        return GameConfig::load(path).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e));
    }
    let mut settings = persistence.settings();
    if let Some(difficulty) = options.difficulty {
        if settings.difficulty != difficulty {
            settings.difficulty = difficulty;
            if let Err(e) = persistence.save_settings(&settings) {
                warn!(error = %e, "failed to save difficulty");
            }
        }
    }
    Ok(settings.difficulty.config())
}

fn print_stats(persistence: &Persistence) {
    let stats = persistence.stats();
    println!("Best score:     {}", persistence.best_score());
    println!("Games played:   {}", stats.total_games_played);
    println!("Total score:    {}", stats.total_score);
    println!("Average score:  {}", stats.average_score);
    println!("Longest snake:  {}", stats.longest_snake);
    println!("Best level:     {}", stats.best_level);
    println!("Play time:      {}m {}s", stats.play_time / 60, stats.play_time % 60);
    if let Some(ts) = stats.last_played_at {
        if let Some(when) = chrono::DateTime::from_timestamp(ts, 0) {
            println!("Last played:    {}", when.format("%Y-%m-%d %H:%M UTC"));
        }
    }

    let evaluator = serpent::AchievementEvaluator::default();
    let (unlocked, total) = evaluator.progress(persistence);
    println!("\nAchievements ({}/{}):", unlocked, total);
    for achievement in evaluator.list(persistence) {
        let mark = if achievement.unlocked { "*" } else { " " };
        println!("  [{}] {} - {}", mark, achievement.name, achievement.description);
    }
}

fn main() -> io::Result<()> {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'serpent --help' for usage.");
            std::process::exit(1);
        }
    };

    match options.command {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            println!("{}", version_string());
            return Ok(());
        }
        _ => {}
    }

    init_tracing();
    let mut persistence = open_persistence();

    match options.command {
        Command::Stats => {
            print_stats(&persistence);
            return Ok(());
        }
        Command::ResetStats => {
            persistence
                .reset_progress()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            println!("Best score, stats and achievements cleared.");
            return Ok(());
        }
        _ => {}
    }

    let config = resolve_config(&options, &mut persistence)?;
    let show_grid = persistence.settings().show_grid;
    info!(?config, "starting serpent");
    let mut machine = GameMachine::new(config, persistence)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut machine, show_grid);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!("Goodbye! Best score: {}", machine.data().best_score);
    Ok(())
}

/// Main loop: draw, poll input for one polling interval, then poll the machine.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    machine: &mut GameMachine,
    show_grid: bool,
) -> io::Result<()> {
    let mut banner: Option<(Banner, Instant)> = None;
    let mut last_sync = Instant::now();

    loop {
        terminal.draw(|frame| {
            render_snake_scene(frame, machine, banner.as_ref().map(|(b, _)| b), show_grid);
        })?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(Intent::Quit) => return Ok(()),
                    Some(intent) => apply_intent(machine, intent),
                    None => {}
                }
            }
        }

        machine.poll();

        for event in machine.drain_events() {
            if let Some(new_banner) = ui::banner_for(&event) {
                banner = Some((new_banner, Instant::now()));
            }
        }
        if banner
            .as_ref()
            .is_some_and(|(_, shown)| shown.elapsed() >= Duration::from_secs(BANNER_SECONDS))
        {
            banner = None;
        }

        if last_sync.elapsed() >= Duration::from_secs(EXTERNAL_SYNC_SECONDS) {
            machine.sync_external_changes();
            last_sync = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults_to_play() {
        let options = parse_args(args(&[])).unwrap();
        assert!(matches!(options.command, Command::Play));
        assert!(options.difficulty.is_none());
    }

    #[test]
    fn test_parse_difficulty_and_config() {
        let options = parse_args(args(&["-d", "hard", "--config", "game.json"])).unwrap();
        assert_eq!(options.difficulty, Some(Difficulty::Hard));
        assert_eq!(options.config_path, Some(PathBuf::from("game.json")));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_args(args(&["--turbo"])).is_err());
        assert!(parse_args(args(&["--difficulty", "insane"])).is_err());
        assert!(parse_args(args(&["--difficulty"])).is_err());
    }

    #[test]
    fn test_resolve_config_saves_difficulty() {
        let mut persistence = Persistence::in_memory();
        let options = parse_args(args(&["--difficulty", "easy"])).unwrap();
        let config = resolve_config(&options, &mut persistence).unwrap();
        assert_eq!(config, Difficulty::Easy.config());
        assert_eq!(persistence.settings().difficulty, Difficulty::Easy);

        // Next run without the flag keeps the saved preset
        let options = parse_args(args(&[])).unwrap();
        assert_eq!(resolve_config(&options, &mut persistence).unwrap(), Difficulty::Easy.config());
    }
}
