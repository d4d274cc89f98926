use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use montyhall::app::App;
use montyhall::build_info;
use montyhall::constants::INPUT_POLL_MS;
use montyhall::input::{handle_input, InputResult};
use montyhall::logging;
use montyhall::simulator::{SimConfig, TrialSettings};
use montyhall::ui::draw_ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

struct Options {
    config: SimConfig,
    log_path: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Run 'montyhall --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.log_path {
        logging::init_file(path)?;
    }
    info!(
        trials = options.config.trials(),
        seed = ?options.config.seed,
        "starting interactive report"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(options.config));

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        error!(error = %e, "interactive report exited with an error");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw_ui(frame, &app))?;

        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }

        if let Event::Key(key_event) = event::read()? {
            // Windows reports releases too
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            match handle_input(key_event, &mut app) {
                InputResult::Continue => {}
                InputResult::SettingsChanged => app.refresh(),
                InputResult::Quit => {
                    info!(runs = app.runs, "quitting");
                    return Ok(());
                }
            }
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config: SimConfig::default(),
        log_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--trials" => {
                let value = value_after(args, i)?;
                let trials: u32 = value
                    .parse()
                    .map_err(|_| format!("invalid trial count: {}", value))?;
                options.config.settings = TrialSettings::new(trials).map_err(|e| e.to_string())?;
                i += 1;
            }
            "-s" | "--seed" => {
                let value = value_after(args, i)?;
                options.config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid seed: {}", value))?,
                );
                i += 1;
            }
            "--log" => {
                options.log_path = Some(PathBuf::from(value_after(args, i)?));
                i += 1;
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line("montyhall"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn value_after(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", args[i]))
}

fn print_help() {
    println!("Monty Hall Problem Simulator\n");
    println!("Usage: montyhall [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --trials <N>  Trials per strategy, 100-100000 in steps of 100 (default: 1000)");
    println!("  -s, --seed <S>    Pin the random seed");
    println!("  --log <FILE>      Write logs to FILE (filter with RUST_LOG)");
    println!("  -v, --version     Show version information");
    println!("  -h, --help        Show this help message");
    println!();
    println!("Run 'simulate --help' for the headless report.");
}
