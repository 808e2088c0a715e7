use clap::{Parser, Subcommand};
use exprlex_core::config::{history_path, Config, OutputFormat};
use exprlex_core::report::{self, RenderOptions};
use exprlex_core::{validate, VerdictReport};
use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exprlex")]
#[command(about = "Lexical analyzer and validator for arithmetic expressions", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of the default lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Do not list the tokens of each expression
    #[arg(long, global = true)]
    quiet_tokens: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the given expressions
    Check {
        #[arg(required = true)]
        expressions: Vec<String>,
    },

    /// Validate every non-blank line of a file
    File {
        path: PathBuf,
    },

    /// Interactive mode (default)
    Repl,
}

struct Output {
    format: OutputFormat,
    render: RenderOptions,
}

impl Output {
    fn new(cli: &Cli, config: &Config) -> Self {
        let format = if cli.json { OutputFormat::Json } else { config.format };
        Output {
            format,
            render: RenderOptions {
                color: config.color && !cli.no_color,
                show_tokens: config.show_tokens && !cli.quiet_tokens,
            },
        }
    }

    fn emit(&self, verdict: &VerdictReport) {
        match self.format {
            OutputFormat::Text => print!("{}", report::render(verdict, &self.render)),
            OutputFormat::Json => println!("{}", report::to_json(verdict)),
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    let output = Output::new(&cli, &config);

    match &cli.command {
        Some(Commands::Check { expressions }) => {
            let lines = expressions
                .iter()
                .filter_map(|e| match classify(e, None) {
                    Line::Check(expr) => Some((None, expr)),
                    _ => None,
                });
            run_batch(lines, &output)
        }

        Some(Commands::File { path }) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            run_batch(numbered_lines(&content).into_iter(), &output)
        }

        Some(Commands::Repl) | None => run_repl(&config, &output),
    }
}

/// What the driver does with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Exit,
    Check(&'a str),
}

/// Blank lines are never validated. `exit_command` only applies to the REPL
/// and matches the trimmed line regardless of case.
fn classify<'a>(line: &'a str, exit_command: Option<&str>) -> Line<'a> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Skip;
    }
    match exit_command {
        Some(cmd) if trimmed.eq_ignore_ascii_case(cmd) => Line::Exit,
        _ => Line::Check(line),
    }
}

/// Non-blank lines of a file with their 1-based line numbers.
fn numbered_lines(content: &str) -> Vec<(Option<usize>, &str)> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match classify(line, None) {
            Line::Check(expr) => Some((Some(i + 1), expr)),
            _ => None,
        })
        .collect()
}

fn run_batch<'a>(
    lines: impl Iterator<Item = (Option<usize>, &'a str)>,
    output: &Output,
) -> Result<(), String> {
    let mut total = 0;
    let mut rejected = 0;

    for (line_no, expr) in lines {
        if output.format == OutputFormat::Text {
            match line_no {
                Some(n) => println!("{:>4}: {}", n, expr),
                None => println!("{}", expr),
            }
        }
        let report = validate(expr);
        output.emit(&report);

        total += 1;
        if !report.accepted() {
            rejected += 1;
        }
    }

    if rejected > 0 {
        return Err(format!("{} of {} expressions rejected", rejected, total));
    }
    Ok(())
}

fn run_repl(config: &Config, output: &Output) -> Result<(), String> {
    let mut editor = DefaultEditor::new().map_err(|e| e.to_string())?;

    let history = config.history.then(history_path).flatten();
    if let Some(path) = &history {
        if let Err(e) = editor.load_history(path) {
            debug!("no history loaded from {:?}: {}", path, e);
        }
    }

    println!("Arithmetic expression analyzer");
    println!("Enter an expression (or '{}' to quit):", config.exit_command);

    loop {
        match editor.readline("\n> ") {
            Ok(line) => match classify(&line, Some(config.exit_command.as_str())) {
                Line::Skip => continue,
                Line::Exit => break,
                Line::Check(expr) => {
                    if let Err(e) = editor.add_history_entry(expr.trim()) {
                        debug!("cannot add history entry: {}", e);
                    }
                    output.emit(&validate(expr));
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("read error: {}", e)),
        }
    }

    if let Some(path) = &history {
        if let Some(dir) = path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                warn!("cannot create {:?}: {}", dir, e);
            }
        }
        if let Err(e) = editor.save_history(path) {
            warn!("cannot save history to {:?}: {}", path, e);
        }
    }
    Ok(())
}
