mod store;
mod test_runner;

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use editor::wrap::auto_wrap;
use screenplay::activity::WritingLog;
use screenplay::format::text_to_blocks;
use screenplay::lint::lint_scene;
use screenplay::project::Screenplay;

const SUBCOMMANDS: &[&str] = &["render", "parse", "lint", "wrap", "new", "log", "test", "help"];

/// Days per row of the activity calendar.
const CALENDAR_COLUMNS: usize = 9;

#[derive(Parser)]
#[command(name = "screenplay", version, about = "Screenplay formatting toolkit")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a project's scenes as formatted screenplay text
    Render(RenderArgs),

    /// Classify scene text into blocks and print them as JSON
    Parse(ParseArgs),

    /// Warn about lines whose indentation reads ambiguously
    Lint(LintArgs),

    /// Apply the dialogue auto-wrap pass to scene text
    Wrap(WrapArgs),

    /// Create a blank project document
    New(NewArgs),

    /// Show (and optionally mark) the writing-activity calendar
    Log(LogArgs),

    /// Run .test.scene fixture files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Project document (JSON) to render
    file: String,

    /// Render only this scene id
    #[arg(short, long)]
    scene: Option<String>,
}

#[derive(clap::Args)]
struct ParseArgs {
    /// Scene text file to classify
    file: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(clap::Args)]
struct LintArgs {
    /// Scene text file to check
    file: String,
}

#[derive(clap::Args)]
struct WrapArgs {
    /// Scene text file to re-flow
    file: String,
}

#[derive(clap::Args)]
struct NewArgs {
    /// Path of the project document to create
    file: String,

    /// Screenplay title
    #[arg(short, long, default_value = "Screenplay Title")]
    title: String,
}

#[derive(clap::Args)]
struct LogArgs {
    /// Project document holding the activity log
    file: String,

    /// Record today as a writing day before printing
    #[arg(long)]
    mark: bool,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.scene file or directory containing them
    path: String,

    /// Run only tests in these categories (subfolder names). Repeatable.
    #[arg(short, long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    // Convenience: if the first positional arg is not a known subcommand,
    // inject "render" so `screenplay project.json` works like
    // `screenplay render project.json`.
    let mut args: Vec<String> = std::env::args().collect();
    if let Some(first_pos) = args.iter().skip(1).find(|a| !a.starts_with('-')) {
        let first_pos = first_pos.clone();
        if !SUBCOMMANDS.contains(&first_pos.as_str()) {
            let pos = args.iter().position(|a| *a == first_pos).unwrap();
            args.insert(pos, "render".to_string());
        }
    }

    let cli = Cli::parse_from(&args);

    match cli.command {
        Command::Render(args) => do_render(args),
        Command::Parse(args) => do_parse(args),
        Command::Lint(args) => do_lint(args, cli.no_color),
        Command::Wrap(args) => do_wrap(args),
        Command::New(args) => do_new(args),
        Command::Log(args) => do_log(args),
        Command::Test(args) => {
            let path = Path::new(&args.path);
            if args.list_categories {
                test_runner::list_categories(path);
                return;
            }
            let exit_code = test_runner::run_tests(path, cli.no_color, &args.category);
            process::exit(exit_code);
        }
    }
}

/// Read a text file or exit with an error message.
fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn do_render(args: RenderArgs) {
    let doc = match store::load_project(Path::new(&args.file)) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let play = doc.open();

    match args.scene {
        Some(id) => match play.scene(&id) {
            Some(scene) => println!("{}", scene.content),
            None => {
                let available: Vec<&str> = play.scenes.iter().map(|s| s.id.as_str()).collect();
                eprintln!(
                    "error: no scene '{}' (available scenes: {})",
                    id,
                    if available.is_empty() {
                        "none".to_string()
                    } else {
                        available.join(", ")
                    }
                );
                process::exit(1);
            }
        },
        None => {
            let rendered: Vec<&str> = play.scenes.iter().map(|s| s.content.as_str()).collect();
            println!("{}", rendered.join("\n\n"));
        }
    }
}

fn do_parse(args: ParseArgs) {
    let source = read_source(&args.file);
    let blocks = text_to_blocks(&source);

    let json = if args.pretty {
        serde_json::to_string_pretty(&blocks)
    } else {
        serde_json::to_string(&blocks)
    };
    match json {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("error: cannot serialize blocks: {}", e);
            process::exit(1);
        }
    }
}

fn do_lint(args: LintArgs, no_color: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let source = read_source(&args.file);

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(args.file.clone(), source.clone());

    let warnings = lint_scene(&source, file_id);
    if warnings.is_empty() {
        eprintln!("ok: no formatting warnings in '{}'", args.file);
        return;
    }

    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    for warning in &warnings {
        let diagnostic = warning.to_diagnostic();
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
    }
}

fn do_wrap(args: WrapArgs) {
    let source = read_source(&args.file);
    print!("{}", auto_wrap(&source));
}

fn do_new(args: NewArgs) {
    let doc = Screenplay::new(args.title).to_doc();
    match store::save_project(Path::new(&args.file), &doc) {
        Ok(()) => eprintln!("ok: created '{}'", args.file),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn do_log(args: LogArgs) {
    let path = Path::new(&args.file);
    let mut doc = match store::load_project(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();

    if args.mark {
        doc.activity.record(today);
        if let Err(e) = store::save_project(path, &doc) {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }

    let Some(first) = doc.activity.first_day() else {
        println!("no writing days recorded yet");
        return;
    };

    // Calendar from the first recorded day through today, one cell per day.
    for row_days in WritingLog::calendar(first, today).chunks(CALENDAR_COLUMNS) {
        let row: String = row_days
            .iter()
            .map(|d| if doc.activity.wrote_on(*d) { '#' } else { '.' })
            .collect();
        println!("{}", row);
    }

    println!();
    println!(
        "{} day(s) written since {}",
        doc.activity.days().count(),
        first
    );
    println!(
        "current streak: {} (longest: {})",
        doc.activity.current_streak(today),
        doc.activity.longest_streak()
    );
}
