use std::fmt;
use std::io::{BufRead, Write};

use quiz_core::catalog;
use quiz_core::model::{Category, CategoryId, PlayerProgress, StarRating};
use services::{generate_questions, AppServices, QuizSession};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCategoryId { raw: String },
    InvalidDbUrl { raw: String },
    UnknownGradient { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCategoryId { raw } => write!(f, "invalid --category value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::UnknownGradient { raw } => {
                write!(f, "unknown gradient preset: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- play     [--db <sqlite_url>] [--category <id>]");
    eprintln!("  cargo run -p app -- stats    [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- gradient [<preset>] [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- reset    [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:dev.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ANIMAL_KINGDOM_DB");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Stats,
    Gradient,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "stats" => Some(Self::Stats),
            "gradient" => Some(Self::Gradient),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

// Background presets offered in the settings screen.
const GRADIENT_PRESETS: [(&str, [&str; 2]); 5] = [
    ("nature", ["#1B5E20", "#5D4037"]),
    ("twilight", ["#1A237E", "#E91E63"]),
    ("sun", ["#E65100", "#FFD600"]),
    ("ocean", ["#4A148C", "#00BCD4"]),
    ("fire", ["#B71C1C", "#FFC107"]),
];

struct Args {
    db_url: String,
    category_id: Option<CategoryId>,
    gradient: Option<[&'static str; 2]>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("ANIMAL_KINGDOM_DB")
            .ok()
            .map_or_else(|| "sqlite://dev.sqlite3".into(), normalize_sqlite_url);
        let mut category_id = None;
        let mut gradient = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--category" => {
                    let value = require_value(args, "--category")?;
                    let parsed: u32 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidCategoryId { raw: value.clone() })?;
                    category_id = Some(CategoryId::new(parsed));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other if !other.starts_with("--") && gradient.is_none() => {
                    let preset = GRADIENT_PRESETS
                        .iter()
                        .find(|(name, _)| *name == other)
                        .ok_or_else(|| ArgsError::UnknownGradient { raw: arg.clone() })?;
                    gradient = Some(preset.1);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            category_id,
            gradient,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

//
// ─── TERMINAL FRONTEND ─────────────────────────────────────────────────────────
//

fn stars_display(stars: StarRating) -> String {
    let filled = usize::from(stars.value());
    format!("{}{}", "★".repeat(filled), "☆".repeat(3 - filled))
}

fn print_category_list(categories: &[Category], progress: &PlayerProgress) {
    println!("Categories:");
    for category in categories {
        let marker = if category.is_premium() {
            "premium"
        } else if progress.is_unlocked(category.id()) {
            "open"
        } else {
            "locked"
        };
        println!(
            "  {:>2}. {} {:<14} {}  [{}]",
            category.id().value(),
            category.emoji(),
            category.name(),
            stars_display(progress.stars_for(category.id())),
            marker,
        );
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    std::io::stdout().flush().ok()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).ok()?;
    if line.is_empty() {
        return None; // EOF
    }
    Some(line.trim().to_string())
}

/// Prompts until the player picks a number in `1..=max`, or returns `None`
/// on end of input.
fn read_choice(prompt: &str, max: usize) -> Option<usize> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Some(n),
            _ => println!("please enter a number between 1 and {max}"),
        }
    }
}

fn pick_category(
    categories: &[Category],
    progress: &PlayerProgress,
    preselected: Option<CategoryId>,
) -> Option<Category> {
    if let Some(id) = preselected {
        let Some(category) = categories.iter().find(|c| c.id() == id) else {
            eprintln!("no category with id {id}");
            return None;
        };
        if category.is_premium() || !progress.is_unlocked(id) {
            eprintln!("category {} is locked", category.name());
            return None;
        }
        return Some(category.clone());
    }

    print_category_list(categories, progress);
    loop {
        let n = read_choice("pick a category: ", categories.len())?;
        let category = &categories[n - 1];
        if category.is_premium() {
            println!("{} is premium content", category.name());
            continue;
        }
        if !progress.is_unlocked(category.id()) {
            println!(
                "{} is still locked; earn three stars to advance",
                category.name()
            );
            continue;
        }
        return Some(category.clone());
    }
}

async fn run_play(app: &AppServices, preselected: Option<CategoryId>) -> Result<(), Box<dyn std::error::Error>> {
    let categories = catalog::categories();
    let progress = app.progress().snapshot();
    let Some(category) = pick_category(&categories, &progress, preselected) else {
        return Ok(());
    };

    let questions = generate_questions(&category)?;

    // Warm the image cache while the player reads the first question.
    let prefetcher = app.prefetcher();
    let prefetch_set = questions.clone();
    tokio::spawn(async move { prefetcher.prefetch(&prefetch_set).await });

    let mut session = QuizSession::new(category.id(), questions)?;
    let total = session.total_questions();

    println!();
    println!("{} {} — {total} questions", category.emoji(), category.name());

    while let Some(question) = session.current_question() {
        println!();
        println!(
            "Question {}/{total}: which animal is this?",
            session.answered_count() + 1
        );
        println!("  {}", question.correct_animal().image());
        for (i, animal) in question.answers().iter().enumerate() {
            println!("  {}. {}", i + 1, animal.name());
        }

        let Some(choice) = read_choice("your answer: ", question.answers().len()) else {
            println!("session abandoned");
            return Ok(());
        };
        let feedback = session.answer_current(choice - 1)?;
        if feedback.is_correct {
            println!("correct!");
        } else {
            let answer = &session.questions()[feedback.question_index];
            println!("not quite, it was {}", answer.correct_animal().name());
        }
    }

    let correct = session.correct_count();
    let completion = app.progress().complete_category(category.id(), correct).await;

    println!();
    println!("Done! {correct}/{total} correct — {}", stars_display(completion.stars));
    if completion.best_stars > completion.stars {
        println!("best for this category stays at {}", stars_display(completion.best_stars));
    }
    if let Some(unlocked) = completion.newly_unlocked {
        if let Some(next) = catalog::find(CategoryId::new(unlocked)) {
            println!("new category unlocked: {} {}", next.emoji(), next.name());
        }
    }

    Ok(())
}

fn run_stats(app: &AppServices) {
    let progress = app.progress().snapshot();
    let categories = catalog::categories();

    println!("Unlocked categories: {}", progress.unlocked_categories());
    println!(
        "Correct answers:     {}/{} ({}%)",
        progress.correct_answers(),
        progress.total_attempts(),
        progress.success_rate_percent()
    );
    println!("Total stars:         {}", progress.total_stars());
    println!();
    print_category_list(&categories, &progress);
}

async fn run_gradient(app: &AppServices, preset: Option<[&'static str; 2]>) {
    let Some(colors) = preset else {
        let progress = app.progress().snapshot();
        println!("current gradient: {}", progress.background_gradient().join(" -> "));
        println!("presets:");
        for (name, colors) in GRADIENT_PRESETS {
            println!("  {name:<9} {} -> {}", colors[0], colors[1]);
        }
        return;
    };

    let snapshot = app
        .progress()
        .set_background_gradient(colors.iter().map(|c| (*c).to_string()).collect())
        .await;
    println!("gradient set to {}", snapshot.background_gradient().join(" -> "));
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: play when no subcommand is provided. A recognized
    // subcommand is consumed here; flags stay for Args::parse.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Play,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Play,
        Some(first) => {
            let cmd = Command::from_arg(first).ok_or_else(|| {
                eprintln!("unknown subcommand: {first}");
                print_usage();
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
            })?;
            argv.remove(0);
            cmd
        }
    };

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let app = AppServices::new_sqlite(&parsed.db_url).await?;

    match cmd {
        Command::Play => run_play(&app, parsed.category_id).await,
        Command::Stats => {
            run_stats(&app);
            Ok(())
        }
        Command::Gradient => {
            run_gradient(&app, parsed.gradient).await;
            Ok(())
        }
        Command::Reset => {
            app.progress().reset_progress().await;
            println!("progress reset");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
