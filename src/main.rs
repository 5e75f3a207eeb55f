//! Warble - a small terminal social feed
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use warble::{Config, FeedStore, Seed};

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match parse_args()? {
        Command::Run => warble::app::run(),
        Command::Feed { limit, json } => print_feed(limit, json),
        Command::Init => init_config(),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    Run,
    Feed { limit: Option<usize>, json: bool },
    Init,
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Run);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "init" => Ok(Command::Init),

        "feed" | "timeline" | "tl" => {
            let json = args.iter().any(|a| a == "--json");
            let limit = match args.iter().position(|a| a == "--limit" || a == "-l") {
                Some(i) => {
                    let raw = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow::anyhow!("Missing value for --limit"))?;
                    Some(
                        raw.parse::<usize>()
                            .with_context(|| format!("Invalid --limit value: {raw}"))?,
                    )
                }
                None => None,
            };
            Ok(Command::Feed { limit, json })
        }

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'warble --help' for usage"
        )),
    }
}

fn print_feed(limit: Option<usize>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let seed = Seed::load_or_builtin(config.seed_file().as_deref());
    let feed = FeedStore::new(seed.posts);
    let limit = limit.unwrap_or(config.feed_limit);
    let posts: Vec<_> = feed.iter().take(limit).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("🐦 Timeline ({} of {})", posts.len(), feed.len());
    println!("{}", "─".repeat(60));
    for post in posts {
        println!("\n{} {}", post.author_name, post.display_handle());
        println!("{}", post.content);
        if let Some(url) = &post.image_url {
            println!("🖼  {}", url);
        }
        println!(
            "💬 {}  🔁 {}  ♡ {}",
            post.comments, post.retweets, post.likes
        );
    }

    Ok(())
}

fn init_config() -> Result<()> {
    let path = Config::default_path()?;
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    Config::default().save_to(&path)?;
    println!("✓ Wrote {}", path.display());
    Ok(())
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"{}
🐦 Warble - a small terminal social feed

USAGE:
    warble                             Launch TUI
    warble [COMMAND]

COMMANDS:
    feed [OPTIONS]                     Print the starting feed
      Options:
        -l, --limit <n>                Number of posts (default: feed_limit)
        --json                         Print JSON instead of text

    init                               Write a default config file

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

KEYBINDINGS (TUI):
    Navigation
      Tab/Shift+Tab Focus sidebar links
      Enter         Open focused link
      j/↓ k/↑       Move through the feed
      g/G           Jump to top/bottom

    Compose
      i/n           Start writing
      Ctrl+S        Post and clear the draft
      Ctrl+Enter    Quick post (keeps the draft)
      Alt+Enter     Quick post, for terminals without Ctrl+Enter
      Esc           Stop writing

    Menus
      p             Sidebar menu (log in/out)
      a             Account drawer (links, settings, theme)
      Esc           Close menu

    q               Quit

CONFIG:
    {}
"#,
        warble::LOGO,
        config_path
    );
}

fn print_version() {
    println!("warble {}", warble::VERSION);
}
