//! Admin CLI for the bot's grouped feed storage.
//!
//! Inspects and edits the group documents inside the bot's JSON database:
//! which feeds belong to a group and which comment texts the bot may post on
//! submissions from them.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;

use feedgroups::config::load_config;
use feedgroups::group::{GroupStore, group_names};
use feedgroups::store::JsonFileStore;

const CONFIG_FILE: &str = "feedgroups.toml";

#[derive(Parser)]
#[command(
    name = "feedgroups",
    version,
    about = "Manage grouped feeds and comment pools for the posting bot"
)]
struct Cli {
    /// Path to the JSON database file (overrides the configured path).
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every group name, one per line.
    List,
    /// Print a group's feeds and comments (creates the group if missing).
    Show { group: String },
    /// Add feed names to a group.
    AddFeeds {
        group: String,
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Replace a group's feed set.
    SetFeeds {
        group: String,
        names: Vec<String>,
    },
    /// Add candidate comment texts to a group.
    AddComments {
        group: String,
        #[arg(required = true)]
        comments: Vec<String>,
    },
}

fn main() {
    feedgroups::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = open_store(cli.db.as_deref())?;
    match cli.command {
        Command::List => cmd_list(&store),
        Command::Show { group } => cmd_show(&store, &group),
        Command::AddFeeds { group, names } => {
            GroupStore::bind(&store, group)?.add_feeds(&to_values(names))
        }
        Command::SetFeeds { group, names } => {
            GroupStore::bind(&store, group)?.set_feeds(&to_values(names))
        }
        Command::AddComments { group, comments } => {
            GroupStore::bind(&store, group)?.add_comments(&to_values(comments))
        }
    }
}

fn open_store(db_override: Option<&Path>) -> Result<JsonFileStore> {
    let path = match db_override {
        Some(path) => path.to_path_buf(),
        None => load_config(Path::new(CONFIG_FILE))?.database_path,
    };
    Ok(JsonFileStore::open(path))
}

fn to_values(args: Vec<String>) -> Vec<Value> {
    args.into_iter().map(Value::String).collect()
}

fn cmd_list(store: &JsonFileStore) -> Result<()> {
    for name in group_names(store)? {
        println!("{name}");
    }
    Ok(())
}

fn cmd_show(store: &JsonFileStore, group: &str) -> Result<()> {
    let group = GroupStore::bind(store, group)?;
    println!("group: {}", group.name());
    println!("feeds:");
    for feed in group.feeds()? {
        println!("  {feed}");
    }
    println!("comments:");
    for comment in group.comments()? {
        println!("  {comment}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_show() {
        let cli = Cli::parse_from(["feedgroups", "show", "art"]);
        assert!(matches!(cli.command, Command::Show { group } if group == "art"));
        assert!(cli.db.is_none());
    }

    #[test]
    fn parse_add_feeds_with_db_override() {
        let cli = Cli::parse_from(["feedgroups", "--db", "x.json", "add-feeds", "art", "doodles"]);
        assert_eq!(cli.db, Some(PathBuf::from("x.json")));
        match cli.command {
            Command::AddFeeds { group, names } => {
                assert_eq!(group, "art");
                assert_eq!(names, vec!["doodles"]);
            }
            _ => panic!("expected add-feeds"),
        }
    }

    #[test]
    fn parse_add_feeds_requires_a_name() {
        let result = Cli::try_parse_from(["feedgroups", "add-feeds", "art"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_set_feeds_accepts_empty_names() {
        let cli = Cli::parse_from(["feedgroups", "set-feeds", "art"]);
        match cli.command {
            Command::SetFeeds { group, names } => {
                assert_eq!(group, "art");
                assert!(names.is_empty());
            }
            _ => panic!("expected set-feeds"),
        }
    }
}
