//! Command-line shell for the wiki document engine.
//!
//! # Responsibility
//! - Expose the core operations against a wiki folder on disk: project
//!   management, section reads and edits, daily-log merges, and the weekly
//!   window projection.
//!
//! The generation collaborator is not wired here; edit bodies come from a
//! file or stdin, which keeps the binary usable offline and in scripts.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use wikihelper_core::{
    append_under_heading, collect_recent_log_entries, extract_section, merge_daily_log_entry,
    replace_section, FsWikiStore, WikiStore, DAILY_LOG_TITLE,
};

#[derive(Parser)]
#[command(name = "wikihelper", about = "Section-addressable project wiki maintenance")]
struct Cli {
    /// Directory holding one `{project}.md` file per project.
    #[arg(long, default_value = "wikis")]
    wiki_dir: PathBuf,

    /// Enable file logging into this directory (absolute path).
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List known projects.
    List,
    /// Create a new project wiki from the standard template.
    New { name: String },
    /// Print a project's full document.
    Show { project: String },
    /// Print the body of one section.
    Extract { project: String, section: String },
    /// Replace the body of one section (creates it when absent).
    Replace {
        project: String,
        section: String,
        /// Body file; stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Prepend text under a section header (creates it when absent).
    Append {
        project: String,
        section: String,
        /// Text file; stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Merge a dated `### YYYY-MM-DD` contribution into the Daily Log.
    MergeLog {
        project: String,
        /// Contribution file; stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the Daily Log entries of the trailing week.
    Recent {
        project: String,
        /// Reference date (YYYY-MM-DD); today when omitted.
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir.to_str().context("log dir must be valid UTF-8")?;
        wikihelper_core::init_logging(wikihelper_core::default_log_level(), log_dir)
            .map_err(|err| anyhow::anyhow!(err))?;
    }

    let store = FsWikiStore::new(&cli.wiki_dir);
    match cli.command {
        Command::List => {
            for project in store.list_projects()? {
                println!("{project}");
            }
        }
        Command::New { name } => {
            store.create_project(&name)?;
            println!("created {name}");
        }
        Command::Show { project } => {
            print!("{}", load_document(&store, &project)?);
        }
        Command::Extract { project, section } => {
            let doc = load_document(&store, &project)?;
            println!("{}", extract_section(&doc, &section));
        }
        Command::Replace {
            project,
            section,
            file,
        } => {
            let body = read_input(file)?;
            let doc = load_document(&store, &project)?;
            store.save(&project, &replace_section(&doc, &section, &body))?;
        }
        Command::Append {
            project,
            section,
            file,
        } => {
            let text = read_input(file)?;
            let doc = load_document(&store, &project)?;
            store.save(&project, &append_under_heading(&doc, &section, &text))?;
        }
        Command::MergeLog { project, file } => {
            let contribution = read_input(file)?;
            let doc = load_document(&store, &project)?;
            let merged = merge_daily_log_entry(&doc, &contribution);
            if merged == doc {
                eprintln!("nothing to merge");
            }
            store.save(&project, &merged)?;
        }
        Command::Recent { project, as_of } => {
            let doc = load_document(&store, &project)?;
            let body = extract_section(&doc, DAILY_LOG_TITLE);
            let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
            for entry in collect_recent_log_entries(&body, as_of) {
                println!("### {}\n{}\n", entry.date, entry.text);
            }
        }
    }
    Ok(())
}

fn load_document(store: &FsWikiStore, project: &str) -> Result<String> {
    match store.load(project)? {
        Some(doc) => Ok(doc),
        None => bail!("project not found: `{project}`"),
    }
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read `{}`", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
