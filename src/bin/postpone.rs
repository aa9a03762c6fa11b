//! Postpone or move a task of a folder of Markdown notes.
//!
//! Without any option, this prints the postponement menu of the task.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use tasks_postponer::applier;
use tasks_postponer::control::Button;
use tasks_postponer::markdown::MarkdownFormat;
use tasks_postponer::menu::{MenuEntry, PostponeMenu};
use tasks_postponer::notice::NoticeLog;
use tasks_postponer::relocation::{self, RelocationOutcome};
use tasks_postponer::traits::Host;
use tasks_postponer::utils::{print_task, today};
use tasks_postponer::Vault;

#[derive(Parser, Debug)]
#[command(name = "postpone", about = "Postpone or move a task of a Markdown vault")]
struct Cli {
    /// The folder that contains the notes
    vault: PathBuf,
    /// The name of the note that contains the task (without `.md`)
    note: String,
    /// The line of the task in this note (starting at 1)
    line: usize,

    /// Apply the menu entry with this number
    #[arg(short, long)]
    apply: Option<usize>,

    /// Move the task to this note
    #[arg(short, long, conflicts_with = "apply")]
    move_to: Option<String>,

    /// Print the menu as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let vault = match Vault::from_folder(&cli.vault) {
        Ok(vault) => vault,
        Err(err) => {
            eprintln!("Unable to open vault {:?}: {}", cli.vault, err);
            exit(1);
        },
    };
    let task = match vault.task_at(&cli.note, cli.line) {
        Ok(task) => task,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        },
    };

    let today = today();
    let menu = PostponeMenu::new(&task, today);
    let notices = NoticeLog::new();
    let host = Host::new(&vault, &vault, &notices, &MarkdownFormat);
    let button = Button::new();

    if let Some(destination) = &cli.move_to {
        vault.set_active(Some(destination.as_str()));
        let outcome = relocation::move_task_here(&task, &button, &host).await;
        print_notices(&notices);
        if let RelocationOutcome::Moved { .. } = outcome {
            save_or_exit(&vault);
        } else {
            exit(2);
        }
        return;
    }

    match cli.apply {
        None => print_menu(&menu, cli.json),
        Some(number) => {
            let postponement = match menu.entries().get(number) {
                Some(MenuEntry::Postpone { postponement, .. }) => *postponement,
                _ => {
                    eprintln!("Entry {} is not a postponement option", number);
                    exit(1);
                },
            };
            let outcome = applier::postpone(&task, &postponement, today, &button, &host).await;
            print_notices(&notices);
            match outcome {
                Ok(outcome) => {
                    log::debug!("Postponement outcome: {:?}", outcome);
                    save_or_exit(&vault);
                    if let Ok(updated) = vault.task_at(&cli.note, cli.line) {
                        print_task(&updated);
                    }
                },
                Err(err) => {
                    eprintln!("Unable to save the task: {}", err);
                    exit(2);
                },
            }
        },
    }
}

fn print_menu(menu: &PostponeMenu, json: bool) {
    if json {
        match serde_json::to_string_pretty(menu) {
            Ok(s) => println!("{}", s),
            Err(err) => eprintln!("Unable to serialize the menu: {}", err),
        }
        return;
    }

    for (number, entry) in menu.entries().iter().enumerate() {
        match entry {
            MenuEntry::Separator => println!("  ---"),
            MenuEntry::Postpone { state: Some(state), .. } => {
                let check = if state.checked { "✓" } else { " " };
                println!("{:>2} {} {}", number, check, state.title);
            },
            MenuEntry::Postpone { postponement, state: None } => {
                println!("{:>2}   ({}, disabled: this task has no date)", number, postponement);
            },
            MenuEntry::MoveHere => println!("   Move here (use --move-to)"),
        }
    }
}

fn print_notices(notices: &NoticeLog) {
    for notice in notices.notices() {
        println!("{}", notice.message);
    }
}

fn save_or_exit(vault: &Vault) {
    if let Err(err) = vault.save_to_folder() {
        eprintln!("Unable to save the vault: {}", err);
        exit(2);
    }
}
