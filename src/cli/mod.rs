mod output;
mod theme;

use crate::cli::theme::CliTheme;
use crate::model::QuoteBook;
use crate::store::{QuoteStore, resolve_store_path};
use anyhow::{Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use rand::seq::SliceRandom;
use std::io;
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "quoter", version = VERSION, about = "Save and view quotes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, env = "QUOTER_STORE")]
    store_path: Option<PathBuf>,
    #[arg(long, env = "QUOTER_CLI_CONFIG")]
    cli_config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    Display(DisplayArgs),
    Add(AddArgs),
    Search(SearchArgs),
    Completions(CompletionsArgs),
}

#[derive(Args)]
struct DisplayArgs {
    #[arg(long)]
    user: Option<String>,
    #[arg(long)]
    random: bool,
}

#[derive(Args)]
struct AddArgs {
    user: String,
    quote: String,
}

#[derive(Args)]
struct SearchArgs {
    phrase: String,
    #[arg(long)]
    user: Option<String>,
}

#[derive(Args)]
struct CompletionsArgs {
    #[arg(value_enum)]
    shell: Shell,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions(args) => {
            generate_completions(args.shell);
            Ok(())
        }
        command => {
            let store_path = resolve_store_path(cli.store_path)?;
            let store = QuoteStore::new(store_path);
            let theme = theme::load_cli_theme(cli.cli_config)?;
            let mut book = store.load()?;

            match command {
                Commands::Display(args) => display_quotes(&book, args, &theme)?,
                Commands::Add(args) => add_quote(&mut book, args, &theme)?,
                Commands::Search(args) => search_quotes(&book, args, &theme)?,
                Commands::Completions(_) => unreachable!(),
            }

            store.save(&book)
        }
    }
}

fn add_quote(book: &mut QuoteBook, args: AddArgs, theme: &CliTheme) -> Result<()> {
    book.add(&args.user, &args.quote);
    output::print_attributed(&args.user, &args.quote, theme);
    Ok(())
}

fn display_quotes(book: &QuoteBook, args: DisplayArgs, theme: &CliTheme) -> Result<()> {
    if args.random {
        let user = match args.user {
            Some(user) => user,
            None => {
                let users: Vec<&str> = book.users().collect();
                users
                    .choose(&mut rand::thread_rng())
                    .map(|user| user.to_string())
                    .ok_or_else(|| anyhow!("no quotes in the store yet"))?
            }
        };
        let quotes = book
            .quotes(&user)
            .ok_or_else(|| anyhow!("unknown user '{}'", user))?;
        let quote = quotes
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| anyhow!("user '{}' has no quotes", user))?;
        output::print_attributed(&user, quote, theme);
        return Ok(());
    }

    if let Some(user) = args.user {
        let quotes = book
            .quotes(&user)
            .ok_or_else(|| anyhow!("unknown user '{}'", user))?;
        for quote in quotes {
            output::print_bare(quote, theme);
        }
        return Ok(());
    }

    for (user, quotes) in book.iter() {
        for quote in quotes {
            output::print_attributed(user, quote, theme);
        }
    }
    Ok(())
}

fn search_quotes(book: &QuoteBook, args: SearchArgs, theme: &CliTheme) -> Result<()> {
    if let Some(user) = args.user {
        let quotes = book
            .quotes(&user)
            .ok_or_else(|| anyhow!("unknown user '{}'", user))?;
        for quote in quotes.iter().filter(|quote| quote.contains(&args.phrase)) {
            output::print_attributed(&user, quote, theme);
        }
        return Ok(());
    }

    for (user, quotes) in book.iter() {
        for quote in quotes.iter().filter(|quote| quote.contains(&args.phrase)) {
            output::print_attributed(user, quote, theme);
        }
    }
    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "quoter", &mut io::stdout());
}
