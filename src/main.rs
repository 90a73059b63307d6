use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use twig::areas::repository::Repository;
use twig::errors::twig_error;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny local version-control system",
    long_about = "twig tracks snapshots of a working directory as an immutable, \
    content-addressed history, supports branching, and merges diverged branches \
    with a three-way algorithm.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates a .twig directory with a root commit on the master branch \
        in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command folds the staged additions and removals into a new commit \
        on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, and stop tracking it if the current commit does"
    )]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "checkout <branch> switches to a branch, checkout -- <file> restores a file \
        from the current commit and checkout <commit> -- <file> restores it from the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch to switch to, or commit to restore from")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "File to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Check out the files of a commit and move the current branch to it"
    )]
    Reset {
        #[arg(index = 1, help = "Full or abbreviated commit id")]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working tree changes")]
    Status,
}

fn open_repository(path: Option<&str>) -> Result<Repository> {
    let path = match path {
        Some(path) => {
            std::fs::create_dir_all(path)?;
            path.to_string()
        }
        None => std::env::current_dir()?.to_string_lossy().to_string(),
    };

    Repository::new(&path, Box::new(std::io::stdout()))
}

fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Init { path } => {
            open_repository(path.as_deref())?.init()?;
        }
        Commands::Add { file } => open_repository(None)?.add(file)?,
        Commands::Commit { message } => {
            open_repository(None)?.commit(message)?;
        }
        Commands::Rm { file } => open_repository(None)?.rm(file)?,
        Commands::Checkout { target, file } => {
            let mut repository = open_repository(None)?;

            match (target, file) {
                (target, Some(file)) => repository.checkout_file(target.as_deref(), file)?,
                (Some(branch), None) => repository.checkout_branch(branch)?,
                (None, None) => anyhow::bail!("Incorrect operands."),
            }
        }
        Commands::Branch { name } => open_repository(None)?.branch(name)?,
        Commands::RmBranch { name } => open_repository(None)?.rm_branch(name)?,
        Commands::Reset { commit } => {
            open_repository(None)?.reset(commit)?;
        }
        Commands::Merge { branch } => {
            open_repository(None)?.merge(branch)?;
        }
        Commands::Log => open_repository(None)?.log()?,
        Commands::GlobalLog => open_repository(None)?.global_log()?,
        Commands::Find { message } => {
            open_repository(None)?.find(message)?;
        }
        Commands::Status => {
            open_repository(None)?.status()?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match twig_error(&err) {
                Some(twig_err) => eprintln!("{}", twig_err.to_string().red()),
                None => eprintln!("{} {err:#}", "error:".red().bold()),
            }
            ExitCode::FAILURE
        }
    }
}
