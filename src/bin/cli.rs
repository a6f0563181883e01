//! SocialKV CLI
//!
//! Command-line interface over the accounts and status update CSV files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use socialkv::{blank_field, Config, Engine, Record, User, UserStatus};
use tracing_subscriber::{fmt, EnvFilter};

/// SocialKV CLI
#[derive(Parser, Debug)]
#[command(name = "socialkv-cli")]
#[command(about = "Manage user accounts and status updates stored as CSV")]
#[command(version)]
struct Args {
    /// Directory holding the CSV files
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// User accounts file name
    #[arg(short, long, default_value = "accounts.csv")]
    accounts: String,

    /// Status updates file name
    #[arg(short, long, default_value = "status_updates.csv")]
    statuses: String,

    /// Do not write the files back after a change
    #[arg(long)]
    no_save: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new user
    AddUser {
        user_id: String,
        email: String,
        user_name: String,
        user_last_name: String,
    },

    /// Update an existing user
    UpdateUser {
        user_id: String,
        email: String,
        user_name: String,
        user_last_name: String,
    },

    /// Delete a user
    DeleteUser { user_id: String },

    /// Show a user
    SearchUser { user_id: String },

    /// Add a new status update
    AddStatus {
        status_id: String,
        user_id: String,
        status_text: String,
    },

    /// Update an existing status update
    UpdateStatus {
        status_id: String,
        user_id: String,
        status_text: String,
    },

    /// Delete a status update
    DeleteStatus { status_id: String },

    /// Show a status update
    SearchStatus { status_id: String },

    /// Merge users from another CSV file
    ImportUsers { file: PathBuf },

    /// Merge status updates from another CSV file
    ImportStatuses { file: PathBuf },

    /// List all users
    ListUsers,

    /// List all status updates
    ListStatuses,
}

impl Commands {
    /// Whether a successful run changes the collections
    fn mutates(&self) -> bool {
        !matches!(
            self,
            Commands::SearchUser { .. }
                | Commands::SearchStatus { .. }
                | Commands::ListUsers
                | Commands::ListStatuses
        )
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,socialkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .accounts_file(&args.accounts)
        .status_file(&args.statuses)
        .autosave(!args.no_save)
        .build();

    tracing::debug!("SocialKV CLI v{}", socialkv::VERSION);

    let mut engine = match Engine::open(config) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Failed to open data files: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mutates = args.command.mutates();
    let ok = run(&mut engine, args.command);

    if ok && mutates && engine.config().autosave && !engine.save_all() {
        return ExitCode::FAILURE;
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Execute one command, printing results to stdout
fn run(engine: &mut Engine, command: Commands) -> bool {
    match command {
        Commands::AddUser { user_id, email, user_name, user_last_name } => {
            let values = [
                user_id.as_str(),
                email.as_str(),
                user_name.as_str(),
                user_last_name.as_str(),
            ];
            if has_blank(&values, User::HEADER) {
                return false;
            }
            report(
                engine.add_user(&user_id, &email, &user_name, &user_last_name),
                "User was successfully added",
                "An error occurred while trying to add new user",
            )
        }
        Commands::UpdateUser { user_id, email, user_name, user_last_name } => {
            let values = [
                user_id.as_str(),
                email.as_str(),
                user_name.as_str(),
                user_last_name.as_str(),
            ];
            if has_blank(&values, User::HEADER) {
                return false;
            }
            report(
                engine.update_user(&user_id, &email, &user_name, &user_last_name),
                "User was successfully updated",
                "An error occurred while trying to update user",
            )
        }
        Commands::DeleteUser { user_id } => report(
            engine.delete_user(&user_id),
            "User was successfully deleted",
            "An error occurred while trying to delete user",
        ),
        Commands::SearchUser { user_id } => match engine.search_user(&user_id) {
            Some(user) => {
                println!("User ID: {}", user.user_id);
                println!("Email: {}", user.email);
                println!("Name: {}", user.user_name);
                println!("Last name: {}", user.user_last_name);
                true
            }
            None => {
                println!("ERROR: User does not exist");
                false
            }
        },
        Commands::AddStatus { status_id, user_id, status_text } => {
            let values = [status_id.as_str(), user_id.as_str(), status_text.as_str()];
            if has_blank(&values, UserStatus::HEADER) {
                return false;
            }
            report(
                engine.add_status(&status_id, &user_id, &status_text),
                "New status was successfully added",
                "An error occurred while trying to add new status",
            )
        }
        Commands::UpdateStatus { status_id, user_id, status_text } => {
            let values = [status_id.as_str(), user_id.as_str(), status_text.as_str()];
            if has_blank(&values, UserStatus::HEADER) {
                return false;
            }
            report(
                engine.update_status(&status_id, &user_id, &status_text),
                "Status was successfully updated",
                "An error occurred while trying to update status",
            )
        }
        Commands::DeleteStatus { status_id } => report(
            engine.delete_status(&status_id),
            "Status was successfully deleted",
            "An error occurred while trying to delete status",
        ),
        Commands::SearchStatus { status_id } => match engine.search_status(&status_id) {
            Some(status) => {
                println!("Status ID: {}", status.status_id);
                println!("User ID: {}", status.user_id);
                println!("Status text: {}", status.status_text);
                true
            }
            None => {
                println!("ERROR: Status does not exist");
                false
            }
        },
        Commands::ImportUsers { file } => report(
            engine.load_users(&file),
            "Users were successfully imported",
            "An error occurred while importing users",
        ),
        Commands::ImportStatuses { file } => report(
            engine.load_statuses(&file),
            "Statuses were successfully imported",
            "An error occurred while importing statuses",
        ),
        Commands::ListUsers => {
            for user in engine.users().records_sorted() {
                println!(
                    "{}\t{}\t{}\t{}",
                    user.user_id, user.email, user.user_name, user.user_last_name
                );
            }
            true
        }
        Commands::ListStatuses => {
            for status in engine.statuses().records_sorted() {
                println!("{}\t{}\t{}", status.status_id, status.user_id, status.status_text);
            }
            true
        }
    }
}

/// Refuse values the CSV files could not hold; saved rows must load back
fn has_blank(values: &[&str], header: &'static [&'static str]) -> bool {
    match blank_field(values, header) {
        Some(field) => {
            println!("ERROR: {} must not be empty", field);
            true
        }
        None => false,
    }
}

fn report(ok: bool, success: &str, failure: &str) -> bool {
    if ok {
        println!("{}", success);
    } else {
        println!("{}", failure);
    }
    ok
}
