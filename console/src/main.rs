use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use taskboard_console::{render, App, Transport, UreqTransport};
use taskboard_core::ApiClient;
use tracing_subscriber::EnvFilter;

/// Manage users and todos of a taskboard API from the terminal
#[derive(Parser)]
#[command(name = "taskboard")]
#[command(version)]
struct Cli {
    /// Origin the `/api/python/*` routes are served from
    #[arg(long, env = "TASKBOARD_API_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Connection timeout in seconds
    #[arg(long, default_value_t = 5)]
    connect_timeout: u64,

    /// Do not offer to retry a failed initial load
    #[arg(long)]
    no_retry: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show users and todos (default)
    List,
    /// Check that the API answers
    Status,
    /// Create a user
    AddUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Create a todo assigned to a user
    AddTodo {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Owner id; required
        #[arg(long)]
        user: Option<i64>,
    },
    /// Flip a todo between open and completed
    Toggle { id: i64 },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();
}

fn confirm_retry() -> io::Result<bool> {
    print!("Retry? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

/// Initial load, with the banner's manual retry.
fn mount<T: Transport>(app: &mut App<T>, offer_retry: bool) -> io::Result<bool> {
    loop {
        if app.load() {
            return Ok(true);
        }
        println!("{}", render::page(app.shell(), app.user_panel(), app.todo_panel()));
        if !offer_retry || !confirm_retry()? {
            return Ok(false);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let client = ApiClient::new(&cli.base_url);
    let transport = UreqTransport::new(Duration::from_secs(cli.connect_timeout));

    if let Some(Commands::Status) = cli.command {
        let exchange = transport.execute(client.build_health());
        let health = client.parse_health(exchange)?;
        println!("{} ({}) version {}", health.status, health.message, health.version);
        return Ok(());
    }

    let mut app = App::new(client, transport);
    if !mount(&mut app, !cli.no_retry)? {
        bail!("could not load data from {}", cli.base_url);
    }

    match cli.command.unwrap_or(Commands::List) {
        Commands::List | Commands::Status => {}
        Commands::AddUser { name, email } => {
            if !app.create_user(&name, &email) {
                print!("{}", render::user_section(app.shell(), app.user_panel()));
                bail!("user was not created");
            }
        }
        Commands::AddTodo {
            title,
            description,
            user,
        } => {
            if !app.create_todo(&title, &description, user) {
                print!("{}", render::todo_section(app.shell(), app.todo_panel()));
                bail!("todo was not created");
            }
        }
        Commands::Toggle { id } => app.toggle(id),
    }

    print!("{}", render::page(app.shell(), app.user_panel(), app.todo_panel()));
    Ok(())
}
