//! User Service - command-line entry point for user management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::User;
use user_service_lib::commands;
use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User management service")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a user's password, store the user and print the stored record
    AssignPassword {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Plaintext password (omit to create the user without one)
        #[arg(long, env = "USER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration (reads .env)
    let config = UserServiceConfig::from_env();

    init_tracing(cli.verbose, &config);
    tracing::debug!(service = %config.service.service_name, "Configuration loaded");

    let result = match cli.command {
        Commands::AssignPassword {
            username,
            email,
            password,
        } => {
            let user = match password {
                Some(password) => User::new(username, email, password),
                None => User::without_password(username, email),
            };
            commands::assign_password::execute(&config, user)
                .await
                .and_then(|report| report.to_json())
                .map(|rendered| println!("{}", rendered))
        }
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, config: &UserServiceConfig) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        config.service.log_level.clone()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
