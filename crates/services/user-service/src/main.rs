//! User Service - CLI over the user repository.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppError, AppResult};
use domain::User;
use user_service_lib::config::{StoreKind, UserServiceConfig};
use user_service_lib::service::UserService;
use user_service_lib::{demo, MigrateAction};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(author, version, about = "User repository service", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Storage backend
    #[arg(long, global = true, value_enum, env = "USER_STORE")]
    store: Option<StoreKind>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample create/get/update/delete walk-through
    Demo,
    /// Create a user
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
    /// Show a user
    Get {
        id: i32,
    },
    /// Replace every field of a user
    Update {
        id: i32,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
    /// Delete a user
    Delete {
        id: i32,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = UserServiceConfig::from_env();
    config.store = cli.store.unwrap_or_default();
    tracing::debug!(?config, "Configuration loaded");

    if let Err(e) = execute(cli.command, config).await {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn execute(command: Commands, config: UserServiceConfig) -> AppResult<()> {
    match command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            user_service_lib::run_migrations(&config, migrate_action).await
        }
        Commands::Demo => {
            let service = user_service_lib::build_service(&config).await?;
            demo::run(&service, config.store).await
        }
        Commands::Create { username, email } => {
            let service = user_service_lib::build_service(&config).await?;
            let user = service.create_user(username, email).await?;
            print_user(&user)
        }
        Commands::Get { id } => {
            let service = user_service_lib::build_service(&config).await?;
            let user = service.get_user_by_id(id).await?;
            print_user(&user)
        }
        Commands::Update {
            id,
            username,
            email,
        } => {
            let service = user_service_lib::build_service(&config).await?;
            let user = User::with_id(id, username, email);
            service.update_user(&user).await?;
            print_user(&user)
        }
        Commands::Delete { id } => {
            let service = user_service_lib::build_service(&config).await?;
            service.delete_user(id).await?;
            println!("Deleted user with ID: {}", id);
            Ok(())
        }
    }
}

fn print_user(user: &User) -> AppResult<()> {
    let json = serde_json::to_string_pretty(user).map_err(|e| AppError::internal(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
