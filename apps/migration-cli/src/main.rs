use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use tombola::config::db::DbProfile;
use tombola::infra::db::connect_db;

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Status => MigrationCommand::Status,
        }
    }
}

/// In-memory SQLite is deliberately absent: the database would vanish with
/// the process.
#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Tombola database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Database type. Postgres reads POSTGRES_HOST, POSTGRES_PORT, PROD_DB,
    /// APP_DB_USER and APP_DB_PASSWORD.
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,

    /// SQLite file, for --db sqlite-file
    #[arg(long, default_value = "tombola.sqlite")]
    sqlite_path: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let profile = match args.db {
        Db::Postgres => DbProfile::Postgres,
        Db::SqliteFile => DbProfile::SqliteFile(args.sqlite_path),
    };

    let conn = match connect_db(&profile).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ Could not connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command.into()).await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(1);
    }
}
