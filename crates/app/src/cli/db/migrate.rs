use catalog_app::database;
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Maximum pooled connections while migrating
    #[arg(long, default_value_t = 1)]
    max_connections: u32,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    if args.max_connections == 0 {
        return Err("max_connections must be at least 1".to_string());
    }

    let pool = database::connect(&args.database_url, args.max_connections)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    pool.close().await;

    println!("migrations applied");

    Ok(())
}
