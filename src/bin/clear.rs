use productos_api::{
    config::AppConfig,
    db::{clear_products, create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    run_migrations(&pool).await?;

    if let Err(err) = clear_products(&pool).await {
        eprintln!("Error clearing the database: {err}");
        std::process::exit(1);
    }

    println!("Database cleared successfully.");
    Ok(())
}
