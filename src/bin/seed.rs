use productos_api::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    models::ProductFields,
    store::{ProductStore, SeaOrmProductStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    run_migrations(&pool).await?;

    let store = SeaOrmProductStore::new(create_orm_conn(pool));
    seed_products(&store).await?;
    Ok(())
}

async fn seed_products(store: &impl ProductStore) -> anyhow::Result<()> {
    let products = vec![
        ("Monitor Curvo de 49 Pulgadas", 399.99),
        ("Audífonos Inalámbricos", 89.5),
        ("Teclado Mecánico", 120.0),
        ("Mouse Ergonómico", 35.75),
    ];

    let existing: Vec<String> = store
        .find_all()
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();

    for (name, price) in products {
        if existing.iter().any(|n| n == name) {
            continue;
        }
        let product = store.create(ProductFields::new(name, price)).await?;
        println!("Seeded product {} ({})", product.name, product.id);
    }

    println!("Seed completed");
    Ok(())
}
