use productos_api::{
    db::{clear_products, create_orm_conn, create_pool, run_migrations},
    models::ProductFields,
    store::{ProductStore, SeaOrmProductStore},
};

// Store round trip against a real database: create -> replace -> toggle -> delete.
#[tokio::test]
async fn sea_orm_store_crud_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run the Postgres store test."
            );
            return Ok(());
        }
    };

    let pool = create_pool(&database_url, 2).await?;
    run_migrations(&pool).await?;
    clear_products(&pool).await?;
    let store = SeaOrmProductStore::new(create_orm_conn(pool));

    let created = store.create(ProductFields::new("Monitor", 399.99)).await?;
    assert_eq!(created.id, 1);
    assert!(created.availability);

    let replaced = store
        .update(
            created.id,
            ProductFields {
                name: "Monitor curvo".into(),
                price: 450.0,
                availability: false,
            },
        )
        .await?
        .expect("product exists");
    assert_eq!(replaced.name, "Monitor curvo");
    assert!(!replaced.availability);
    assert!(replaced.updated_at >= created.updated_at);

    let all = store.find_all().await?;
    assert_eq!(all.len(), 1);

    assert!(store.update(2000, ProductFields::new("Nada", 1.0)).await?.is_none());
    assert!(store.find_by_id(2000).await?.is_none());

    assert!(store.delete(created.id).await?);
    assert!(!store.delete(created.id).await?);
    assert!(store.find_by_id(created.id).await?.is_none());

    Ok(())
}
