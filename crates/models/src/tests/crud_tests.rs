use crate::product;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, PaginatorTrait, Set};
use anyhow::Result;

use super::setup_test_db;

fn new_row(name: &str, description: &str, price: f64) -> product::ActiveModel {
    product::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        price: Set(price),
    }
}

/// Insert assigns ascending ids
#[tokio::test]
async fn test_insert_assigns_id() -> Result<()> {
    let db = setup_test_db().await?;

    let first = new_row("Test Product", "Description", 99.99).insert(&db).await?;
    let second = new_row("Product 2", "Description 2", 149.99).insert(&db).await?;

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.name, "Test Product");
    assert_eq!(first.price, 99.99);
    Ok(())
}

/// Read, update and delete a single row
#[tokio::test]
async fn test_product_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = new_row("Test Product", "Description", 99.99).insert(&db).await?;

    let found = product::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let mut am: product::ActiveModel = created.clone().into();
    am.name = Set("Updated Name".into());
    am.price = Set(199.99);
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Updated Name");
    assert_eq!(updated.description, "Description");
    assert_eq!(updated.price, 199.99);

    product::Entity::delete_by_id(created.id).exec(&db).await?;
    let gone = product::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}

/// Counting and bulk delete
#[tokio::test]
async fn test_count_and_delete_many() -> Result<()> {
    let db = setup_test_db().await?;
    assert_eq!(product::Entity::find().count(&db).await?, 0);

    new_row("A", "a", 1.0).insert(&db).await?;
    new_row("B", "b", 2.0).insert(&db).await?;
    assert_eq!(product::Entity::find().count(&db).await?, 2);

    let res = product::Entity::delete_many().exec(&db).await?;
    assert_eq!(res.rows_affected, 2);
    assert_eq!(product::Entity::find().count(&db).await?, 0);
    Ok(())
}
