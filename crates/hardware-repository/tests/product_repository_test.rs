//! Integration tests for SqliteProductRepository.

mod common;

use common::{new_product, TestDatabase};
use hardware_core::{HardwareError, NewProduct};
use hardware_repository::{ProductRepository, SqliteProductRepository};

#[tokio::test]
async fn test_save_and_list() {
    let db = TestDatabase::new().await;
    let repo = SqliteProductRepository::new(db.pool());

    let hammer = repo.save(new_product("Hammer", 12.5)).await.unwrap();
    let image = Some("https://cdn.example.com/saw.png".to_string());
    let saw = repo
        .save(NewProduct::new("Saw", "Hand saw", 20.0, "Tools", image.clone()).unwrap())
        .await
        .unwrap();

    let products = repo.find_all().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, hammer.id);
    assert_eq!(products[0].price, 12.5);
    assert!(products[0].image.is_none());
    assert_eq!(products[1].id, saw.id);
    assert_eq!(products[1].image, image);
}

#[tokio::test]
async fn test_find_by_name_is_exact() {
    let db = TestDatabase::new().await;
    let repo = SqliteProductRepository::new(db.pool());

    repo.save(new_product("Drill", 89.99)).await.unwrap();

    let found = repo.find_by_name("Drill").await.unwrap().expect("Product not found");
    assert_eq!(found.category, "Tools");
    assert!(repo.find_by_name("drill").await.unwrap().is_none());
    assert!(repo.exists_by_name("Drill").await.unwrap());
    assert!(!repo.exists_by_name("Drill Press").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_name_violates_constraint() {
    let db = TestDatabase::new().await;
    let repo = SqliteProductRepository::new(db.pool());

    repo.save(new_product("Wrench", 9.0)).await.unwrap();
    let err = repo.save(new_product("Wrench", 11.0)).await.unwrap_err();

    assert!(matches!(err, HardwareError::Conflict(_)));
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}
