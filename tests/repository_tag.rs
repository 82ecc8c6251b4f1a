mod common;

use blog_backend::domain::entities::Tag;
use blog_backend::domain::repositories::{RepositoryError, TagRepository};
use blog_backend::infrastructure::persistence::PgTagRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_save_is_idempotent_by_name(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool));

    let first = repo.save(Tag::new("rust")).await.unwrap();
    let again = repo.save(Tag::new("rust")).await.unwrap();

    assert!(first.id > 0);
    assert_eq!(first, again);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[sqlx::test]
async fn test_find_all_sorted_by_name(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool));
    for name in ["web", "axum", "rust"] {
        repo.save(Tag::new(name)).await.unwrap();
    }

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, vec!["axum", "rust", "web"]);
}

#[sqlx::test]
async fn test_find_by_name(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool));
    let saved = repo.save(Tag::new("sql")).await.unwrap();

    assert_eq!(repo.find_by_name("sql").await.unwrap(), saved);
    assert!(matches!(
        repo.find_by_name("cobol").await,
        Err(RepositoryError::NotFound)
    ));
}
