mod common;

use blog_backend::domain::entities::{Article, Comment};
use blog_backend::domain::repositories::{ArticleRepository, CommentRepository};
use blog_backend::infrastructure::persistence::{PgArticleRepository, PgCommentRepository};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

fn new_comment(article_id: i64, user_id: i64, content: &str) -> Comment {
    Comment {
        id: 0,
        article_id,
        user_id,
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

#[sqlx::test]
async fn test_save_and_list_comments(pool: PgPool) {
    let user = common::insert_test_user(&pool, "reader").await;
    let pool = Arc::new(pool);
    let articles = PgArticleRepository::new(pool.clone());
    let comments = PgCommentRepository::new(pool);

    let mut article = Article::new("Post", "Body", Vec::new());
    article.author_id = user;
    let article = articles.create(article).await.unwrap();

    let first = comments
        .save(new_comment(article.id, user, "First!"))
        .await
        .unwrap();
    let second = comments
        .save(new_comment(article.id, user, "Second"))
        .await
        .unwrap();

    assert!(first.id > 0);
    assert_eq!(first.article_id, article.id);

    let listed = comments.find_by_article_id(article.id).await.unwrap();
    assert_eq!(listed, vec![first, second]);
}

#[sqlx::test]
async fn test_comments_removed_with_article(pool: PgPool) {
    let user = common::insert_test_user(&pool, "reader").await;
    let pool = Arc::new(pool);
    let articles = PgArticleRepository::new(pool.clone());
    let comments = PgCommentRepository::new(pool);

    let mut article = Article::new("Post", "Body", Vec::new());
    article.author_id = user;
    let article = articles.create(article).await.unwrap();
    comments
        .save(new_comment(article.id, user, "Soon gone"))
        .await
        .unwrap();

    articles.delete(article.id).await.unwrap();

    assert!(
        comments
            .find_by_article_id(article.id)
            .await
            .unwrap()
            .is_empty()
    );
}
