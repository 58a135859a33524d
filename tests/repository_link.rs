mod common;

use sqlx::PgPool;
use std::sync::Arc;
use linknote::domain::entities::{LinkDraft, LinkFilter, SortOrder};
use linknote::domain::repositories::LinkRepository;
use linknote::error::AppError;
use linknote::infrastructure::persistence::PgLinkRepository;

fn draft(url: &str, title: &str) -> LinkDraft {
    LinkDraft {
        url: url.to_string(),
        title: title.to_string(),
        description: None,
        category: None,
    }
}

fn titles(links: &[linknote::domain::entities::Link]) -> Vec<&str> {
    links.iter().map(|l| l.title.as_str()).collect()
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "alice").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(
            user_id,
            LinkDraft {
                description: Some("Docs".to_string()),
                category: Some("rust".to_string()),
                ..draft("https://doc.rust-lang.org", "Rust docs")
            },
        )
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.user_id, user_id);
    assert_eq!(link.url, "https://doc.rust-lang.org");
    assert_eq!(link.title, "Rust docs");
    assert_eq!(link.description.as_deref(), Some("Docs"));
    assert_eq!(link.category.as_deref(), Some("rust"));
    assert_eq!(link.created_at, link.updated_at);
}

#[sqlx::test]
async fn test_create_link_for_missing_user_is_unauthorized(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.create(9999, draft("https://example.com", "Orphan")).await;

    assert!(matches!(result, Err(AppError::Unauthorized { .. })));
}

#[sqlx::test]
async fn test_find_by_id_scoped_to_owner(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    let id = common::create_test_link(&pool, alice, "https://a.com", "A", None, None).await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(id, alice).await.unwrap().is_some());
    assert!(repo.find_by_id(id, bob).await.unwrap().is_none());
    assert!(repo.find_by_id(id + 1000, alice).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_only_returns_own_links(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    common::create_test_link(&pool, alice, "https://a.com", "A", None, None).await;
    common::create_test_link(&pool, bob, "https://b.com", "B", None, None).await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let links = repo.list(alice, &LinkFilter::default()).await.unwrap();

    assert_eq!(titles(&links), vec!["A"]);
}

#[sqlx::test]
async fn test_list_search_matches_every_text_field(pool: PgPool) {
    let user = common::create_test_user(&pool, "alice").await;
    common::create_test_link(&pool, user, "https://one.com", "Tokio guide", None, None).await;
    common::create_test_link(&pool, user, "https://two.com", "Two", Some("all about TOKIO"), None).await;
    common::create_test_link(&pool, user, "https://tokio.rs", "Three", None, None).await;
    common::create_test_link(&pool, user, "https://four.com", "Four", None, Some("tokio")).await;
    common::create_test_link(&pool, user, "https://five.com", "Five", None, None).await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let filter = LinkFilter::new(Some("tOkIo".to_string()), None, SortOrder::Title);
    let links = repo.list(user, &filter).await.unwrap();

    assert_eq!(titles(&links), vec!["Four", "Three", "Tokio guide", "Two"]);
}

#[sqlx::test]
async fn test_list_search_treats_wildcards_literally(pool: PgPool) {
    let user = common::create_test_user(&pool, "alice").await;
    common::create_test_link(&pool, user, "https://a.com", "100% Rust", None, None).await;
    common::create_test_link(&pool, user, "https://b.com", "1000 Rust tips", None, None).await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    let filter = LinkFilter::new(Some("100%".to_string()), None, SortOrder::Newest);
    assert_eq!(titles(&repo.list(user, &filter).await.unwrap()), vec!["100% Rust"]);

    let filter = LinkFilter::new(Some("_".to_string()), None, SortOrder::Newest);
    assert!(repo.list(user, &filter).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_list_category_is_exact_match(pool: PgPool) {
    let user = common::create_test_user(&pool, "alice").await;
    common::create_test_link(&pool, user, "https://a.com", "A", None, Some("dev")).await;
    common::create_test_link(&pool, user, "https://b.com", "B", None, Some("devops")).await;
    common::create_test_link(&pool, user, "https://c.com", "C", None, Some("Dev")).await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let filter = LinkFilter::new(None, Some("dev".to_string()), SortOrder::Newest);
    let links = repo.list(user, &filter).await.unwrap();

    assert_eq!(titles(&links), vec!["A"]);
}

#[sqlx::test]
async fn test_list_sort_orders(pool: PgPool) {
    let user = common::create_test_user(&pool, "alice").await;
    common::create_aged_link(&pool, user, "banana", 300).await;
    common::create_aged_link(&pool, user, "apple", 200).await;
    common::create_aged_link(&pool, user, "cherry", 100).await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    let newest = repo
        .list(user, &LinkFilter::new(None, None, SortOrder::Newest))
        .await
        .unwrap();
    assert_eq!(titles(&newest), vec!["cherry", "apple", "banana"]);

    let oldest = repo
        .list(user, &LinkFilter::new(None, None, SortOrder::Oldest))
        .await
        .unwrap();
    assert_eq!(titles(&oldest), vec!["banana", "apple", "cherry"]);

    let by_title = repo
        .list(user, &LinkFilter::new(None, None, SortOrder::Title))
        .await
        .unwrap();
    assert_eq!(titles(&by_title), vec!["apple", "banana", "cherry"]);
}

#[sqlx::test]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let user = common::create_test_user(&pool, "alice").await;
    let id = common::create_test_link(
        &pool,
        user,
        "https://old.com",
        "Old",
        Some("old description"),
        Some("old"),
    )
    .await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let updated = repo
        .update(id, user, draft("https://new.com", "New"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.url, "https://new.com");
    assert_eq!(updated.title, "New");
    assert_eq!(updated.description, None);
    assert_eq!(updated.category, None);
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test]
async fn test_update_foreign_link_is_none(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    let id = common::create_test_link(&pool, alice, "https://a.com", "A", None, None).await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let result = repo
        .update(id, bob, draft("https://evil.com", "Hijacked"))
        .await
        .unwrap();
    assert!(result.is_none());

    let untouched = repo.find_by_id(id, alice).await.unwrap().unwrap();
    assert_eq!(untouched.title, "A");
}

#[sqlx::test]
async fn test_delete_link(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    let id = common::create_test_link(&pool, alice, "https://a.com", "A", None, None).await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(!repo.delete(id, bob).await.unwrap());
    assert!(repo.delete(id, alice).await.unwrap());
    assert!(!repo.delete(id, alice).await.unwrap());
}

#[sqlx::test]
async fn test_categories_distinct_sorted_without_nulls(pool: PgPool) {
    let alice = common::create_test_user(&pool, "alice").await;
    let bob = common::create_test_user(&pool, "bob").await;
    common::create_test_link(&pool, alice, "https://a.com", "A", None, Some("work")).await;
    common::create_test_link(&pool, alice, "https://b.com", "B", None, Some("fun")).await;
    common::create_test_link(&pool, alice, "https://c.com", "C", None, Some("work")).await;
    common::create_test_link(&pool, alice, "https://d.com", "D", None, None).await;
    common::create_test_link(&pool, bob, "https://e.com", "E", None, Some("secret")).await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let categories = repo.categories(alice).await.unwrap();

    assert_eq!(categories, vec!["fun", "work"]);
}
