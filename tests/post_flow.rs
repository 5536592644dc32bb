// tests/post_flow.rs
mod support;

use chrono::Duration;
use pressroom::application::commands::posts::{CreatePostCommand, UpdatePostCommand};
use pressroom::application::dto::PageRequest;
use pressroom::application::error::ApplicationError;
use pressroom::application::queries::posts::PublishedPostFilter;
use pressroom::domain::post::PostStatus;
use support::{admin, author, body, harness};

fn patch(id: i64) -> UpdatePostCommand {
    UpdatePostCommand {
        id,
        title: None,
        content: None,
        excerpt: None,
        cover_image: None,
        category_id: None,
        tag_ids: None,
        status: None,
    }
}

#[tokio::test]
async fn draft_starts_without_publication_stamp() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");

    let post = h
        .seed_post(&writer, "Hello, World!", category.id, PostStatus::Draft)
        .await;

    assert_eq!(post.status, PostStatus::Draft);
    assert_eq!(post.published_at, None);
    assert_eq!(post.slug, "hello-world");
    assert!(h.cache.paths().contains(&"/dashboard/posts".to_string()));
}

#[tokio::test]
async fn publication_stamp_is_set_once_and_survives_unpublish() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");
    let post = h
        .seed_post(&writer, "Release Notes", category.id, PostStatus::Draft)
        .await;

    h.clock.advance(Duration::minutes(10));
    let published = h
        .services
        .post_commands
        .update_post(
            Some(&writer),
            UpdatePostCommand {
                status: Some(PostStatus::Published),
                ..patch(post.id)
            },
        )
        .await
        .unwrap();
    let first_stamp = published.published_at.expect("stamp on first publish");

    h.clock.advance(Duration::minutes(10));
    let unpublished = h
        .services
        .post_commands
        .update_post(
            Some(&writer),
            UpdatePostCommand {
                status: Some(PostStatus::Draft),
                ..patch(post.id)
            },
        )
        .await
        .unwrap();
    assert_eq!(unpublished.status, PostStatus::Draft);
    assert_eq!(unpublished.published_at, Some(first_stamp));

    h.clock.advance(Duration::minutes(10));
    let republished = h
        .services
        .post_commands
        .update_post(
            Some(&writer),
            UpdatePostCommand {
                status: Some(PostStatus::Published),
                ..patch(post.id)
            },
        )
        .await
        .unwrap();
    assert_eq!(republished.published_at, Some(first_stamp));
}

#[tokio::test]
async fn colliding_titles_get_numbered_slugs() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");

    let first = h
        .seed_post(&writer, "Hello World", category.id, PostStatus::Draft)
        .await;
    let second = h
        .seed_post(&writer, "Hello World", category.id, PostStatus::Draft)
        .await;
    let third = h
        .seed_post(&writer, "Hello World", category.id, PostStatus::Draft)
        .await;

    assert_eq!(first.slug, "hello-world");
    assert_eq!(second.slug, "hello-world-1");
    assert_eq!(third.slug, "hello-world-2");
}

#[tokio::test]
async fn slug_moves_with_the_title_but_only_when_it_changes() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");
    let post = h
        .seed_post(&writer, "Original Title", category.id, PostStatus::Draft)
        .await;

    // Same title again: the probe must not see its own row and append -1.
    let unchanged = h
        .services
        .post_commands
        .update_post(
            Some(&writer),
            UpdatePostCommand {
                title: Some("Original Title".to_string()),
                ..patch(post.id)
            },
        )
        .await
        .unwrap();
    assert_eq!(unchanged.slug, "original-title");

    let retitled = h
        .services
        .post_commands
        .update_post(
            Some(&writer),
            UpdatePostCommand {
                title: Some("Brand New Title".to_string()),
                ..patch(post.id)
            },
        )
        .await
        .unwrap();
    assert_eq!(retitled.title, "Brand New Title");
    assert_eq!(retitled.slug, "brand-new-title");
}

#[tokio::test]
async fn only_the_owner_or_an_admin_may_modify_a_post() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let owner = author("owner-1");
    let intruder = author("intruder-1");
    let post = h
        .seed_post(&owner, "Protected Post", category.id, PostStatus::Draft)
        .await;

    let err = h
        .services
        .post_commands
        .update_post(
            Some(&intruder),
            UpdatePostCommand {
                title: Some("Hijacked".to_string()),
                ..patch(post.id)
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = h
        .services
        .post_commands
        .delete_post(Some(&intruder), post.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let moderated = h
        .services
        .post_commands
        .update_post(
            Some(&admin("admin-1")),
            UpdatePostCommand {
                title: Some("Moderated Title".to_string()),
                ..patch(post.id)
            },
        )
        .await
        .unwrap();
    assert_eq!(moderated.title, "Moderated Title");

    h.services
        .post_commands
        .delete_post(Some(&admin("admin-1")), post.id)
        .await
        .unwrap();
    let err = h
        .services
        .post_queries
        .get_post_by_id(Some(&owner), post.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn anonymous_callers_cannot_create_posts() {
    let h = harness();
    let category = h.seed_category("Engineering").await;

    let err = h
        .services
        .post_commands
        .create_post(
            None,
            CreatePostCommand {
                title: "Nope".to_string(),
                content: body("nope"),
                excerpt: None,
                cover_image: None,
                category_id: category.id,
                tag_ids: Vec::new(),
                status: PostStatus::Draft,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthenticated(_)));
}

#[tokio::test]
async fn replacing_the_tag_set_includes_clearing_it() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");

    let tags = h
        .services
        .taxonomy_commands
        .create_or_get_tags(
            Some(&writer),
            vec!["rust".to_string(), "async".to_string()],
        )
        .await
        .unwrap();
    let tag_ids: Vec<i64> = tags.iter().map(|t| t.id).collect();

    let post = h
        .services
        .post_commands
        .create_post(
            Some(&writer),
            CreatePostCommand {
                title: "Tagged Post".to_string(),
                content: body("tagged"),
                excerpt: None,
                cover_image: None,
                category_id: category.id,
                tag_ids: tag_ids.clone(),
                status: PostStatus::Draft,
            },
        )
        .await
        .unwrap();
    assert_eq!(post.tags.len(), 2);

    let narrowed = h
        .services
        .post_commands
        .update_post(
            Some(&writer),
            UpdatePostCommand {
                tag_ids: Some(vec![tag_ids[0]]),
                ..patch(post.id)
            },
        )
        .await
        .unwrap();
    assert_eq!(narrowed.tags.len(), 1);

    let cleared = h
        .services
        .post_commands
        .update_post(
            Some(&writer),
            UpdatePostCommand {
                tag_ids: Some(Vec::new()),
                ..patch(post.id)
            },
        )
        .await
        .unwrap();
    assert!(cleared.tags.is_empty());
}

#[tokio::test]
async fn unknown_tag_ids_are_rejected() {
    let h = harness();
    let category = h.seed_category("Engineering").await;

    let err = h
        .services
        .post_commands
        .create_post(
            Some(&author("writer-1")),
            CreatePostCommand {
                title: "Bad Tags".to_string(),
                content: body("bad"),
                excerpt: None,
                cover_image: None,
                category_id: category.id,
                tag_ids: vec![9999],
                status: PostStatus::Draft,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn public_feed_shows_published_posts_newest_first() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");

    h.seed_post(&writer, "Old News", category.id, PostStatus::Published)
        .await;
    h.clock.advance(Duration::hours(1));
    h.seed_post(&writer, "Fresh News", category.id, PostStatus::Published)
        .await;
    h.seed_post(&writer, "Hidden Draft", category.id, PostStatus::Draft)
        .await;

    let page = h
        .services
        .post_queries
        .get_published_posts(PublishedPostFilter::default(), PageRequest::new(1, 10))
        .await
        .unwrap();

    assert_eq!(page.pagination.total, 2);
    assert_eq!(page.items[0].title, "Fresh News");
    assert_eq!(page.items[1].title, "Old News");
    assert!(page.items.iter().all(|p| p.title != "Hidden Draft"));
}

#[tokio::test]
async fn feed_pagination_reports_totals() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");

    for i in 1..=25 {
        h.clock.advance(Duration::minutes(1));
        h.seed_post(
            &writer,
            &format!("Post Number {i}"),
            category.id,
            PostStatus::Published,
        )
        .await;
    }

    let first = h
        .services
        .post_queries
        .get_published_posts(PublishedPostFilter::default(), PageRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.pagination.total, 25);
    assert_eq!(first.pagination.total_pages, 3);
    assert_eq!(first.items[0].title, "Post Number 25");

    let last = h
        .services
        .post_queries
        .get_published_posts(PublishedPostFilter::default(), PageRequest::new(3, 10))
        .await
        .unwrap();
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.items[4].title, "Post Number 1");
}

#[tokio::test]
async fn feed_narrows_by_category_and_tag() {
    let h = harness();
    let engineering = h.seed_category("Engineering").await;
    let design = h.seed_category("Design").await;
    let writer = author("writer-1");

    let rust_tag = h
        .services
        .taxonomy_commands
        .create_or_get_tag(Some(&writer), "rust")
        .await
        .unwrap();

    h.services
        .post_commands
        .create_post(
            Some(&writer),
            CreatePostCommand {
                title: "Systems Post".to_string(),
                content: body("systems"),
                excerpt: None,
                cover_image: None,
                category_id: engineering.id,
                tag_ids: vec![rust_tag.id],
                status: PostStatus::Published,
            },
        )
        .await
        .unwrap();
    h.seed_post(&writer, "Design Post", design.id, PostStatus::Published)
        .await;

    let by_category = h
        .services
        .post_queries
        .get_published_posts(
            PublishedPostFilter {
                category_slug: Some("design".to_string()),
                tag_slug: None,
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(by_category.pagination.total, 1);
    assert_eq!(by_category.items[0].title, "Design Post");

    let by_tag = h
        .services
        .post_queries
        .get_published_posts(
            PublishedPostFilter {
                category_slug: None,
                tag_slug: Some("rust".to_string()),
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(by_tag.pagination.total, 1);
    assert_eq!(by_tag.items[0].title, "Systems Post");
}

#[tokio::test]
async fn slug_lookup_serves_published_posts_only() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");

    h.seed_post(&writer, "Public Post", category.id, PostStatus::Published)
        .await;
    h.seed_post(&writer, "Secret Draft", category.id, PostStatus::Draft)
        .await;

    let detail = h
        .services
        .post_queries
        .get_post_by_slug("public-post")
        .await
        .unwrap();
    assert_eq!(detail.post.title, "Public Post");
    assert!(detail.comments.is_empty());

    let err = h
        .services
        .post_queries
        .get_post_by_slug("secret-draft")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = h
        .services
        .post_queries
        .get_post_by_slug("no such slug!")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn search_ranks_title_matches_ahead_of_excerpt_matches() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");

    h.services
        .post_commands
        .create_post(
            Some(&writer),
            CreatePostCommand {
                title: "Rust in Production".to_string(),
                content: body("production"),
                excerpt: Some("war stories".to_string()),
                cover_image: None,
                category_id: category.id,
                tag_ids: Vec::new(),
                status: PostStatus::Published,
            },
        )
        .await
        .unwrap();
    // Published later, so repository order alone would rank it first.
    h.clock.advance(Duration::hours(1));
    h.services
        .post_commands
        .create_post(
            Some(&writer),
            CreatePostCommand {
                title: "Tuesday Roundup".to_string(),
                content: body("roundup"),
                excerpt: Some("mostly about rust tooling".to_string()),
                cover_image: None,
                category_id: category.id,
                tag_ids: Vec::new(),
                status: PostStatus::Published,
            },
        )
        .await
        .unwrap();

    let page = h
        .services
        .post_queries
        .search_posts("rust", PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 2);
    assert_eq!(page.items[0].title, "Rust in Production");
    assert_eq!(page.items[1].title, "Tuesday Roundup");
}

#[tokio::test]
async fn search_sanitizes_input_and_short_circuits_on_empty_queries() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");
    h.seed_post(&writer, "Rust Post", category.id, PostStatus::Published)
        .await;

    let page = h
        .services
        .post_queries
        .search_posts("<script>rust</script>", PageRequest::default())
        .await
        .unwrap();
    // "scriptrustscript" matches nothing; metacharacters never reach the
    // repository as pattern syntax.
    assert_eq!(page.pagination.total, 0);

    let page = h
        .services
        .post_queries
        .search_posts("%'; --", PageRequest::default())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn author_dashboard_is_scoped_to_the_caller() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let alice = author("alice");
    let bob = author("bob");

    h.seed_post(&alice, "Alice Draft", category.id, PostStatus::Draft)
        .await;
    h.seed_post(&alice, "Alice Published", category.id, PostStatus::Published)
        .await;
    h.seed_post(&bob, "Bob Post", category.id, PostStatus::Published)
        .await;

    let mine = h
        .services
        .post_queries
        .get_author_posts(Some(&alice), None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(mine.pagination.total, 2);
    assert!(mine.items.iter().all(|p| p.title.starts_with("Alice")));

    let drafts = h
        .services
        .post_queries
        .get_author_posts(Some(&alice), Some(PostStatus::Draft), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(drafts.pagination.total, 1);
    assert_eq!(drafts.items[0].title, "Alice Draft");
}

#[tokio::test]
async fn admin_listing_sees_everything_and_is_gated() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    h.seed_post(&author("alice"), "Alice Draft", category.id, PostStatus::Draft)
        .await;
    h.seed_post(&author("bob"), "Bob Post", category.id, PostStatus::Published)
        .await;

    let err = h
        .services
        .post_queries
        .get_all_posts(Some(&author("alice")), None, PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let all = h
        .services
        .post_queries
        .get_all_posts(Some(&admin("admin-1")), None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(all.pagination.total, 2);
}

#[tokio::test]
async fn by_id_lookup_respects_ownership() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let owner = author("owner-1");
    let post = h
        .seed_post(&owner, "Workbench Draft", category.id, PostStatus::Draft)
        .await;

    let mine = h
        .services
        .post_queries
        .get_post_by_id(Some(&owner), post.id)
        .await
        .unwrap();
    assert_eq!(mine.id, post.id);

    let err = h
        .services
        .post_queries
        .get_post_by_id(Some(&author("other")), post.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let theirs = h
        .services
        .post_queries
        .get_post_by_id(Some(&admin("admin-1")), post.id)
        .await
        .unwrap();
    assert_eq!(theirs.id, post.id);
}

#[tokio::test]
async fn search_treats_underscores_as_literal_text() {
    let h = harness();
    let category = h.seed_category("Engineering").await;
    let writer = author("writer-1");
    h.seed_post(&writer, "Handling abc tokens", category.id, PostStatus::Published)
        .await;
    h.seed_post(&writer, "Notes on a_c parsing", category.id, PostStatus::Published)
        .await;

    // "_" never acts as a single-character wildcard.
    let hits = h
        .services
        .post_queries
        .search_posts("a_c", PageRequest::default())
        .await
        .unwrap();
    assert_eq!(hits.pagination.total, 1);
    assert_eq!(hits.items[0].title, "Notes on a_c parsing");

    let hits = h
        .services
        .post_queries
        .search_posts("abc", PageRequest::default())
        .await
        .unwrap();
    assert_eq!(hits.pagination.total, 1);
    assert_eq!(hits.items[0].title, "Handling abc tokens");
}
