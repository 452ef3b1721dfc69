//! Feed composition and repository-level social graph properties

mod support;

use std::sync::Arc;

use api::error::ApiError;
use api::models::{NewReply, NewTweet, NewUser, TweetKind};
use support::{SequentialIds, insert_user, test_state, test_state_with_ids};

async fn seed_tweet(state: &api::AppState, user_id: &str, content: &str) -> String {
    state
        .tweet_repository
        .create(&NewTweet {
            content: content.to_string(),
            kind: TweetKind::Tweet,
            user_id: user_id.to_string(),
        })
        .await
        .expect("tweet")
        .id
}

#[tokio::test]
async fn compose_uses_exact_author_set() {
    let state = test_state().await;
    insert_user(&state, "u-alice", "Alice", "alice").await;
    insert_user(&state, "u-bob", "Bob", "bob").await;
    insert_user(&state, "u-carol", "Carol", "carol").await;

    seed_tweet(&state, "u-alice", "alpha").await;
    seed_tweet(&state, "u-bob", "beta").await;
    seed_tweet(&state, "u-bob", "beta two").await;
    seed_tweet(&state, "u-carol", "gamma").await;

    // Bob follows Alice, so Bob's tweets land in Alice's feed
    state
        .follow_repository
        .create("u-alice", "u-bob")
        .await
        .expect("edge");

    let feed = state.feed_service.compose("u-alice").await.expect("feed");
    assert_eq!(feed.len(), 3);
    assert!(feed.iter().all(|t| t.user_id == "u-alice" || t.user_id == "u-bob"));
    assert!(feed.iter().any(|t| t.content == "alpha"));
    assert!(feed.iter().any(|t| t.content == "beta two"));
    assert!(!feed.iter().any(|t| t.content == "gamma"));

    // Entries carry the author profile
    let beta = feed
        .iter()
        .find(|t| t.content == "beta")
        .expect("beta entry");
    assert_eq!(beta.user.id, "u-bob");
    assert_eq!(beta.user.name, "Bob");
    assert_eq!(beta.user.username, "bob");

    // The edge is one-way: Bob's own feed sees none of Alice's tweets
    let feed = state.feed_service.compose("u-bob").await.expect("feed");
    assert_eq!(feed.len(), 2);
    assert!(feed.iter().all(|t| t.user_id == "u-bob"));

    // Carol has no followers and follows no one
    let feed = state.feed_service.compose("u-carol").await.expect("feed");
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].content, "gamma");
}

#[tokio::test]
async fn compose_rejects_unknown_users() {
    let state = test_state().await;

    let result = state.feed_service.compose("ghost").await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn feed_query_collapses_duplicate_authors() {
    let state = test_state().await;
    insert_user(&state, "u-alice", "Alice", "alice").await;
    seed_tweet(&state, "u-alice", "alpha").await;

    let authors = vec!["u-alice".to_string(), "u-alice".to_string()];
    let feed = state.tweet_repository.get_feed(&authors).await.expect("feed");

    assert_eq!(feed.len(), 1);
}

#[tokio::test]
async fn feed_query_without_authors_is_empty() {
    let state = test_state().await;

    let feed = state.tweet_repository.get_feed(&[]).await.expect("feed");

    assert!(feed.is_empty());
}

#[tokio::test]
async fn injected_ids_flow_through_repositories_and_sessions() {
    let state = test_state_with_ids(Arc::new(SequentialIds::new("seq"))).await;

    let user = state
        .user_repository
        .create(&NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            password: "secret123".to_string(),
            avatar_url: None,
        })
        .await
        .expect("user");
    assert_eq!(user.id, "seq-1");

    let tweet_id = seed_tweet(&state, &user.id, "alpha").await;
    assert_eq!(tweet_id, "seq-2");

    // Session tokens come from the same generator
    let token = state
        .session_manager
        .issue_token(&user.id)
        .await
        .expect("token");
    assert_eq!(token, "seq-3");

    let stored = state
        .user_repository
        .find_by_id(&user.id)
        .await
        .expect("lookup")
        .expect("user");
    assert_eq!(stored.token.as_deref(), Some("seq-3"));
}

#[tokio::test]
async fn scoped_tweet_queries_enforce_authorship() {
    let state = test_state().await;
    insert_user(&state, "u-alice", "Alice", "alice").await;
    insert_user(&state, "u-bob", "Bob", "bob").await;
    let tweet_id = seed_tweet(&state, "u-alice", "alpha").await;

    let repo = &state.tweet_repository;

    assert!(repo.find_scoped(&tweet_id, "u-bob").await.expect("lookup").is_none());
    assert!(
        repo.update_scoped(&tweet_id, "u-bob", "hijacked", TweetKind::Tweet)
            .await
            .expect("update")
            .is_none()
    );
    assert!(repo.delete_scoped(&tweet_id, "u-bob").await.expect("delete").is_none());

    // Still there, still the original content
    let stored = repo
        .find_scoped(&tweet_id, "u-alice")
        .await
        .expect("lookup")
        .expect("tweet");
    assert_eq!(stored.content, "alpha");

    let updated = repo
        .update_scoped(&tweet_id, "u-alice", "edited", TweetKind::Tweet)
        .await
        .expect("update")
        .expect("tweet");
    assert_eq!(updated.content, "edited");
}

#[tokio::test]
async fn deletes_leave_dependent_rows_behind() {
    let state = test_state().await;
    insert_user(&state, "u-alice", "Alice", "alice").await;
    insert_user(&state, "u-bob", "Bob", "bob").await;
    let tweet_id = seed_tweet(&state, "u-alice", "alpha").await;

    state
        .reply_repository
        .create(&NewReply {
            content: "a reply".to_string(),
            kind: TweetKind::Reply,
            user_id: "u-bob".to_string(),
            tweet_id: tweet_id.clone(),
        })
        .await
        .expect("reply");
    state
        .like_repository
        .create("u-bob", &tweet_id)
        .await
        .expect("like");

    state
        .tweet_repository
        .delete_scoped(&tweet_id, "u-alice")
        .await
        .expect("delete")
        .expect("tweet existed");

    // No cascades: replies and likes now reference a missing tweet
    assert_eq!(
        state
            .reply_repository
            .get_by_tweet(&tweet_id)
            .await
            .expect("replies")
            .len(),
        1
    );
    assert_eq!(
        state
            .like_repository
            .get_by_tweet(&tweet_id)
            .await
            .expect("likes")
            .len(),
        1
    );
}

#[tokio::test]
async fn orphaned_tweets_drop_out_of_feeds() {
    let state = test_state().await;
    insert_user(&state, "u-alice", "Alice", "alice").await;
    seed_tweet(&state, "u-alice", "alpha").await;

    let feed = state
        .tweet_repository
        .get_feed(&["u-alice".to_string()])
        .await
        .expect("feed");
    assert_eq!(feed.len(), 1);

    state
        .user_repository
        .delete("u-alice")
        .await
        .expect("delete")
        .expect("user existed");

    // The tweet row survives, but without an author profile it cannot be rendered
    let feed = state
        .tweet_repository
        .get_feed(&["u-alice".to_string()])
        .await
        .expect("feed");
    assert!(feed.is_empty());
    assert_eq!(
        state
            .tweet_repository
            .get_by_author("u-alice")
            .await
            .expect("tweets")
            .len(),
        1
    );
}

#[tokio::test]
async fn unique_pairs_are_enforced_by_storage() {
    let state = test_state().await;
    insert_user(&state, "u-alice", "Alice", "alice").await;
    insert_user(&state, "u-bob", "Bob", "bob").await;
    let tweet_id = seed_tweet(&state, "u-alice", "alpha").await;

    state
        .follow_repository
        .create("u-alice", "u-bob")
        .await
        .expect("edge");
    let err = state
        .follow_repository
        .create("u-alice", "u-bob")
        .await
        .expect_err("duplicate edge");
    assert!(matches!(err, ApiError::Database(_)));

    state
        .like_repository
        .create("u-bob", &tweet_id)
        .await
        .expect("like");
    let err = state
        .like_repository
        .create("u-bob", &tweet_id)
        .await
        .expect_err("duplicate like");
    assert!(matches!(err, ApiError::Database(_)));
}
