use crate::{
    AuthState, RedditApiClient, RedditClient, RedditCommentData, RedditListing,
    RedditListingChild, RedditPostData, RedditToken, RedditUserData, TokenResponse,
};
use profiler_core::{
    ConfigError, ContentDetails, ContentItem, ContentKind, CoreError, RedditAccount,
    RedditCredentials,
};
use std::time::{Duration, SystemTime};

fn test_credentials() -> RedditCredentials {
    RedditCredentials {
        client_id: "test_client_id".to_string(),
        client_secret: "test_client_secret".to_string(),
        user_agent: "RedditUserAnalyzer/1.0 by test_user".to_string(),
    }
}

const POSTS_PAGE: &str = r#"{
    "kind": "Listing",
    "data": {
        "after": "t3_abc124",
        "before": null,
        "dist": 2,
        "children": [
            {
                "kind": "t3",
                "data": {
                    "id": "abc123",
                    "title": "My first build",
                    "selftext": "Finally finished the keyboard",
                    "subreddit": "MechanicalKeyboards",
                    "url": "https://www.reddit.com/r/MechanicalKeyboards/comments/abc123/",
                    "created_utc": 1700000000.0,
                    "score": 42,
                    "num_comments": 7,
                    "over_18": false
                }
            },
            {
                "kind": "t3",
                "data": {
                    "id": "abc124",
                    "title": "Link post",
                    "subreddit": "rust",
                    "url": "https://blog.rust-lang.org/",
                    "created_utc": 1699990000.5,
                    "score": -3,
                    "num_comments": 0
                }
            }
        ]
    }
}"#;

const COMMENTS_PAGE: &str = r#"{
    "kind": "Listing",
    "data": {
        "after": null,
        "before": null,
        "children": [
            {
                "kind": "t1",
                "data": {
                    "id": "c1",
                    "body": "Great explanation, thanks!",
                    "subreddit": "rust",
                    "parent_id": "t3_abc124",
                    "created_utc": 1700000500.0,
                    "score": 12,
                    "link_title": "ignored"
                }
            }
        ]
    }
}"#;

#[test]
fn test_parse_posts_listing() {
    let listing: RedditListing<RedditPostData> = serde_json::from_str(POSTS_PAGE).unwrap();
    assert_eq!(listing.kind, "Listing");
    assert_eq!(listing.data.after.as_deref(), Some("t3_abc124"));
    assert_eq!(listing.data.children.len(), 2);

    let link_post = &listing.data.children[1].data;
    assert_eq!(link_post.selftext, "");
    assert_eq!(link_post.score, -3);
}

#[test]
fn test_post_conversion() {
    let listing: RedditListing<RedditPostData> = serde_json::from_str(POSTS_PAGE).unwrap();
    let items: Vec<ContentItem> = listing
        .data
        .children
        .into_iter()
        .map(|child| child.data.into())
        .collect();

    let first = &items[0];
    assert_eq!(first.kind(), ContentKind::Post);
    assert_eq!(first.title(), Some("My first build"));
    assert_eq!(first.body, "Finally finished the keyboard");
    assert_eq!(first.subreddit, "MechanicalKeyboards");
    assert_eq!(first.created_utc, 1_700_000_000);
    match &first.details {
        ContentDetails::Post {
            num_comments, url, ..
        } => {
            assert_eq!(*num_comments, 7);
            assert!(url.contains("abc123"));
        }
        other => panic!("expected post details, got {:?}", other),
    }

    // Fractional timestamps truncate
    assert_eq!(items[1].created_utc, 1_699_990_000);
}

#[test]
fn test_comment_conversion() {
    let listing: RedditListing<RedditCommentData> = serde_json::from_str(COMMENTS_PAGE).unwrap();
    assert!(listing.data.after.is_none());

    let item: ContentItem = listing.data.children[0].data.clone().into();
    assert_eq!(item.kind(), ContentKind::Comment);
    assert_eq!(item.body, "Great explanation, thanks!");
    assert_eq!(item.score, 12);
    assert_eq!(item.title(), None);
    assert_eq!(
        item.details,
        ContentDetails::Comment {
            parent_id: "t3_abc124".to_string()
        }
    );
}

#[test]
fn test_user_about_parsing() {
    let json = r#"{
        "kind": "t2",
        "data": {
            "name": "spez",
            "created_utc": 1118030400.0,
            "link_karma": 180000,
            "comment_karma": 750000,
            "verified": true,
            "is_gold": true,
            "icon_img": "https://example.invalid/icon.png"
        }
    }"#;

    let about: RedditListingChild<RedditUserData> = serde_json::from_str(json).unwrap();
    assert!(!about.data.is_suspended);

    let account: RedditAccount = about.data.into();
    assert_eq!(account.name, "spez");
    assert_eq!(account.created_utc, 1_118_030_400);
    assert_eq!(account.link_karma, 180_000);
    assert_eq!(account.comment_karma, 750_000);
    assert!(account.verified);
    assert!(account.is_gold);
}

#[test]
fn test_suspended_user_parsing() {
    let json = r#"{"kind": "t2", "data": {"name": "banned_user", "is_suspended": true}}"#;
    let about: RedditListingChild<RedditUserData> = serde_json::from_str(json).unwrap();
    assert!(about.data.is_suspended);
    assert_eq!(about.data.link_karma, 0);
    assert_eq!(about.data.created_utc, 0.0);
}

#[test]
fn test_token_from_response() {
    let response: TokenResponse = serde_json::from_str(
        r#"{"access_token": "abc", "token_type": "bearer", "expires_in": 86400, "scope": "*"}"#,
    )
    .unwrap();

    let issued = SystemTime::now();
    let token = RedditToken::from_response(response, issued);
    assert_eq!(token.access_token, "abc");
    assert_eq!(token.expires_at, issued + Duration::from_secs(86400));
    assert_eq!(token.scope, vec!["*"]);
    assert!(!token.is_expired_at(issued));
}

#[test]
fn test_token_expiry_margin() {
    let now = SystemTime::now();
    let token = RedditToken {
        access_token: "soon".to_string(),
        expires_at: now + Duration::from_secs(30),
        scope: Vec::new(),
    };
    // Inside the refresh margin counts as expired
    assert!(token.is_expired_at(now));
    assert!(matches!(
        AuthState::of(Some(&token)),
        AuthState::TokenExpired { .. }
    ));

    let fresh = RedditToken {
        expires_at: now + Duration::from_secs(3600),
        ..token
    };
    assert!(!fresh.is_expired_at(now));
    assert_eq!(
        AuthState::of(Some(&fresh)),
        AuthState::Authenticated {
            expires_at: fresh.expires_at
        }
    );
    assert_eq!(AuthState::of(None), AuthState::NotAuthenticated);
}

#[tokio::test]
async fn test_client_starts_unauthenticated() {
    let client = RedditClient::new(test_credentials()).unwrap();
    assert_eq!(client.auth_state().await, AuthState::NotAuthenticated);
    assert_eq!(
        client.api().user_agent(),
        "RedditUserAnalyzer/1.0 by test_user"
    );
}

#[test]
fn test_invalid_endpoint_rejected() {
    let result = RedditApiClient::with_endpoints(
        test_credentials(),
        "not a url",
        "https://www.reddit.com/api/v1/access_token",
    );
    match result {
        Err(CoreError::Config(ConfigError::InvalidValue { field, .. })) => {
            assert_eq!(field, "api_base");
        }
        other => panic!("expected config error, got {:?}", other.map(|_| ())),
    }
}
