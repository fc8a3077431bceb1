//! Video catalogue integration tests
//!
//! Publishing is limited to creators and admins; edits and deletes to the
//! owner or an admin. Browsing and watching are public; every watch leaves
//! an analytics row only the owner or an admin can read.

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
};
use clipstream_videos::VideoRepository;
use serde_json::{json, Value};

use crate::common::{assert_auth_error, TestApp, UserFixture};

async fn publish(app: &TestApp, token: &str, title: &str, category: Option<&str>) -> Value {
    publish_with(
        app,
        token,
        json!({
            "title": title,
            "video_url": "https://cdn.clipstream.dev/v/clip.mp4",
            "category": category
        }),
    )
    .await
}

async fn publish_with(app: &TestApp, token: &str, body: Value) -> Value {
    let (status, body) = app
        .request(Method::POST, "/api/videos", Some(token), Some(body))
        .await;
    assert_eq!(status, StatusCode::CREATED, "publish failed: {}", body);
    body["video"].clone()
}

fn titles(body: &Value) -> Vec<&str> {
    body["videos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect()
}

mod test_publish {
    use super::*;

    #[tokio::test]
    async fn test_creator_can_publish() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;

        let video = publish(&app, &creator.token, "First cut", Some("music")).await;

        assert_eq!(video["title"], "First cut");
        assert_eq!(video["user_id"], creator.user.id.as_str());
        assert_eq!(video["views"], 0);
        assert_eq!(video["user"]["id"], creator.user.id.as_str());
        assert_eq!(video["user"]["name"], "creator");
    }

    #[tokio::test]
    async fn test_publish_accepts_upload_paths() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;

        let video = publish_with(
            &app,
            &creator.token,
            json!({
                "title": "Uploaded",
                "video_url": "/uploads/u1/1700000000_clip.mp4",
                "thumbnail_url": "/uploads/u1/1700000000_thumb.jpg"
            }),
        )
        .await;

        assert_eq!(video["video_url"], "/uploads/u1/1700000000_clip.mp4");
        assert_eq!(video["thumbnail_url"], "/uploads/u1/1700000000_thumb.jpg");
    }

    #[tokio::test]
    async fn test_publish_requires_video_location() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;

        let (status, body) = app
            .request(
                Method::POST,
                "/api/videos",
                Some(&creator.token),
                Some(json!({ "title": "Nothing to play", "video_url": "" })),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_admin_can_publish() {
        let app = TestApp::new();
        let admin = UserFixture::admin(&app).await;

        let video = publish(&app, &admin.token, "Announcement", None).await;
        assert_eq!(video["user_id"], admin.user.id.as_str());
    }

    #[tokio::test]
    async fn test_viewer_cannot_publish() {
        let app = TestApp::new();
        let viewer = UserFixture::viewer(&app).await;

        let (status, body) = app
            .request(
                Method::POST,
                "/api/videos",
                Some(&viewer.token),
                Some(json!({
                    "title": "Sneaky",
                    "video_url": "https://cdn.clipstream.dev/v/sneaky.mp4"
                })),
            )
            .await;

        assert_auth_error(status, &body, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_anonymous_cannot_publish() {
        let app = TestApp::new();

        let (status, body) = app
            .request(
                Method::POST,
                "/api/videos",
                None,
                Some(json!({
                    "title": "Anon",
                    "video_url": "https://cdn.clipstream.dev/v/anon.mp4"
                })),
            )
            .await;

        assert_auth_error(status, &body, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_publish_requires_title() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;

        let (status, _) = app
            .request(
                Method::POST,
                "/api/videos",
                Some(&creator.token),
                Some(json!({
                    "title": "   ",
                    "video_url": "https://cdn.clipstream.dev/v/blank.mp4"
                })),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

mod test_browse {
    use super::*;

    #[tokio::test]
    async fn test_list_is_public_and_newest_first() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        publish(&app, &creator.token, "Older", None).await;
        publish(&app, &creator.token, "Newer", None).await;

        let (status, body) = app.request(Method::GET, "/api/videos", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["Newer", "Older"]);
        assert_eq!(body["videos"][0]["user"]["name"], "creator");
    }

    #[tokio::test]
    async fn test_list_filters_by_search_and_category() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        publish(&app, &creator.token, "Guitar Lesson", Some("music")).await;
        publish(&app, &creator.token, "Cooking Pasta", Some("food")).await;
        publish(&app, &creator.token, "Bass guitar tour", Some("music")).await;

        let (_, searched) = app
            .request(Method::GET, "/api/videos?search=GUITAR", None, None)
            .await;
        assert_eq!(titles(&searched), vec!["Bass guitar tour", "Guitar Lesson"]);

        let (_, food) = app
            .request(Method::GET, "/api/videos?category=food", None, None)
            .await;
        let food = food["videos"].as_array().unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0]["title"], "Cooking Pasta");
    }

    #[tokio::test]
    async fn test_search_matches_description() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        publish_with(
            &app,
            &creator.token,
            json!({
                "title": "Episode 12",
                "description": "Slow cooked ragu from scratch",
                "video_url": "/uploads/c/ep12.mp4"
            }),
        )
        .await;
        publish(&app, &creator.token, "Episode 13", None).await;

        let (status, body) = app
            .request(Method::GET, "/api/videos?search=ragu", None, None)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["Episode 12"]);
    }

    #[tokio::test]
    async fn test_list_filters_by_uploader() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        let admin = UserFixture::admin(&app).await;
        publish(&app, &creator.token, "From creator", None).await;
        publish(&app, &admin.token, "From admin", None).await;

        let (_, body) = app
            .request(
                Method::GET,
                &format!("/api/videos?userId={}", creator.user.id),
                None,
                None,
            )
            .await;

        assert_eq!(titles(&body), vec!["From creator"]);
    }

    #[tokio::test]
    async fn test_list_bad_limit_is_validation_error() {
        let app = TestApp::new();

        let (status, body) = app
            .request(Method::GET, "/api/videos?limit=abc", None, None)
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        for i in 0..5 {
            publish(&app, &creator.token, &format!("Clip {}", i), None).await;
        }

        let (_, body) = app
            .request(Method::GET, "/api/videos?offset=1&limit=2", None, None)
            .await;
        assert_eq!(titles(&body), vec!["Clip 3", "Clip 2"]);
    }

    #[tokio::test]
    async fn test_watch_counts_views() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        let video = publish(&app, &creator.token, "Watched", None).await;
        let uri = format!("/api/videos/{}", video["id"].as_str().unwrap());

        app.request(Method::GET, &uri, None, None).await;
        let (status, body) = app.request(Method::GET, &uri, None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["video"]["views"], 2);
        assert_eq!(body["video"]["user"]["id"], creator.user.id.as_str());
    }

    #[tokio::test]
    async fn test_watch_with_invalid_token_is_unauthorized() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        let video = publish(&app, &creator.token, "Watched", None).await;
        let uri = format!("/api/videos/{}", video["id"].as_str().unwrap());

        let (status, body) = app
            .request(Method::GET, &uri, Some("not.a.token"), None)
            .await;

        assert_auth_error(status, &body, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_watch_unknown_video_is_not_found() {
        let app = TestApp::new();

        let (status, body) = app
            .request(Method::GET, "/api/videos/does-not-exist", None, None)
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

mod test_ownership {
    use super::*;

    #[tokio::test]
    async fn test_owner_can_update() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        let video = publish(&app, &creator.token, "Draft title", None).await;
        let uri = format!("/api/videos/{}", video["id"].as_str().unwrap());

        let (status, body) = app
            .request(
                Method::PATCH,
                &uri,
                Some(&creator.token),
                Some(json!({ "title": "Final title" })),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "body: {}", body);
        assert_eq!(body["video"]["title"], "Final title");
    }

    #[tokio::test]
    async fn test_other_creator_cannot_update() {
        let app = TestApp::new();
        let owner = UserFixture::creator(&app).await;
        let rival = UserFixture::create(
            &app,
            "rival@test.clipstream.dev",
            Some("rival"),
            clipstream_auth::Role::Creator,
        )
        .await;
        let video = publish(&app, &owner.token, "Mine", None).await;
        let uri = format!("/api/videos/{}", video["id"].as_str().unwrap());

        let (status, body) = app
            .request(
                Method::PATCH,
                &uri,
                Some(&rival.token),
                Some(json!({ "title": "Theirs now" })),
            )
            .await;

        assert_auth_error(status, &body, StatusCode::FORBIDDEN);

        let (_, unchanged) = app.request(Method::GET, &uri, None, None).await;
        assert_eq!(unchanged["video"]["title"], "Mine");
    }

    #[tokio::test]
    async fn test_viewer_cannot_delete() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        let viewer = UserFixture::viewer(&app).await;
        let video = publish(&app, &creator.token, "Keep me", None).await;
        let uri = format!("/api/videos/{}", video["id"].as_str().unwrap());

        let (status, body) = app
            .request(Method::DELETE, &uri, Some(&viewer.token), None)
            .await;

        assert_auth_error(status, &body, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_can_delete_any_video() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        let admin = UserFixture::admin(&app).await;
        let video = publish(&app, &creator.token, "Off-topic", None).await;
        let uri = format!("/api/videos/{}", video["id"].as_str().unwrap());

        let (status, body) = app
            .request(Method::DELETE, &uri, Some(&admin.token), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (status, _) = app.request(Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_video_is_not_found() {
        let app = TestApp::new();
        let admin = UserFixture::admin(&app).await;

        let (status, _) = app
            .request(
                Method::DELETE,
                "/api/videos/does-not-exist",
                Some(&admin.token),
                None,
            )
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod test_analytics {
    use super::*;

    async fn watch(app: &TestApp, uri: &str, token: Option<&str>, forwarded_for: &str) {
        let mut builder = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header("x-forwarded-for", forwarded_for);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        let (status, _) = app.send(builder.body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_watch_records_viewer_and_ip() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        let viewer = UserFixture::viewer(&app).await;
        let video = publish(&app, &creator.token, "Tracked", None).await;
        let id = video["id"].as_str().unwrap();
        let uri = format!("/api/videos/{}", id);

        watch(&app, &uri, None, "203.0.113.7, 10.0.0.1").await;
        watch(&app, &uri, Some(&viewer.token), "198.51.100.4").await;

        let (status, body) = app
            .request(
                Method::GET,
                &format!("{}/analytics", uri),
                Some(&creator.token),
                None,
            )
            .await;

        assert_eq!(status, StatusCode::OK, "body: {}", body);
        assert_eq!(body["video_id"], id);
        assert_eq!(body["views"], 2);

        // Newest first
        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["user_id"], viewer.user.id.as_str());
        assert_eq!(records[0]["viewer_ip"], "198.51.100.4");
        assert!(records[1]["user_id"].is_null());
        assert_eq!(records[1]["viewer_ip"], "203.0.113.7");

        assert_eq!(app.videos.views_for(id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_watch_without_forwarding_headers_logs_unknown_ip() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        let video = publish(&app, &creator.token, "Direct", None).await;
        let id = video["id"].as_str().unwrap();

        app.request(Method::GET, &format!("/api/videos/{}", id), None, None)
            .await;

        let records = app.videos.views_for(id).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].viewer_ip, "unknown");
        assert!(records[0].user_id.is_none());
    }

    #[tokio::test]
    async fn test_analytics_limited_to_owner_and_admin() {
        let app = TestApp::new();
        let creator = UserFixture::creator(&app).await;
        let viewer = UserFixture::viewer(&app).await;
        let admin = UserFixture::admin(&app).await;
        let video = publish(&app, &creator.token, "Private numbers", None).await;
        let uri = format!("/api/videos/{}/analytics", video["id"].as_str().unwrap());

        let (status, body) = app
            .request(Method::GET, &uri, Some(&viewer.token), None)
            .await;
        assert_auth_error(status, &body, StatusCode::FORBIDDEN);

        let (status, body) = app.request(Method::GET, &uri, None, None).await;
        assert_auth_error(status, &body, StatusCode::UNAUTHORIZED);

        let (status, _) = app
            .request(Method::GET, &uri, Some(&admin.token), None)
            .await;
        assert_eq!(status, StatusCode::OK);
    }
}
