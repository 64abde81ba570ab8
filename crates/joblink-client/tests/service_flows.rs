//! Service-level flows against a mock server.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use joblink_client::{
    ApiClient, ApiError, AuthService, ClientConfig, FileUpload, JobsService, MemorySessionStore,
    NetworkService, PostsService, ProfileService, SessionStore,
};
use joblink_models::{Job, LoginRequest, Role, Session};

fn store() -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore::new())
}

fn logged_in_store(role: Role) -> Arc<MemorySessionStore> {
    let store = store();
    store.set(Session::new("tok", 42, "me@example.com", "Me", role));
    store
}

fn client(uri: &str, store: Arc<MemorySessionStore>) -> ApiClient {
    ApiClient::new(ClientConfig::new(uri).unwrap(), store).unwrap()
}

fn job(id: i64, publisher_id: i64) -> Job {
    serde_json::from_value(json!({
        "id": id,
        "title": "Backend Engineer",
        "company_name": "Acme",
        "publisher_id": publisher_id,
        "is_active": true,
        "has_applied": false
    }))
    .unwrap()
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn test_login_persists_session_and_authorizes_next_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-token",
            "user_id": 7,
            "job_role": "Employer",
            "first_name": "Ada",
            "last_name": "Lovelace"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/my-posted-jobs/"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let store = store();
    let client = client(&server.uri(), Arc::clone(&store));
    let auth = AuthService::new(client.clone());
    let jobs = JobsService::new(client);

    let session = auth
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();

    assert_eq!(session.user_id, 7);
    assert_eq!(session.role, Role::Employer);
    assert_eq!(session.name, "Ada Lovelace");
    assert_eq!(session.email, "ada@example.com");
    assert_eq!(store.get().unwrap().token, "fresh-token");

    let posted = jobs.my_posted().await.unwrap();
    assert!(posted.is_empty());
}

#[tokio::test]
async fn test_login_with_invalid_email_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let auth = AuthService::new(client(&server.uri(), store()));
    let err = auth
        .login(&LoginRequest {
            email: "not-an-email".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_update_job_role_updates_stored_session() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/accounts/update-job-role/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Job role updated successfully",
            "job_role": "Employer"
        })))
        .mount(&server)
        .await;

    let store = logged_in_store(Role::Employee);
    let auth = AuthService::new(client(&server.uri(), Arc::clone(&store)));

    let confirmed = auth.update_job_role(Role::Employer).await.unwrap();
    assert_eq!(confirmed, Role::Employer);
    assert_eq!(store.get().unwrap().role, Role::Employer);
}

#[tokio::test]
async fn test_csrf_token_is_attached_to_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/csrf/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "csrf_token": "abc" })))
        .mount(&server)
        .await;

    let store = logged_in_store(Role::Employee);
    let auth = AuthService::new(client(&server.uri(), Arc::clone(&store)));

    let token = auth.csrf_token().await.unwrap();
    assert_eq!(token.as_deref(), Some("abc"));
    assert_eq!(store.get().unwrap().csrf_token.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_logout_clears_store() {
    let server = MockServer::start().await;
    let store = logged_in_store(Role::Employee);
    let auth = AuthService::new(client(&server.uri(), Arc::clone(&store)));

    auth.logout();
    assert!(store.get().is_none());
}

// =============================================================================
// Jobs
// =============================================================================

#[tokio::test]
async fn test_job_list_decodes_results_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 1, "title": "A", "company_name": "X" }]
        })))
        .mount(&server)
        .await;

    let jobs = JobsService::new(client(&server.uri(), store()));
    let listed = jobs.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, 1);
}

#[tokio::test]
async fn test_anonymous_job_list_succeeds_with_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "title": "B", "company_name": "Y" }
        ])))
        .mount(&server)
        .await;

    // No session at all: read paths stay open.
    let jobs = JobsService::new(client(&server.uri(), store()));
    let listed = jobs.list().await.unwrap();
    assert_eq!(listed[0].id, 2);
}

#[tokio::test]
async fn test_company_application_is_blocked_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let jobs = JobsService::new(client(&server.uri(), logged_in_store(Role::Company)));
    let err = jobs
        .apply(&job(10, 99), FileUpload::new("cv.pdf", vec![1, 2, 3]), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert!(err.to_string().contains("Companies cannot apply"));
}

#[tokio::test]
async fn test_already_applied_job_is_blocked_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut target = job(10, 99);
    target.has_applied = true;

    let jobs = JobsService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let err = jobs
        .apply(&target, FileUpload::new("cv.pdf", vec![1, 2, 3]), None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already applied"));
}

#[tokio::test]
async fn test_apply_rejects_wrong_file_type_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let jobs = JobsService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let err = jobs
        .apply(&job(10, 99), FileUpload::new("cv.exe", vec![1]), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_apply_happy_path_submits_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs/10/apply/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 55, "job": 10, "status": "submitted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = JobsService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let application = jobs
        .apply(
            &job(10, 99),
            FileUpload::new("cv.pdf", b"%PDF-1.4".to_vec()),
            Some("Dear team"),
        )
        .await
        .unwrap()
        .expect("request should be issued");

    assert_eq!(application.id, 55);
    assert_eq!(application.job, Some(10));
}

#[tokio::test]
async fn test_applicants_passes_status_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/10/applicants/"))
        .and(query_param("status", "shortlisted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 1, "status": "shortlisted" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = JobsService::new(client(&server.uri(), logged_in_store(Role::Company)));
    let applicants = jobs
        .applicants(10, Some(joblink_models::ApplicationStatus::Shortlisted))
        .await
        .unwrap();
    assert_eq!(applicants.len(), 1);
}

#[tokio::test]
async fn test_employee_cannot_view_applicants() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let jobs = JobsService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let err = jobs.applicants(10, None).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_download_resume_returns_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/applications/5/resume/download/"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 data".to_vec()))
        .mount(&server)
        .await;

    let jobs = JobsService::new(client(&server.uri(), logged_in_store(Role::Company)));
    let bytes = jobs.download_resume(5).await.unwrap();
    assert_eq!(bytes, b"%PDF-1.4 data".to_vec());
}

// =============================================================================
// Network
// =============================================================================

#[tokio::test]
async fn test_double_click_follow_issues_a_single_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/network/follow/7/"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "message": "Successfully followed user" }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let network = NetworkService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let (first, second) = tokio::join!(network.follow(7), network.follow(7));

    let issued = [first.unwrap(), second.unwrap()];
    assert_eq!(
        issued.iter().filter(|&&sent| sent).count(),
        1,
        "exactly one of the two clicks reaches the network"
    );
}

#[tokio::test]
async fn test_follow_different_targets_both_proceed() {
    let server = MockServer::start().await;
    for id in [1, 2] {
        Mock::given(method("POST"))
            .and(path(format!("/network/follow/{id}/")))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let network = NetworkService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let (a, b) = tokio::join!(network.follow(1), network.follow(2));
    assert!(a.unwrap());
    assert!(b.unwrap());
}

#[tokio::test]
async fn test_my_following_decodes_count_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/network/my-following/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "following": [{ "id": 3, "name": "Carol", "role": "Employee" }],
            "count": 1
        })))
        .mount(&server)
        .await;

    let network = NetworkService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let following = network.my_following().await.unwrap();
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].name, "Carol");
}

#[tokio::test]
async fn test_network_stats_total_falls_back_to_sum() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/network/network-stats/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "followers_count": 3,
            "following_count": 4
        })))
        .mount(&server)
        .await;

    let network = NetworkService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let stats = network.stats().await.unwrap();
    assert_eq!(stats.total(), 7);
}

// =============================================================================
// Posts & Profiles
// =============================================================================

#[tokio::test]
async fn test_post_create_rejects_too_many_images_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let posts = PostsService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let images = (0..5)
        .map(|i| FileUpload::new(format!("pic{i}.png"), vec![0u8; 8]))
        .collect();
    let err = posts.create("hello", images).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_empty_comment_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let posts = PostsService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let err = posts.add_comment(1, "   ").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_like_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api-post/posts/4/like/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "likes_count": 12 })))
        .expect(1)
        .mount(&server)
        .await;

    let posts = PostsService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    let value = posts.like(4).await.unwrap();
    assert_eq!(value["likes_count"], 12);
}

#[tokio::test]
async fn test_company_avatar_goes_to_company_profile() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/profiles/company-profile/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let profiles = ProfileService::new(client(&server.uri(), logged_in_store(Role::Company)));
    profiles
        .upload_profile_image(FileUpload::new("logo.png", vec![0u8; 8]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_employee_avatar_goes_to_user_profile() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/profiles/user-profile/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let profiles = ProfileService::new(client(&server.uri(), logged_in_store(Role::Employee)));
    profiles
        .upload_profile_image(FileUpload::new("me.jpg", vec![0u8; 8]))
        .await
        .unwrap();
}
