//! Auth Router
//!
//! Mounted under `/account` by the web app.

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::gateway::AccountGateway;
use crate::infra::remote::RemoteAccountGateway;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router backed by the remote account API
pub fn auth_router(gateway: RemoteAccountGateway, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(Arc::new(gateway), config)
}

/// Create a generic Auth router for any gateway implementation
pub fn auth_router_generic<G>(gateway: Arc<G>, config: Arc<AuthConfig>) -> Router
where
    G: AccountGateway + Send + Sync + 'static,
{
    let state = AuthAppState { gateway, config };

    Router::new()
        .route(
            "/login",
            get(handlers::login_page::<G>).post(handlers::sign_in::<G>),
        )
        .route(
            "/register",
            get(handlers::register_page).post(handlers::sign_up::<G>),
        )
        .route(
            "/logout",
            get(handlers::logout_page).post(handlers::sign_out::<G>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGateway, Reply};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use tower::ServiceExt;

    struct Harness {
        app: Router,
        gateway: Arc<FakeGateway>,
    }

    impl Harness {
        fn new(gateway: FakeGateway) -> Self {
            Self::with_config(gateway, AuthConfig::default())
        }

        fn with_config(gateway: FakeGateway, config: AuthConfig) -> Self {
            let gateway = Arc::new(gateway);
            let app = Router::new().nest(
                "/account",
                auth_router_generic(gateway.clone(), Arc::new(config)),
            );
            Self { app, gateway }
        }

        async fn post(&self, path: &str, form: &str, extra: &[(&str, &str)]) -> Response {
            let mut builder = Request::post(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            for (name, value) in extra {
                builder = builder.header(*name, *value);
            }
            let request = builder.body(Body::from(form.to_string())).unwrap();
            self.app.clone().oneshot(request).await.unwrap()
        }

        async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
            let mut builder = Request::get(path);
            if let Some(cookie) = cookie {
                builder = builder.header(header::COOKIE, cookie);
            }
            self.app
                .clone()
                .oneshot(builder.body(Body::empty()).unwrap())
                .await
                .unwrap()
        }
    }

    fn set_cookies(response: &Response) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    /// `name=value` pair of a `Set-Cookie` header, usable as a `Cookie` header
    fn cookie_pair(set_cookie: &str) -> String {
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn login_success_sets_cookie_and_redirects_home() {
        let harness = Harness::new(FakeGateway::default());

        let response = harness
            .post("/account/login", "username=alice&password=secret", &[])
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 1);
        let cookie = axum_extra::extract::cookie::Cookie::parse(cookies[0].clone()).unwrap();
        assert_eq!(cookie.name(), "AuthToken");
        assert!(cookie.value().ends_with("tok-123"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookies[0].contains("SameSite=Lax"));
        assert!(!cookies[0].contains("Secure"));
        assert!(cookie.expires_datetime().is_some());
    }

    #[tokio::test]
    async fn login_over_forwarded_https_sets_secure() {
        let harness = Harness::new(FakeGateway::default());

        let response = harness
            .post(
                "/account/login",
                "username=alice&password=secret&remember_me=on",
                &[("x-forwarded-proto", "https")],
            )
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(set_cookies(&response)[0].contains("Secure"));
    }

    #[tokio::test]
    async fn login_validation_failure_rerenders_without_remote_call() {
        let harness = Harness::new(FakeGateway::default());

        let response = harness
            .post("/account/login", "username=alice&password=", &[])
            .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(set_cookies(&response).is_empty());
        assert_eq!(harness.gateway.remote_calls(), 0);

        let body = body_text(response).await;
        assert!(body.contains("Password is required"));
        assert!(body.contains("value=\"alice\""));
    }

    #[tokio::test]
    async fn login_rejected_shows_generic_message() {
        let harness = Harness::new(FakeGateway::login(Reply::Status(400)));

        let response = harness
            .post("/account/login", "username=alice&password=wrong", &[])
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(set_cookies(&response).is_empty());
        assert!(body_text(response).await.contains("Invalid username or password."));
    }

    #[tokio::test]
    async fn login_remote_failure_is_unavailable() {
        let harness = Harness::new(FakeGateway::login(Reply::Status(500)));

        let response = harness
            .post("/account/login", "username=alice&password=secret", &[])
            .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(set_cookies(&response).is_empty());
        assert!(
            body_text(response)
                .await
                .contains("An error occurred during login. Please try again later.")
        );
    }

    #[tokio::test]
    async fn unreadable_form_is_bad_request() {
        let harness = Harness::new(FakeGateway::default());

        let request = Request::post("/account/login")
            .body(Body::from("username=alice"))
            .unwrap();
        let response = harness.app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(harness.gateway.remote_calls(), 0);
    }

    #[tokio::test]
    async fn register_success_redirects_to_login_with_notice() {
        let harness = Harness::new(FakeGateway::default());

        let response = harness
            .post(
                "/account/register",
                "full_name=Ada+Lovelace&email=ada%40example.com&username=ada\
                 &password=engine42&confirm_password=engine42",
                &[],
            )
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/account/login");

        let cookies = set_cookies(&response);
        assert!(cookies.iter().all(|c| !c.starts_with("AuthToken=")));
        let flash = cookies.iter().find(|c| c.starts_with("flash=")).unwrap();

        let page = harness
            .get("/account/login", Some(&cookie_pair(flash)))
            .await;
        assert_eq!(page.status(), StatusCode::OK);
        assert!(set_cookies(&page).iter().any(|c| c.starts_with("flash=;")));
        assert!(
            body_text(page)
                .await
                .contains("Registration successful! Please log in.")
        );
    }

    #[tokio::test]
    async fn register_mismatch_keeps_values_but_not_passwords() {
        let harness = Harness::new(FakeGateway::default());

        let response = harness
            .post(
                "/account/register",
                "full_name=Ada&email=ada%40example.com&username=ada\
                 &password=engine42&confirm_password=engine43",
                &[],
            )
            .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(harness.gateway.remote_calls(), 0);

        let body = body_text(response).await;
        assert!(body.contains("The password and confirmation password do not match."));
        assert!(body.contains("value=\"ada@example.com\""));
        assert!(!body.contains("engine42"));
    }

    #[tokio::test]
    async fn register_conflict() {
        let harness = Harness::new(FakeGateway::register(Reply::Status(400)));

        let response = harness
            .post(
                "/account/register",
                "full_name=Ada&email=ada%40example.com&username=ada\
                 &password=engine42&confirm_password=engine42",
                &[],
            )
            .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(
            body_text(response)
                .await
                .contains("A user with this email or username already exists.")
        );
    }

    #[tokio::test]
    async fn logout_clears_issued_cookie() {
        let harness = Harness::with_config(
            FakeGateway::default(),
            AuthConfig {
                notify_remote_logout: true,
                ..Default::default()
            },
        );

        let login = harness
            .post("/account/login", "username=alice&password=secret", &[])
            .await;
        let session = cookie_pair(&set_cookies(&login)[0]);

        let response = harness
            .post("/account/logout", "", &[("cookie", session.as_str())])
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("AuthToken=;"));
        assert!(cookies[0].contains("Max-Age=0"));
        assert!(cookies[0].contains("Path=/"));
        assert_eq!(
            harness.gateway.last_token.lock().unwrap().as_deref(),
            Some("tok-123")
        );
    }

    #[tokio::test]
    async fn logout_survives_remote_failure() {
        let harness = Harness::with_config(
            FakeGateway {
                logout: Reply::Status(503),
                ..Default::default()
            },
            AuthConfig {
                notify_remote_logout: true,
                ..Default::default()
            },
        );

        let login = harness
            .post("/account/login", "username=alice&password=secret", &[])
            .await;
        let session = cookie_pair(&set_cookies(&login)[0]);

        let response = harness
            .post("/account/logout", "", &[("cookie", session.as_str())])
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(set_cookies(&response)[0].starts_with("AuthToken=;"));
    }

    #[tokio::test]
    async fn logout_clears_cookie_signed_under_another_key() {
        let issuer = Harness::new(FakeGateway::default());
        let login = issuer
            .post("/account/login", "username=alice&password=secret", &[])
            .await;
        let session = cookie_pair(&set_cookies(&login)[0]);

        let restarted = Harness::with_config(
            FakeGateway::default(),
            AuthConfig {
                notify_remote_logout: true,
                ..Default::default()
            },
        );
        let response = restarted
            .post("/account/logout", "", &[("cookie", session.as_str())])
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("AuthToken=;"));
        assert!(cookies[0].contains("Max-Age=0"));
        assert_eq!(restarted.gateway.remote_calls(), 0);
    }

    #[tokio::test]
    async fn logout_without_session_is_noop() {
        let harness = Harness::new(FakeGateway::default());

        let response = harness.post("/account/logout", "", &[]).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(set_cookies(&response).is_empty());
        assert_eq!(harness.gateway.remote_calls(), 0);
    }

    #[tokio::test]
    async fn pages_render() {
        let harness = Harness::new(FakeGateway::default());

        for path in ["/account/login", "/account/register", "/account/logout"] {
            let response = harness.get(path, None).await;
            assert_eq!(response.status(), StatusCode::OK, "{path}");
        }
    }
}
