mod common;

#[cfg(test)]
pub mod web_tests {
    use actix_web::http::StatusCode;
    use actix_web::http::header::{HeaderValue, X_FRAME_OPTIONS};
    use actix_web::{App, HttpResponse, test, web};
    use leptos::config::LeptosOptions;
    use any_spawner::Executor;
    use leptos_actix::render_app_to_stream;
    use leptos_router::Method;

    use reciguard::frontend::shell;
    use reciguard::web::SecurityHeaders;
    use reciguard::web::middleware::CONTENT_SECURITY_POLICY;

    async fn get_page(path: &str) -> (StatusCode, String) {
        let _ = Executor::init_tokio();
        let options = LeptosOptions::builder().output_name("reciguard").build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(options.clone()))
                .default_service(render_app_to_stream(
                    move || shell(options.clone()),
                    Method::Get,
                )),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[::core::prelude::v1::test]
    fn test_default_headers() {
        let headers = SecurityHeaders::default();
        let names: Vec<&str> = headers.headers().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            [
                "x-frame-options",
                "x-content-type-options",
                "referrer-policy",
                "content-security-policy",
            ]
        );
        assert!(CONTENT_SECURITY_POLICY.contains("'wasm-unsafe-eval'"));
    }

    #[::core::prelude::v1::test]
    fn test_with_replaces_header() {
        let headers = SecurityHeaders::default().with("x-frame-options", "SAMEORIGIN");
        let frame: Vec<_> = headers
            .headers()
            .filter(|(n, _)| n.as_str() == "x-frame-options")
            .collect();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].1, "SAMEORIGIN");
    }

    #[actix_web::test]
    async fn test_middleware_sets_headers() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityHeaders::default())
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(res.status().is_success());
        assert_eq!(res.headers().get(X_FRAME_OPTIONS), Some(&HeaderValue::from_static("DENY")));
        assert!(res.headers().contains_key("content-security-policy"));
    }

    #[actix_web::test]
    async fn test_middleware_keeps_handler_headers() {
        let app = test::init_service(App::new().wrap(SecurityHeaders::default()).route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok()
                    .insert_header((X_FRAME_OPTIONS, "SAMEORIGIN"))
                    .finish()
            }),
        ))
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.headers().get(X_FRAME_OPTIONS).unwrap(), "SAMEORIGIN");
    }

    #[actix_web::test]
    async fn test_unmatched_path_renders_not_found() {
        let (status, body) = get_page("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
        assert!(!body.contains("data-fixture=\"footer\""));
    }

    #[actix_web::test]
    async fn test_info_update_renders_account_fixtures() {
        let (status, body) = get_page("/users/info").await;
        assert_eq!(status, StatusCode::OK);
        for fixture in ["sub-header", "account-sidebar", "home-panel", "footer"] {
            assert!(body.contains(&format!("data-fixture=\"{fixture}\"")), "{}", fixture);
        }
        assert!(!body.contains("Page not found"));
    }

    #[actix_web::test]
    async fn test_login_renders_without_fixtures() {
        let (status, body) = get_page("/auth/login").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Welcome back"));
        assert!(!body.contains("data-fixture="));
    }
}
