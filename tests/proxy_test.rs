//! End-to-end forwarding tests against real sockets.

use std::collections::HashMap;

use axum::http::StatusCode;
use common::Echo;

mod common;

#[tokio::test]
async fn test_path_and_query_reach_backend_unchanged() {
    let backend = common::start_echo_backend("a").await;
    let (proxy, shutdown) = common::start_balancer(&[backend]).await;

    let echo: Echo = common::client()
        .get(format!("http://{proxy}/foo?x=1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(echo.path, "/foo");
    assert_eq!(echo.query.as_deref(), Some("x=1"));
    assert_eq!(echo.method, "GET");

    shutdown.trigger();
}

#[tokio::test]
async fn test_method_body_and_headers_pass_through() {
    let backend = common::start_echo_backend("a").await;
    let (proxy, shutdown) = common::start_balancer(&[backend]).await;

    let echo: Echo = common::client()
        .put(format!("http://{proxy}/items/7"))
        .header("x-custom", "kept")
        .header("x-drop", "gone")
        .header("connection", "x-drop")
        .body("payload bytes")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(echo.method, "PUT");
    assert_eq!(echo.path, "/items/7");
    assert_eq!(echo.body, "payload bytes");
    assert_eq!(echo.headers.get("x-custom").map(String::as_str), Some("kept"));
    assert!(!echo.headers.contains_key("x-drop"));
    assert_eq!(
        echo.headers.get("x-forwarded-for").map(String::as_str),
        Some("127.0.0.1")
    );
    assert_eq!(
        echo.headers.get("host").map(String::as_str),
        Some(proxy.to_string().as_str())
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_http2_authority_is_forwarded_as_host() {
    let backend = common::start_echo_backend("a").await;
    let (proxy, shutdown) = common::start_balancer(&[backend]).await;

    let client = reqwest::Client::builder()
        .no_proxy()
        .http2_prior_knowledge()
        .build()
        .unwrap();
    let res = client.get(format!("http://{proxy}/h2")).send().await.unwrap();
    assert_eq!(res.version(), reqwest::Version::HTTP_2);

    let echo: Echo = res.json().await.unwrap();
    assert_eq!(echo.path, "/h2");
    assert_eq!(
        echo.headers.get("host").map(String::as_str),
        Some(proxy.to_string().as_str())
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_te_trailers_reaches_backend() {
    let backend = common::start_echo_backend("a").await;
    let (proxy, shutdown) = common::start_balancer(&[backend]).await;

    let echo: Echo = common::client()
        .get(format!("http://{proxy}/"))
        .header("te", "trailers")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(echo.headers.get("te").map(String::as_str), Some("trailers"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_backend_response_is_relayed_verbatim() {
    let backend = common::start_raw_backend(
        "HTTP/1.1 201 Created\r\n\
         Content-Type: text/plain\r\n\
         X-Backend: raw\r\n\
         Content-Length: 5\r\n\
         Connection: close\r\n\r\n\
         hello",
    )
    .await;
    let (proxy, shutdown) = common::start_balancer(&[backend]).await;

    let res = common::client()
        .post(format!("http://{proxy}/create"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()["x-backend"], "raw");
    assert_eq!(res.headers()["content-type"], "text/plain");
    assert_eq!(res.text().await.unwrap(), "hello");

    shutdown.trigger();
}

#[tokio::test]
async fn test_unreachable_backend_returns_bad_gateway() {
    let dead = common::unused_addr().await;
    let (proxy, shutdown) = common::start_balancer(&[dead]).await;

    let res = common::client()
        .get(format!("http://{proxy}/"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    shutdown.trigger();
}

#[tokio::test]
async fn test_dead_backend_keeps_its_share_without_failover() {
    let live = common::start_echo_backend("live").await;
    let dead = common::unused_addr().await;
    let (proxy, shutdown) = common::start_balancer(&[live, dead]).await;
    let client = common::client();

    let mut statuses = Vec::new();
    for _ in 0..4 {
        let res = client.get(format!("http://{proxy}/")).send().await.unwrap();
        statuses.push(res.status());
    }

    assert_eq!(
        statuses,
        vec![
            StatusCode::OK,
            StatusCode::BAD_GATEWAY,
            StatusCode::OK,
            StatusCode::BAD_GATEWAY,
        ]
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_sequential_requests_rotate_in_order() {
    let a = common::start_echo_backend("a").await;
    let b = common::start_echo_backend("b").await;
    let c = common::start_echo_backend("c").await;
    let (proxy, shutdown) = common::start_balancer(&[a, b, c]).await;
    let client = common::client();

    let mut order = Vec::new();
    for _ in 0..6 {
        let echo: Echo = client
            .get(format!("http://{proxy}/"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        order.push(echo.backend);
    }

    assert_eq!(order, vec!["a", "b", "c", "a", "b", "c"]);

    shutdown.trigger();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_split_evenly() {
    const ROTATIONS: usize = 20;
    let names = ["a", "b", "c"];

    let mut backends = Vec::new();
    for name in names {
        backends.push(common::start_echo_backend(name).await);
    }
    let (proxy, shutdown) = common::start_balancer(&backends).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for _ in 0..names.len() * ROTATIONS {
        let client = client.clone();
        let url = format!("http://{proxy}/");
        tasks.push(tokio::spawn(async move {
            let echo: Echo = client.get(&url).send().await.unwrap().json().await.unwrap();
            echo.backend
        }));
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for task in tasks {
        *counts.entry(task.await.unwrap()).or_default() += 1;
    }

    for name in names {
        assert_eq!(counts.get(name), Some(&ROTATIONS), "counts: {counts:?}");
    }

    shutdown.trigger();
}
