//! End-to-end view lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `ListView` and
//! `DetailView` through a `Transport` backed by ureq. Validates request
//! building, response parsing and the view transitions over real HTTP.

use std::net::SocketAddr;

use todo_view_core::{
    ApiError, ApplyOutcome, DetailRender, DetailView, Filter, HttpRequest, HttpResponse,
    ListRender, ListView, TodoClient, Transport,
};

/// Executes requests with ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data, letting the core interpret the status.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&req.path);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }
        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}

/// Start the mock server on a random port and return its address.
fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[tokio::test]
async fn list_view_lifecycle() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}/todos"));
    let transport = UreqTransport::new();
    let seed = mock_server::seed_todos();

    // Step 1: mount: the full collection is shown.
    let mut list = ListView::new();
    assert_eq!(list.load(&client, &transport).await, ApplyOutcome::Applied);
    assert_eq!(list.row_count(), seed.len());
    let ids: Vec<_> = list.raw().iter().map(|t| t.id).collect();
    let seed_ids: Vec<_> = seed.iter().map(|t| t.id).collect();
    assert_eq!(ids, seed_ids, "server order preserved");

    // Step 2: open only.
    list.set_filter(Filter::Open);
    let open = seed.iter().filter(|t| !t.completed).count();
    assert_eq!(list.row_count(), open);
    assert!(list.filtered().iter().all(|t| !t.completed));

    // Step 3: completed only.
    list.set_filter(Filter::Completed);
    assert_eq!(list.row_count(), seed.len() - open);

    // Step 4: back to all, nothing lost.
    list.set_filter(Filter::All);
    assert_eq!(list.filtered(), list.raw());
    assert_eq!(list.row_count(), seed.len());

    // Step 5: activate a row and hand the id to the detail view.
    let mut selected = None;
    list.activate(5, |id| selected = Some(id));
    assert_eq!(selected, Some(6));

    let mut detail = DetailView::new();
    let applied = detail
        .load(selected.unwrap(), &client, &transport)
        .await;
    assert_eq!(applied, Some(ApplyOutcome::Applied));
    let DetailRender::Loaded(fields) = detail.render() else {
        panic!("expected loaded detail");
    };
    assert_eq!(fields.lines(), ["todo number 6", "6", "2", "Completed"]);
}

#[tokio::test]
async fn list_view_missing_collection_shows_error() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}/missing"));
    let transport = UreqTransport::new();

    let mut list = ListView::new();
    list.load(&client, &transport).await;
    assert_eq!(list.render(), ListRender::Failed { message: "HTTP error! Status: 404" });
    assert_eq!(list.row_count(), 0);
    assert!(!list.is_loading());
}

#[tokio::test]
async fn detail_view_unknown_id_fails() {
    let addr = start_server();
    let client = TodoClient::new(&format!("http://{addr}/todos"));
    let transport = UreqTransport::new();

    let mut detail = DetailView::new();
    detail.load(999, &client, &transport).await;
    assert_eq!(detail.error(), Some("HTTP error! Status: 404"));

    // No retry for the same id; a different id fetches again.
    assert_eq!(detail.load(999, &client, &transport).await, None);
    assert_eq!(
        detail.load(1, &client, &transport).await,
        Some(ApplyOutcome::Applied)
    );
    assert_eq!(detail.todo().map(|t| t.id), Some(1));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = TodoClient::new(&format!("http://{addr}/todos"));
    let transport = UreqTransport::new();

    let mut list = ListView::new();
    list.load(&client, &transport).await;
    let message = list.error().expect("expected failure");
    assert!(message.starts_with("transport failed"), "{message}");
}
