//! Shared test fixtures for exercising resource operations without a network.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use url::Url;

use super::Client;
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

pub const BASE: &str = "https://api-sandbox.dwolla.com/";

/// Mock HTTP client that replays a queue of responses and records requests.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// A client that must never be called.
    pub fn silent() -> Self {
        Self::new(vec![])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock ran out of responses")
    }
}

/// Builds a client over a mock that replays `responses`.
pub fn client_with(responses: Vec<Result<HttpResponse, HttpError>>) -> Client<MockClient> {
    Client::new(MockClient::new(responses), Url::parse(BASE).unwrap())
}

pub fn json(status: u16, value: &serde_json::Value) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        serde_json::to_vec(value).unwrap(),
    ))
}

pub fn ok(value: &serde_json::Value) -> Result<HttpResponse, HttpError> {
    json(200, value)
}

pub fn empty(status: u16) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        vec![],
    ))
}

pub fn created_at(location: &str) -> Result<HttpResponse, HttpError> {
    let mut headers = http::HeaderMap::new();
    headers.insert(
        http::header::LOCATION,
        http::HeaderValue::from_str(location).unwrap(),
    );
    Ok(HttpResponse::new(http::StatusCode::CREATED, headers, vec![]))
}

/// Wire representation of a subscription as the platform returns it.
pub fn subscription_json(id: &str, url: &str, paused: bool) -> serde_json::Value {
    serde_json::json!({
        "_links": {
            "self": {
                "href": format!("{BASE}webhook-subscriptions/{id}"),
                "type": "application/vnd.dwolla.v1.hal+json",
                "resource-type": "webhook-subscription"
            },
            "webhooks": {
                "href": format!("{BASE}webhook-subscriptions/{id}/webhooks"),
                "type": "application/vnd.dwolla.v1.hal+json",
                "resource-type": "webhook"
            }
        },
        "id": id,
        "url": url,
        "paused": paused,
        "created": "2024-03-01T10:00:00.000Z"
    })
}

pub fn webhooks_json(ids: &[&str]) -> serde_json::Value {
    let items: Vec<_> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "_links": {
                    "self": { "href": format!("{BASE}webhooks/{id}") },
                    "retries": { "href": format!("{BASE}webhooks/{id}/retries") }
                },
                "id": id,
                "topic": "customer_created",
                "accountId": "ca32853c-48fa-40be-ae75-77b37504581b",
                "eventId": "f8e70f48-b7ff-47d0-9d3d-62a099363a76",
                "subscriptionId": "a0943041-7a5c-4e8f-92de-b55711ef3a83",
                "attempts": []
            })
        })
        .collect();

    serde_json::json!({
        "_links": {},
        "_embedded": { "webhooks": items },
        "total": ids.len()
    })
}
