#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::Router;
use crm_api::{
    app, AppError, AppState, CustomerService, Page, PageRequest, Record, Repository,
    SupplierService,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const CUSTOMER_ORIGIN: &str = "http://localhost:5173";

pub fn test_app() -> Router {
    app(AppState::in_memory(), HeaderValue::from_static(CUSTOMER_ORIGIN))
}

/// App whose repositories fail every call with a storage error.
pub fn failing_app() -> Router {
    let state = AppState::new(
        CustomerService::new(Arc::new(FailingRepository)),
        SupplierService::new(Arc::new(FailingRepository)),
    );
    app(state, HeaderValue::from_static(CUSTOMER_ORIGIN))
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("utf-8 body")
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Reply {
    let response = app.clone().oneshot(request).await.expect("infallible router");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec();
    Reply {
        status,
        headers,
        body,
    }
}

pub fn empty(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn json(method: Method, uri: &str, body: Value) -> Request<Body> {
    let body = body.to_string();
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .expect("request")
}

pub struct FailingRepository;

fn offline() -> AppError {
    AppError::Storage("database offline".into())
}

#[async_trait]
impl<R: Record> Repository<R> for FailingRepository {
    async fn find_all(&self) -> Result<Vec<R>, AppError> {
        Err(offline())
    }

    async fn find_page(&self, _request: PageRequest) -> Result<Page<R>, AppError> {
        Err(offline())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<R>, AppError> {
        Err(offline())
    }

    async fn save(&self, _record: R) -> Result<R, AppError> {
        Err(offline())
    }

    async fn delete(&self, _record: &R) -> Result<(), AppError> {
        Err(offline())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(offline())
    }
}
