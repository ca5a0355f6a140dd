//! Customer CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::CustomerId;
use customer_store::{Customer, CustomerQuery, CustomerStore};
use domain::{CreateRequest, CustomerService, UpdateRequest};
use messaging::EventPublisher;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CustomerStore, P: EventPublisher> {
    pub customer_service: CustomerService<S, P>,
}

// -- Request types --

/// Body of a create call. Missing fields decode as empty strings and are
/// reported by validation, not by the decoder.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone_number: String,
    pub account_id: String,
}

/// Body of an update call. Every mutable field is replaced with the value
/// given here.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone_number: String,
    pub account_id: String,
}

// -- Response types --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone_number: String,
    pub account_id: String,
    pub last_modified_time: DateTime<Utc>,
    pub created_time: DateTime<Utc>,
    pub version: i64,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id.to_string(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            national_id: customer.national_id,
            phone_number: customer.phone_number,
            account_id: customer.account_id,
            last_modified_time: customer.last_modified_time,
            created_time: customer.created_time,
            version: customer.version.as_i64(),
        }
    }
}

// -- Handlers --

/// POST /customers — create a new customer record.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: CustomerStore + 'static, P: EventPublisher + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let request = CreateRequest::new(
        req.first_name,
        req.last_name,
        req.national_id,
        req.phone_number,
        req.account_id,
    );

    let customer = state.customer_service.create(request).await?;
    Ok(Json(customer.into()))
}

/// GET /customers/{id} — retrieve a single customer.
#[tracing::instrument(skip(state))]
pub async fn get<S: CustomerStore + 'static, P: EventPublisher + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer_id = parse_customer_id(&id)?;
    let customer = state.customer_service.retrieve_one(customer_id).await?;
    Ok(Json(customer.into()))
}

/// GET /customers — list every customer matching the (currently empty) query.
#[tracing::instrument(skip(state))]
pub async fn list<S: CustomerStore + 'static, P: EventPublisher + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state
        .customer_service
        .retrieve_multi(CustomerQuery::all())
        .await?;

    let responses: Vec<CustomerResponse> =
        customers.into_iter().map(CustomerResponse::from).collect();
    Ok(Json(responses))
}

/// PUT /customers/{id} — update an existing customer record.
#[tracing::instrument(skip(state, req))]
pub async fn update<S: CustomerStore + 'static, P: EventPublisher + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer_id = parse_customer_id(&id)?;
    let request = UpdateRequest::new(
        customer_id,
        req.first_name,
        req.last_name,
        req.national_id,
        req.phone_number,
        req.account_id,
    );

    let customer = state.customer_service.update(request).await?;
    Ok(Json(customer.into()))
}

/// DELETE /customers/{id} — remove a customer record.
#[tracing::instrument(skip(state))]
pub async fn remove<S: CustomerStore + 'static, P: EventPublisher + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let customer_id = parse_customer_id(&id)?;
    state.customer_service.remove(customer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_customer_id(id: &str) -> Result<CustomerId, ApiError> {
    let uuid = uuid::Uuid::parse_str(id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid customer id: {e}")))?;
    Ok(CustomerId::from_uuid(uuid))
}
