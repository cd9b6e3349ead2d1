use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::order;
use crate::errors::ServiceError;
use crate::AppState;

/// Incoming order payload for create and update.
///
/// Fields arrive optional so a null or absent value surfaces as a validation
/// message instead of a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(default)]
    #[validate(
        required(message = "customerName must not be empty"),
        length(min = 1, message = "customerName must not be empty")
    )]
    pub customer_name: Option<String>,

    #[serde(default)]
    #[validate(required(message = "orderDate is required"))]
    pub order_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(
        required(message = "shippingAddress must not be empty"),
        length(min = 1, message = "shippingAddress must not be empty")
    )]
    pub shipping_address: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "total is required"),
        custom = "validate_total_positive"
    )]
    pub total: Option<Decimal>,
}

fn validate_total_positive(total: &Decimal) -> Result<(), ValidationError> {
    if *total > Decimal::ZERO {
        return Ok(());
    }
    let mut error = ValidationError::new("positive");
    error.message = Some("total must be positive".into());
    Err(error)
}

/// Payload that passed validation; every business field is present.
#[derive(Debug)]
struct ValidatedOrder {
    customer_name: String,
    order_date: NaiveDate,
    shipping_address: String,
    total: Decimal,
}

impl OrderPayload {
    fn into_validated(self) -> Result<ValidatedOrder, ServiceError> {
        self.validate()?;

        let (Some(customer_name), Some(order_date), Some(shipping_address), Some(total)) = (
            self.customer_name,
            self.order_date,
            self.shipping_address,
            self.total,
        ) else {
            return Err(ServiceError::ValidationFailed(vec![
                "order payload is incomplete".to_string(),
            ]));
        };

        Ok(ValidatedOrder {
            customer_name,
            order_date,
            shipping_address,
            total,
        })
    }
}

/// Wire shape of an order: camelCase fields, ISO date, numeric total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub shipping_address: String,
    pub total: Decimal,
}

impl From<order::Model> for OrderResponse {
    fn from(model: order::Model) -> Self {
        Self {
            id: model.id,
            customer_name: model.customer_name,
            order_date: model.order_date,
            shipping_address: model.shipping_address,
            total: model.total,
        }
    }
}

fn order_not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Order with ID {} not found", id))
}

/// Look up an order by id. Missing ids yield a bodiless 404.
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    match state.order_repository().find_by_id(id).await? {
        Some(order) => Ok((StatusCode::OK, Json(OrderResponse::from(order))).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Validate and persist a new order.
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<(StatusCode, Json<OrderResponse>), ServiceError> {
    let fields = payload.into_validated()?;

    let order = order::ActiveModel {
        id: NotSet,
        customer_name: Set(fields.customer_name),
        order_date: Set(fields.order_date),
        shipping_address: Set(fields.shipping_address),
        total: Set(fields.total),
    };
    let saved = state.order_repository().insert(order).await?;

    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// Overwrite the four mutable fields of an existing order; identity is fixed.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<OrderResponse>, ServiceError> {
    let fields = payload.into_validated()?;

    let repository = state.order_repository();
    let existing = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| order_not_found(id))?;

    let mut order: order::ActiveModel = existing.into();
    order.customer_name = Set(fields.customer_name);
    order.order_date = Set(fields.order_date);
    order.shipping_address = Set(fields.shipping_address);
    order.total = Set(fields.total);

    let updated = repository.update(order).await?;

    Ok(Json(updated.into()))
}

/// Remove an existing order.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    let repository = state.order_repository();
    let existing = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| order_not_found(id))?;

    repository.delete(existing).await?;

    Ok(StatusCode::NO_CONTENT)
}
