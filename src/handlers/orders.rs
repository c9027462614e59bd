use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::order_service::OrderOperations;
use crate::domain::order::{OrderHistory, OrderView, PagingInfo, PlaceOrder};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    /// Carts to order. The first one determines the ordering user.
    pub cart_ids: Vec<i64>,
    pub order_number: String,
    pub order_name: String,
    /// Total charged for the order.
    pub amount: i32,
    #[serde(default)]
    pub delivery_message: String,
    pub address: String,
    /// Savings points to redeem. Defaults to 0.
    #[serde(default)]
    pub use_savings: i32,
}

impl From<PlaceOrderRequest> for PlaceOrder {
    fn from(r: PlaceOrderRequest) -> Self {
        PlaceOrder {
            cart_ids: r.cart_ids,
            order_number: r.order_number,
            order_name: r.order_name,
            amount: r.amount,
            delivery_message: r.delivery_message,
            address: r.address,
            use_savings: r.use_savings,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderResponse {
    pub id: i64,
    pub order_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub order_number: String,
    pub order_name: String,
    pub amount: i32,
    pub delivery_message: String,
    pub address: String,
    pub order_status: String,
    pub refund_state: String,
    pub created_date: DateTime<Utc>,
}

impl From<OrderView> for OrderResponse {
    fn from(o: OrderView) -> Self {
        OrderResponse {
            id: o.id,
            user_id: o.user_id,
            order_number: o.order_number,
            order_name: o.order_name,
            amount: o.amount,
            delivery_message: o.delivery_message,
            address: o.address,
            order_status: o.status.as_str().to_string(),
            refund_state: o.refund_state.as_flag().to_string(),
            created_date: o.created_date,
        }
    }
}

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderHistoryParams {
    /// Page number (1-based; 0 is treated as 1). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PagingResponse {
    /// Zero-based index of the returned page.
    pub page_number: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl From<PagingInfo> for PagingResponse {
    fn from(p: PagingInfo) -> Self {
        PagingResponse {
            page_number: p.page_number,
            page_size: p.page_size,
            total_elements: p.total_elements,
            total_pages: p.total_pages,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderHistoryResponse {
    pub orders: Vec<OrderResponse>,
    pub paging: PagingResponse,
}

impl From<OrderHistory> for OrderHistoryResponse {
    fn from(h: OrderHistory) -> Self {
        OrderHistoryResponse {
            orders: h.orders.into_iter().map(OrderResponse::from).collect(),
            paging: h.paging.into(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Turns the given carts into one order. The order, cart, product and savings
/// writes commit together or not at all.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Empty cart list, insufficient savings or out-of-range totals"),
        (status = 404, description = "Cart or user not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    service: web::Data<dyn OrderOperations>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let req: PlaceOrder = body.into_inner().into();
    let order_number = req.order_number.clone();

    let id = web::block(move || service.place_order(req)).await??;

    Ok(HttpResponse::Created().json(PlaceOrderResponse { id, order_number }))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<dyn OrderOperations>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let order = web::block(move || service.get_order(order_id)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /users/{user_id}/orders
///
/// Returns one page (5 orders, newest first) of the user's orders, or
/// 204 No Content when the user has never ordered.
#[utoipa::path(
    get,
    path = "/users/{user_id}/orders",
    params(
        ("user_id" = i64, Path, description = "User id"),
        OrderHistoryParams,
    ),
    responses(
        (status = 200, description = "A page of orders", body = OrderHistoryResponse),
        (status = 204, description = "The user has no orders"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order_history(
    service: web::Data<dyn OrderOperations>,
    path: web::Path<i64>,
    query: web::Query<OrderHistoryParams>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let page = query.into_inner().page;

    let history = web::block(move || service.get_order_history(user_id, page)).await??;

    match history {
        Some(history) => Ok(HttpResponse::Ok().json(OrderHistoryResponse::from(history))),
        None => Ok(HttpResponse::NoContent().finish()),
    }
}
