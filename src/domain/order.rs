use chrono::{DateTime, Utc};

use super::errors::DomainError;

/// Orders are always shown five per page in a user's history.
pub const HISTORY_PAGE_SIZE: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Complete,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Complete => "COMPLETE",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "COMPLETE" => Ok(OrderStatus::Complete),
            other => Err(DomainError::Internal(format!("unknown order status '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundState {
    NotRefunded,
    Refunded,
}

impl RefundState {
    pub fn as_flag(&self) -> &'static str {
        match self {
            RefundState::NotRefunded => "N",
            RefundState::Refunded => "Y",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "N" => Ok(RefundState::NotRefunded),
            "Y" => Ok(RefundState::Refunded),
            other => Err(DomainError::Internal(format!("unknown refund state '{other}'"))),
        }
    }
}

/// Input of the order placement workflow.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    /// The first id is the anchor cart used to resolve the owner.
    pub cart_ids: Vec<i64>,
    pub order_number: String,
    pub order_name: String,
    pub amount: i32,
    pub delivery_message: String,
    pub address: String,
    pub use_savings: i32,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i64,
    pub order_number: String,
    pub order_name: String,
    pub amount: i32,
    pub delivery_message: String,
    pub address: String,
    pub status: OrderStatus,
    pub refund_state: RefundState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub order_number: String,
    pub order_name: String,
    pub amount: i32,
    pub delivery_message: String,
    pub address: String,
    pub status: OrderStatus,
    pub refund_state: RefundState,
    pub created_date: DateTime<Utc>,
}

/// Flat projection of an order handed to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub id: i64,
    pub user_id: i64,
    pub order_number: String,
    pub order_name: String,
    pub amount: i32,
    pub delivery_message: String,
    pub address: String,
    pub status: OrderStatus,
    pub refund_state: RefundState,
    pub created_date: DateTime<Utc>,
}

impl From<Order> for OrderView {
    fn from(o: Order) -> Self {
        OrderView {
            id: o.id,
            user_id: o.user_id,
            order_number: o.order_number,
            order_name: o.order_name,
            amount: o.amount,
            delivery_message: o.delivery_message,
            address: o.address,
            status: o.status,
            refund_state: o.refund_state,
            created_date: o.created_date,
        }
    }
}

/// One page of a user's orders plus the unpaged total.
#[derive(Debug, Clone)]
pub struct OrderPage {
    pub items: Vec<Order>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingInfo {
    /// Zero-based page index actually queried.
    pub page_number: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl PagingInfo {
    pub fn new(page_number: i64, page_size: i64, total_elements: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_elements + page_size - 1) / page_size
        } else {
            0
        };
        PagingInfo {
            page_number,
            page_size,
            total_elements,
            total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderHistory {
    pub orders: Vec<OrderView>,
    pub paging: PagingInfo,
}

/// Maps the one-based page from the caller to a zero-based index.
///
/// Page 0 and page 1 both select the first page.
pub fn history_page_index(page: u32) -> i64 {
    i64::from(page.saturating_sub(1))
}
