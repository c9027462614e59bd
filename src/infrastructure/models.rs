use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::cart::{bool_to_flag, flag_to_bool, Cart};
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderStatus, RefundState};
use crate::domain::product::Product;
use crate::domain::user::NormalUser;
use crate::schema::{carts, normal_users, product_orders, products};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, AsChangeset)]
#[diesel(table_name = normal_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub savings: i32,
}

impl From<UserRow> for NormalUser {
    fn from(r: UserRow) -> Self {
        NormalUser {
            id: r.id,
            name: r.name,
            savings: r.savings,
        }
    }
}

impl From<&NormalUser> for UserRow {
    fn from(u: &NormalUser) -> Self {
        UserRow {
            id: u.id,
            name: u.name.clone(),
            savings: u.savings,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub purchase_count: i32,
    pub limit_count: i32,
    pub total_count: i32,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product {
            id: r.id,
            name: r.name,
            purchase_count: r.purchase_count,
            limit_count: r.limit_count,
            total_count: r.total_count,
        }
    }
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        ProductRow {
            id: p.id,
            name: p.name.clone(),
            purchase_count: p.purchase_count,
            limit_count: p.limit_count,
            total_count: p.total_count,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = carts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartRow {
    pub id: i64,
    pub normal_user_id: i64,
    pub product_id: i64,
    pub product_count: i32,
    pub use_yn: String,
    pub product_order_id: Option<i64>,
}

impl CartRow {
    pub fn into_cart(self, product: ProductRow) -> Cart {
        Cart {
            id: self.id,
            user_id: self.normal_user_id,
            product: product.into(),
            product_count: self.product_count,
            active: flag_to_bool(&self.use_yn),
            order_id: self.product_order_id,
        }
    }
}

/// Mutable cart columns.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = carts)]
#[diesel(treat_none_as_null = true)]
pub struct CartChanges<'a> {
    pub product_count: i32,
    pub use_yn: &'a str,
    pub product_order_id: Option<i64>,
}

impl<'a> From<&'a Cart> for CartChanges<'a> {
    fn from(c: &'a Cart) -> Self {
        CartChanges {
            product_count: c.product_count,
            use_yn: bool_to_flag(c.active),
            product_order_id: c.order_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = product_orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub normal_user_id: i64,
    pub order_number: String,
    pub order_name: String,
    pub amount: i32,
    pub delivery_message: String,
    pub address: String,
    pub order_status: String,
    pub refund_state: String,
    pub created_date: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(r: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: r.id,
            user_id: r.normal_user_id,
            order_number: r.order_number,
            order_name: r.order_name,
            amount: r.amount,
            delivery_message: r.delivery_message,
            address: r.address,
            status: OrderStatus::parse(&r.order_status)?,
            refund_state: RefundState::parse(&r.refund_state)?,
            created_date: r.created_date,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = product_orders)]
pub struct NewOrderRow<'a> {
    pub normal_user_id: i64,
    pub order_number: &'a str,
    pub order_name: &'a str,
    pub amount: i32,
    pub delivery_message: &'a str,
    pub address: &'a str,
    pub order_status: &'a str,
    pub refund_state: &'a str,
}

impl<'a> From<&'a NewOrder> for NewOrderRow<'a> {
    fn from(o: &'a NewOrder) -> Self {
        NewOrderRow {
            normal_user_id: o.user_id,
            order_number: &o.order_number,
            order_name: &o.order_name,
            amount: o.amount,
            delivery_message: &o.delivery_message,
            address: &o.address,
            order_status: o.status.as_str(),
            refund_state: o.refund_state.as_flag(),
        }
    }
}
