use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::cart::Cart;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderPage};
use crate::domain::ports::{
    CartRepository, OrderRepository, ProductRepository, TransactionManager, UnitOfWork,
    UserRepository,
};
use crate::domain::product::Product;
use crate::domain::user::NormalUser;
use crate::schema::{carts, normal_users, product_orders, products};

use super::models::{CartChanges, CartRow, NewOrderRow, OrderRow, ProductRow, UserRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Unit of work ──────────────────────────────────────────────────────────────

/// Repositories bound to one connection that is already inside a transaction.
pub struct PgUnitOfWork<'c> {
    conn: &'c mut PgConnection,
}

impl CartRepository for PgUnitOfWork<'_> {
    fn find_cart(&mut self, id: i64) -> Result<Option<Cart>, DomainError> {
        let row = carts::table
            .inner_join(products::table)
            .filter(carts::id.eq(id))
            .select((CartRow::as_select(), ProductRow::as_select()))
            .first::<(CartRow, ProductRow)>(self.conn)
            .optional()?;

        Ok(row.map(|(cart, product)| cart.into_cart(product)))
    }

    fn save_cart(&mut self, cart: Cart) -> Result<Cart, DomainError> {
        diesel::update(carts::table.find(cart.id))
            .set(&CartChanges::from(&cart))
            .execute(self.conn)?;
        Ok(cart)
    }
}

impl UserRepository for PgUnitOfWork<'_> {
    fn find_user(&mut self, id: i64) -> Result<Option<NormalUser>, DomainError> {
        let row = normal_users::table
            .find(id)
            .select(UserRow::as_select())
            .first(self.conn)
            .optional()?;
        Ok(row.map(NormalUser::from))
    }

    fn save_user(&mut self, user: NormalUser) -> Result<NormalUser, DomainError> {
        diesel::update(normal_users::table.find(user.id))
            .set(&UserRow::from(&user))
            .execute(self.conn)?;
        Ok(user)
    }
}

impl OrderRepository for PgUnitOfWork<'_> {
    fn save_order(&mut self, order: NewOrder) -> Result<Order, DomainError> {
        let row = diesel::insert_into(product_orders::table)
            .values(&NewOrderRow::from(&order))
            .returning(OrderRow::as_returning())
            .get_result(self.conn)?;
        Order::try_from(row)
    }

    fn find_order(&mut self, id: i64) -> Result<Option<Order>, DomainError> {
        let row = product_orders::table
            .find(id)
            .select(OrderRow::as_select())
            .first(self.conn)
            .optional()?;
        row.map(Order::try_from).transpose()
    }

    fn find_orders_by_user(
        &mut self,
        user_id: i64,
        page_index: i64,
        page_size: i64,
    ) -> Result<OrderPage, DomainError> {
        let total: i64 = product_orders::table
            .filter(product_orders::normal_user_id.eq(user_id))
            .count()
            .get_result(self.conn)?;

        let rows = product_orders::table
            .filter(product_orders::normal_user_id.eq(user_id))
            .select(OrderRow::as_select())
            .order((product_orders::created_date.desc(), product_orders::id.desc()))
            .limit(page_size)
            .offset(page_index * page_size)
            .load(self.conn)?;

        Ok(OrderPage {
            items: rows
                .into_iter()
                .map(Order::try_from)
                .collect::<Result<_, _>>()?,
            total,
        })
    }
}

impl ProductRepository for PgUnitOfWork<'_> {
    fn save_product(&mut self, product: Product) -> Result<Product, DomainError> {
        diesel::update(products::table.find(product.id))
            .set(&ProductRow::from(&product))
            .execute(self.conn)?;
        Ok(product)
    }
}

// ── Transaction manager ───────────────────────────────────────────────────────

pub struct DieselStore {
    pool: DbPool,
}

impl DieselStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TransactionManager for DieselStore {
    fn in_transaction<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn UnitOfWork) -> Result<T, DomainError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;

        conn.transaction::<_, DomainError, _>(|conn| {
            let mut uow = PgUnitOfWork { conn };
            f(&mut uow)
        })
    }
}
