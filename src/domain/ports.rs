use super::cart::Cart;
use super::errors::DomainError;
use super::order::{NewOrder, Order, OrderPage};
use super::product::Product;
use super::user::NormalUser;

pub trait CartRepository {
    fn find_cart(&mut self, id: i64) -> Result<Option<Cart>, DomainError>;
    fn save_cart(&mut self, cart: Cart) -> Result<Cart, DomainError>;
}

pub trait UserRepository {
    fn find_user(&mut self, id: i64) -> Result<Option<NormalUser>, DomainError>;
    fn save_user(&mut self, user: NormalUser) -> Result<NormalUser, DomainError>;
}

pub trait OrderRepository {
    fn save_order(&mut self, order: NewOrder) -> Result<Order, DomainError>;
    fn find_order(&mut self, id: i64) -> Result<Option<Order>, DomainError>;
    /// Orders owned by `user_id`, newest first, page `page_index` (zero-based).
    fn find_orders_by_user(
        &mut self,
        user_id: i64,
        page_index: i64,
        page_size: i64,
    ) -> Result<OrderPage, DomainError>;
}

pub trait ProductRepository {
    fn save_product(&mut self, product: Product) -> Result<Product, DomainError>;
}

/// All stores visible inside one transaction.
pub trait UnitOfWork: CartRepository + UserRepository + OrderRepository + ProductRepository {}

impl<T> UnitOfWork for T where
    T: CartRepository + UserRepository + OrderRepository + ProductRepository
{
}

/// Supplies the atomic boundary around a unit of work.
///
/// Writes made through the unit of work are committed only when `f` returns
/// `Ok`; any error rolls all of them back.
pub trait TransactionManager: Send + Sync + 'static {
    fn in_transaction<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn UnitOfWork) -> Result<T, DomainError>;
}
