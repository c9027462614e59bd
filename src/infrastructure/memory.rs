use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::domain::cart::Cart;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderPage};
use crate::domain::ports::{
    CartRepository, OrderRepository, ProductRepository, TransactionManager, UnitOfWork,
    UserRepository,
};
use crate::domain::product::Product;
use crate::domain::user::NormalUser;

/// Stored cart; the product is resolved by id on every lookup.
#[derive(Debug, Clone)]
struct CartRecord {
    id: i64,
    user_id: i64,
    product_id: i64,
    product_count: i32,
    active: bool,
    order_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
struct State {
    users: BTreeMap<i64, NormalUser>,
    products: BTreeMap<i64, Product>,
    carts: BTreeMap<i64, CartRecord>,
    orders: BTreeMap<i64, Order>,
    next_order_id: i64,
}

impl CartRepository for State {
    fn find_cart(&mut self, id: i64) -> Result<Option<Cart>, DomainError> {
        let Some(record) = self.carts.get(&id) else {
            return Ok(None);
        };
        let product = self.products.get(&record.product_id).cloned().ok_or_else(|| {
            DomainError::Internal(format!(
                "cart {} refers to missing product {}",
                record.id, record.product_id
            ))
        })?;
        Ok(Some(Cart {
            id: record.id,
            user_id: record.user_id,
            product,
            product_count: record.product_count,
            active: record.active,
            order_id: record.order_id,
        }))
    }

    fn save_cart(&mut self, cart: Cart) -> Result<Cart, DomainError> {
        self.carts.insert(
            cart.id,
            CartRecord {
                id: cart.id,
                user_id: cart.user_id,
                product_id: cart.product.id,
                product_count: cart.product_count,
                active: cart.active,
                order_id: cart.order_id,
            },
        );
        Ok(cart)
    }
}

impl UserRepository for State {
    fn find_user(&mut self, id: i64) -> Result<Option<NormalUser>, DomainError> {
        Ok(self.users.get(&id).cloned())
    }

    fn save_user(&mut self, user: NormalUser) -> Result<NormalUser, DomainError> {
        self.users.insert(user.id, user.clone());
        Ok(user)
    }
}

impl OrderRepository for State {
    fn save_order(&mut self, order: NewOrder) -> Result<Order, DomainError> {
        self.next_order_id += 1;
        let saved = Order {
            id: self.next_order_id,
            user_id: order.user_id,
            order_number: order.order_number,
            order_name: order.order_name,
            amount: order.amount,
            delivery_message: order.delivery_message,
            address: order.address,
            status: order.status,
            refund_state: order.refund_state,
            created_date: Utc::now(),
        };
        self.orders.insert(saved.id, saved.clone());
        Ok(saved)
    }

    fn find_order(&mut self, id: i64) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.get(&id).cloned())
    }

    fn find_orders_by_user(
        &mut self,
        user_id: i64,
        page_index: i64,
        page_size: i64,
    ) -> Result<OrderPage, DomainError> {
        let mut owned: Vec<&Order> = self
            .orders
            .values()
            .filter(|o| o.user_id == user_id)
            .collect();
        // Newest first; ids break ties between orders created in the same instant.
        owned.sort_by(|a, b| {
            b.created_date
                .cmp(&a.created_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        let total = owned.len() as i64;
        let skip = usize::try_from(page_index.saturating_mul(page_size)).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(0);
        Ok(OrderPage {
            items: owned.into_iter().skip(skip).take(take).cloned().collect(),
            total,
        })
    }
}

impl ProductRepository for State {
    fn save_product(&mut self, product: Product) -> Result<Product, DomainError> {
        self.products.insert(product.id, product.clone());
        Ok(product)
    }
}

/// Map-backed store for tests. Each transaction works on a copy of the state
/// that is swapped in only when the closure succeeds.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut State) -> T) -> Result<T, DomainError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| DomainError::Internal("in-memory store lock poisoned".to_string()))?;
        Ok(f(&mut state))
    }

    pub fn insert_user(&self, user: NormalUser) -> Result<(), DomainError> {
        self.with_state(|s| {
            s.users.insert(user.id, user);
        })
    }

    pub fn insert_product(&self, product: Product) -> Result<(), DomainError> {
        self.with_state(|s| {
            s.products.insert(product.id, product);
        })
    }

    /// Adds an active cart holding `product_count` units of `product_id`.
    pub fn insert_cart(
        &self,
        id: i64,
        user_id: i64,
        product_id: i64,
        product_count: i32,
    ) -> Result<(), DomainError> {
        self.with_state(|s| {
            s.carts.insert(
                id,
                CartRecord {
                    id,
                    user_id,
                    product_id,
                    product_count,
                    active: true,
                    order_id: None,
                },
            );
        })
    }

    /// Stores a ready-made order, keeping its id and creation time.
    pub fn insert_order(&self, order: Order) -> Result<(), DomainError> {
        self.with_state(|s| {
            s.next_order_id = s.next_order_id.max(order.id);
            s.orders.insert(order.id, order);
        })
    }

    pub fn cart(&self, id: i64) -> Result<Option<Cart>, DomainError> {
        self.with_state(|s| s.find_cart(id))?
    }

    pub fn user(&self, id: i64) -> Result<Option<NormalUser>, DomainError> {
        self.with_state(|s| s.users.get(&id).cloned())
    }

    pub fn product(&self, id: i64) -> Result<Option<Product>, DomainError> {
        self.with_state(|s| s.products.get(&id).cloned())
    }

    pub fn orders(&self) -> Result<Vec<Order>, DomainError> {
        self.with_state(|s| s.orders.values().cloned().collect())
    }
}

impl TransactionManager for InMemoryStore {
    fn in_transaction<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn UnitOfWork) -> Result<T, DomainError>,
    {
        let mut state = self
            .state
            .lock()
            .map_err(|_| DomainError::Internal("in-memory store lock poisoned".to_string()))?;
        let mut staged = state.clone();
        let out = f(&mut staged)?;
        *state = staged;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::domain::order::{OrderStatus, RefundState};

    fn order(id: i64, user_id: i64, minutes: i64) -> Order {
        Order {
            id,
            user_id,
            order_number: format!("no-{id}"),
            order_name: "order".to_string(),
            amount: 100,
            delivery_message: String::new(),
            address: "Busan".to_string(),
            status: OrderStatus::Complete,
            refund_state: RefundState::NotRefunded,
            created_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
                + Duration::minutes(minutes),
        }
    }

    #[test]
    fn failed_transaction_leaves_state_untouched() {
        let store = InMemoryStore::new();
        store
            .insert_user(NormalUser {
                id: 1,
                name: "park".to_string(),
                savings: 10,
            })
            .unwrap();

        let result: Result<(), DomainError> = store.in_transaction(|uow| {
            uow.save_user(NormalUser {
                id: 1,
                name: "park".to_string(),
                savings: 999,
            })?;
            Err(DomainError::Internal("boom".to_string()))
        });

        assert!(result.is_err());
        assert_eq!(store.user(1).unwrap().unwrap().savings, 10);
    }

    #[test]
    fn successful_transaction_commits() {
        let store = InMemoryStore::new();
        store.insert_product(pen(3)).unwrap();

        store
            .in_transaction(|uow| {
                let mut p = pen(3);
                p.record_purchase(1)?;
                uow.save_product(p)
            })
            .unwrap();

        assert_eq!(store.product(3).unwrap().unwrap().total_count, 0);
    }

    fn pen(id: i64) -> Product {
        Product {
            id,
            name: "Pen".to_string(),
            purchase_count: 0,
            limit_count: 1,
            total_count: 1,
        }
    }

    #[test]
    fn cart_lookup_attaches_current_product() {
        let store = InMemoryStore::new();
        store.insert_product(pen(3)).unwrap();
        store.insert_cart(8, 1, 3, 2).unwrap();

        let cart = store.cart(8).unwrap().expect("cart exists");
        assert_eq!(cart.product.id, 3);
        assert_eq!(cart.product_count, 2);
        assert!(cart.active);
        assert_eq!(cart.order_id, None);
    }

    #[test]
    fn orders_by_user_are_newest_first_and_paged() {
        let store = InMemoryStore::new();
        for (id, minutes) in [(1, 0), (2, 10), (3, 5), (4, 20)] {
            store.insert_order(order(id, 1, minutes)).unwrap();
        }
        store.insert_order(order(5, 2, 30)).unwrap();

        let first = store
            .in_transaction(|uow| uow.find_orders_by_user(1, 0, 3))
            .unwrap();
        assert_eq!(first.total, 4);
        let ids: Vec<i64> = first.items.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![4, 2, 3]);

        let second = store
            .in_transaction(|uow| uow.find_orders_by_user(1, 1, 3))
            .unwrap();
        let ids: Vec<i64> = second.items.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn saved_orders_get_increasing_ids_after_seeded_ones() {
        let store = InMemoryStore::new();
        store.insert_order(order(7, 1, 0)).unwrap();

        let saved = store
            .in_transaction(|uow| {
                uow.save_order(NewOrder {
                    user_id: 1,
                    order_number: "n".to_string(),
                    order_name: "o".to_string(),
                    amount: 10,
                    delivery_message: String::new(),
                    address: String::new(),
                    status: OrderStatus::Complete,
                    refund_state: RefundState::NotRefunded,
                })
            })
            .unwrap();
        assert_eq!(saved.id, 8);
    }
}
