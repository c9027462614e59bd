use crate::domain::errors::DomainError;
use crate::domain::order::{
    history_page_index, OrderHistory, OrderView, PagingInfo, PlaceOrder, HISTORY_PAGE_SIZE,
};
use crate::domain::placement;
use crate::domain::ports::TransactionManager;

pub struct OrderService<S> {
    store: S,
}

impl<S: TransactionManager> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Places an order atomically and returns the new order's id.
    pub fn place_order(&self, req: PlaceOrder) -> Result<i64, DomainError> {
        let result = self
            .store
            .in_transaction(|uow| placement::place_order(uow, &req));

        match &result {
            Ok(order_id) => log::info!(
                "Placed order {} ({}) from {} cart(s)",
                order_id,
                req.order_number,
                req.cart_ids.len()
            ),
            Err(e) => log::warn!("Order {} rejected: {}", req.order_number, e),
        }
        result
    }

    pub fn get_order(&self, order_id: i64) -> Result<OrderView, DomainError> {
        self.store.in_transaction(|uow| {
            uow.find_order(order_id)?
                .map(OrderView::from)
                .ok_or(DomainError::NotExistOrder(order_id))
        })
    }

    /// Returns `None` when the user has no orders at all.
    pub fn get_order_history(
        &self,
        user_id: i64,
        page: u32,
    ) -> Result<Option<OrderHistory>, DomainError> {
        let page_index = history_page_index(page);
        let found = self.store.in_transaction(|uow| {
            uow.find_orders_by_user(user_id, page_index, HISTORY_PAGE_SIZE)
        })?;

        if found.total == 0 {
            return Ok(None);
        }

        Ok(Some(OrderHistory {
            orders: found.items.into_iter().map(OrderView::from).collect(),
            paging: PagingInfo::new(page_index, HISTORY_PAGE_SIZE, found.total),
        }))
    }
}

/// Object-safe face of [`OrderService`] shared with the HTTP layer.
pub trait OrderOperations: Send + Sync {
    fn place_order(&self, req: PlaceOrder) -> Result<i64, DomainError>;
    fn get_order(&self, order_id: i64) -> Result<OrderView, DomainError>;
    fn get_order_history(
        &self,
        user_id: i64,
        page: u32,
    ) -> Result<Option<OrderHistory>, DomainError>;
}

impl<S: TransactionManager> OrderOperations for OrderService<S> {
    fn place_order(&self, req: PlaceOrder) -> Result<i64, DomainError> {
        OrderService::place_order(self, req)
    }

    fn get_order(&self, order_id: i64) -> Result<OrderView, DomainError> {
        OrderService::get_order(self, order_id)
    }

    fn get_order_history(
        &self,
        user_id: i64,
        page: u32,
    ) -> Result<Option<OrderHistory>, DomainError> {
        OrderService::get_order_history(self, user_id, page)
    }
}
