use std::collections::HashMap;

use super::errors::DomainError;
use super::order::{NewOrder, OrderStatus, PlaceOrder, RefundState};
use super::ports::UnitOfWork;
use super::product::Product;

/// A cart that has been attached to the new order, pending its inventory update.
#[derive(Debug, Clone)]
struct ConsumedLine {
    product: Product,
    quantity: i32,
}

/// Places an order for the carts in `req`.
///
/// The caller must run this inside a single transaction: an error at any step
/// leaves earlier writes staged, and only the rollback undoes them.
pub fn place_order(uow: &mut dyn UnitOfWork, req: &PlaceOrder) -> Result<i64, DomainError> {
    let anchor_id = *req
        .cart_ids
        .first()
        .ok_or_else(|| DomainError::InvalidInput("cart_ids must not be empty".to_string()))?;

    // 1. Resolve the owner through the anchor cart.
    let anchor = uow
        .find_cart(anchor_id)?
        .ok_or(DomainError::NotExistCart(anchor_id))?;
    let mut user = uow
        .find_user(anchor.user_id)?
        .ok_or(DomainError::NotExistUser(anchor.user_id))?;

    // 2. Create the order.
    let order = uow.save_order(NewOrder {
        user_id: user.id,
        order_number: req.order_number.clone(),
        order_name: req.order_name.clone(),
        amount: req.amount,
        delivery_message: req.delivery_message.clone(),
        address: req.address.clone(),
        status: OrderStatus::Complete,
        refund_state: RefundState::NotRefunded,
    })?;

    // 3. Consume every cart, the anchor included.
    let mut consumed = Vec::with_capacity(req.cart_ids.len());
    for &cart_id in &req.cart_ids {
        let mut cart = uow
            .find_cart(cart_id)?
            .ok_or(DomainError::NotExistCart(cart_id))?;
        cart.consume(order.id);
        consumed.push(ConsumedLine {
            product: cart.product.clone(),
            quantity: cart.product_count,
        });
        uow.save_cart(cart)?;
    }

    // 4. Adjust inventory. Carts sharing a product update the same value.
    let mut products: HashMap<i64, Product> = HashMap::new();
    for line in consumed {
        let product = products
            .entry(line.product.id)
            .or_insert(line.product);
        product.record_purchase(line.quantity)?;
        uow.save_product(product.clone())?;
    }

    // 5. Settle savings.
    user.settle_savings(req.use_savings, req.amount)?;
    uow.save_user(user)?;

    Ok(order.id)
}
