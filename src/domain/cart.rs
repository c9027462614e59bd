use super::product::Product;

/// A cart line item, loaded together with the product it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub product: Product,
    pub product_count: i32,
    /// `use_yn = 'Y'` in storage. Only active carts are eligible for ordering.
    pub active: bool,
    pub order_id: Option<i64>,
}

impl Cart {
    /// Links the cart to `order_id` and deactivates it.
    pub fn consume(&mut self, order_id: i64) {
        self.order_id = Some(order_id);
        self.active = false;
    }
}

/// Converts the storage flag (`'Y'`/`'N'`) to the domain bool.
pub fn flag_to_bool(flag: &str) -> bool {
    flag == "Y"
}

pub fn bool_to_flag(value: bool) -> &'static str {
    if value {
        "Y"
    } else {
        "N"
    }
}
