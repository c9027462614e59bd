use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Cumulative units sold.
    pub purchase_count: i32,
    /// Remaining promotional purchase cap.
    pub limit_count: i32,
    /// Stock on hand.
    pub total_count: i32,
}

impl Product {
    /// Applies the inventory effect of selling `quantity` units.
    ///
    /// There is no floor: `limit_count` and `total_count` may go negative.
    /// A counter leaving the `i32` range is an error and nothing changes.
    pub fn record_purchase(&mut self, quantity: i32) -> Result<(), DomainError> {
        let out_of_range = || {
            DomainError::InvalidInput(format!(
                "inventory counters of product {} would leave the supported range",
                self.id
            ))
        };
        let purchase_count = self
            .purchase_count
            .checked_add(quantity)
            .ok_or_else(out_of_range)?;
        let limit_count = self
            .limit_count
            .checked_sub(quantity)
            .ok_or_else(out_of_range)?;
        let total_count = self
            .total_count
            .checked_sub(quantity)
            .ok_or_else(out_of_range)?;

        self.purchase_count = purchase_count;
        self.limit_count = limit_count;
        self.total_count = total_count;
        Ok(())
    }
}
