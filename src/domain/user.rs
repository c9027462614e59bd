use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalUser {
    pub id: i64,
    pub name: String,
    /// Loyalty point balance.
    pub savings: i32,
}

/// Points earned by an order: 3% of the amount, truncated toward zero.
pub fn earned_savings(amount: i32) -> i32 {
    // |amount * 3 / 100| <= |amount|, so the result always fits back in i32.
    (i64::from(amount) * 3 / 100) as i32
}

impl NormalUser {
    /// Spends `redeemed` points and credits the points earned by `amount`.
    ///
    /// A result outside the `i32` range is rejected and the balance is left
    /// unchanged.
    pub fn settle_savings(&mut self, redeemed: i32, amount: i32) -> Result<(), DomainError> {
        if self.savings < redeemed {
            return Err(DomainError::InsufficientSavings {
                available: self.savings,
                requested: redeemed,
            });
        }
        self.savings = self
            .savings
            .checked_sub(redeemed)
            .and_then(|left| left.checked_add(earned_savings(amount)))
            .ok_or_else(|| {
                DomainError::InvalidInput(format!(
                    "savings of user {} would leave the supported range",
                    self.id
                ))
            })?;
        Ok(())
    }
}
