use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::PurchaseRejection;
use crate::models::ticket::{TicketCategory, TicketRequest};

/// Проверенный идентификатор аккаунта, всегда строго положительный.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccountId(i64);

impl AccountId {
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseRejection;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(AccountId(value))
        } else {
            Err(PurchaseRejection::InvalidAccount(value))
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Заявки, сложенные по категориям. Отрицательные количества складываются как есть:
/// их должны отсечь последующие проверки, а не обнуление.
/// Вся арифметика проверяемая: переполнение - это отказ, а не молчаливый перенос.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedRequest {
    quantities: BTreeMap<TicketCategory, i32>,
}

impl AggregatedRequest {
    pub fn from_requests(requests: &[TicketRequest]) -> Result<Self, PurchaseRejection> {
        let mut quantities = BTreeMap::new();
        for request in requests {
            let sum = quantities.entry(request.category()).or_insert(0i32);
            *sum = sum
                .checked_add(request.quantity())
                .ok_or(PurchaseRejection::ArithmeticOverflow("ticket quantity"))?;
        }
        Ok(Self { quantities })
    }

    pub fn quantity(&self, category: TicketCategory) -> i64 {
        self.quantities.get(&category).copied().map(i64::from).unwrap_or(0)
    }

    pub fn total_tickets(&self) -> Result<i64, PurchaseRejection> {
        checked_sum("ticket total", self.quantities.values().map(|&q| Some(i64::from(q))))
    }

    /// Σ цена × количество, включая бесплатные места для младенцев.
    pub fn total_cost(&self) -> Result<i64, PurchaseRejection> {
        checked_sum(
            "total cost",
            self.quantities
                .iter()
                .map(|(category, &quantity)| category.unit_price().checked_mul(i64::from(quantity))),
        )
    }

    pub fn total_seats(&self) -> Result<i64, PurchaseRejection> {
        checked_sum(
            "seat total",
            self.quantities
                .iter()
                .filter(|(category, _)| category.occupies_seat())
                .map(|(_, &quantity)| Some(i64::from(quantity))),
        )
    }
}

fn checked_sum<I>(what: &'static str, mut terms: I) -> Result<i64, PurchaseRejection>
where
    I: Iterator<Item = Option<i64>>,
{
    terms
        .try_fold(0i64, |acc, term| acc.checked_add(term?))
        .ok_or(PurchaseRejection::ArithmeticOverflow(what))
}

/// Итог успешной покупки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    pub total_cost: i64,
    pub total_seats: i64,
}
