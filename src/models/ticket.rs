use serde::{Deserialize, Serialize};

/// Категория билета. Цена фиксирована и задаётся в минимальных единицах валюты.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    pub const fn unit_price(self) -> i64 {
        match self {
            TicketCategory::Adult => 20,
            TicketCategory::Child => 10,
            TicketCategory::Infant => 0,
        }
    }

    /// Младенцы сидят на коленях у взрослого и отдельного места не занимают.
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }
}

/// Неизменяемая заявка: категория и количество билетов.
/// Количество не проверяется на входе и может быть нулевым или отрицательным.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    #[serde(rename = "type")]
    category: TicketCategory,
    quantity: i32,
}

impl TicketRequest {
    pub const fn new(category: TicketCategory, quantity: i32) -> Self {
        Self { category, quantity }
    }

    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    pub const fn quantity(&self) -> i32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_are_ordered_and_infants_are_free() {
        assert!(TicketCategory::Adult.unit_price() > TicketCategory::Child.unit_price());
        assert!(TicketCategory::Child.unit_price() > TicketCategory::Infant.unit_price());
        assert_eq!(TicketCategory::Infant.unit_price(), 0);
    }

    #[test]
    fn only_infants_skip_a_seat() {
        assert!(TicketCategory::Adult.occupies_seat());
        assert!(TicketCategory::Child.occupies_seat());
        assert!(!TicketCategory::Infant.occupies_seat());
    }

    #[test]
    fn request_deserializes_from_api_shape() {
        let request: TicketRequest =
            serde_json::from_str(r#"{"type":"CHILD","quantity":-2}"#).unwrap();

        assert_eq!(request, TicketRequest::new(TicketCategory::Child, -2));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = serde_json::from_str::<TicketRequest>(r#"{"type":"SENIOR","quantity":1}"#);
        assert!(result.is_err());
    }
}
