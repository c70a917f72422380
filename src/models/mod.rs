pub mod ticket;
pub mod purchase;

pub use ticket::{TicketCategory, TicketRequest};
pub use purchase::{AccountId, AggregatedRequest, PurchaseOutcome};
