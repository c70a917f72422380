use thiserror::Error;

/// Единственная ошибка, которую видит вызывающая сторона.
/// Причина отказа намеренно не раскрывается и остаётся только в логах.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid purchase")]
pub struct InvalidPurchase;

/// Внутренняя причина отказа. Используется для диагностики, наружу не выходит.
#[derive(Debug, Error)]
pub enum PurchaseRejection {
    #[error("account id {0} is not a positive integer")]
    InvalidAccount(i64),

    #[error("ticket total {total} is outside 1..={max}")]
    TicketCountOutOfRange { total: i64, max: i64 },

    #[error("children and infants require at least one adult ticket")]
    UnaccompaniedMinor,

    #[error("{infants} infants exceed {adults} adults")]
    InfantsExceedAdults { infants: i64, adults: i64 },

    #[error("{0} overflowed")]
    ArithmeticOverflow(&'static str),

    #[error("payment failed: {0}")]
    Payment(#[source] CollaboratorError),

    #[error("seat reservation failed: {0}")]
    Reservation(#[source] CollaboratorError),
}

/// Сбой внешнего сервиса (платёжного шлюза или бронирования мест).
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Ошибки загрузки конфигурации из окружения.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}
