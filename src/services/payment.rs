//! payment.rs
//!
//! Платёжный коллаборатор: списывает стоимость покупки с аккаунта.
//!
//! Реализации:
//! 1.  **PaymentGatewayClient**: клиент внешнего платёжного шлюза. Каждый запрос
//!     подписывается SHA-256 токеном из суммы, аккаунта и секрета продавца.
//! 2.  **LoggingPaymentService**: заглушка для разработки, только пишет в лог.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

use crate::{
    config::PaymentConfig,
    error::CollaboratorError,
    models::AccountId,
    services::post_json,
};

/// Внешний сервис оплаты. Вызывается ровно один раз на успешную покупку.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, amount: i64) -> Result<(), CollaboratorError>;
}

/// Запрос на списание средств.
#[derive(Debug, Serialize)]
struct PaymentRequest {
    #[serde(rename = "merchantId")]
    merchant_id: String,
    #[serde(rename = "accountId")]
    account_id: i64,
    amount: i64,
    token: String,
}

/// Клиент для взаимодействия с API платёжного шлюза.
#[derive(Clone)]
pub struct PaymentGatewayClient {
    /// Идентификатор продавца.
    merchant_id: String,
    /// Секретный пароль для генерации токенов.
    password: String,
    /// Базовый URL платёжного шлюза.
    base_url: String,
    /// Асинхронный HTTP-клиент.
    http_client: reqwest::Client,
    /// Рантайм, на котором исполняются запросы.
    runtime: Handle,
}

impl PaymentGatewayClient {
    /// Создает клиент на основе настроек приложения.
    pub fn from_config(
        config: &PaymentConfig,
        base_url: &str,
        runtime: Handle,
    ) -> Result<Self, CollaboratorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            merchant_id: config.merchant_id.clone(),
            password: config.merchant_password.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            runtime,
        })
    }

    /// Генерирует токен подписи для запроса на списание.
    fn generate_token(&self, account_id: AccountId, amount: i64) -> String {
        let token_string = format!(
            "{}{}{}{}",
            account_id, amount, self.password, self.merchant_id
        );
        let mut hasher = Sha256::new();
        hasher.update(token_string.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl TicketPaymentService for PaymentGatewayClient {
    fn make_payment(&self, account_id: AccountId, amount: i64) -> Result<(), CollaboratorError> {
        let request = PaymentRequest {
            merchant_id: self.merchant_id.clone(),
            account_id: account_id.get(),
            amount,
            token: self.generate_token(account_id, amount),
        };

        info!("Charging account {}: amount={}", account_id, amount);

        post_json(
            &self.runtime,
            &self.http_client,
            &format!("{}/api/v1/payments", self.base_url),
            &request,
        )
    }
}

/// Заглушка для локального запуска без платёжного шлюза.
#[derive(Debug, Clone, Default)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: i64) -> Result<(), CollaboratorError> {
        info!(account_id = %account_id, amount, "Payment recorded (no gateway configured)");
        Ok(())
    }
}
