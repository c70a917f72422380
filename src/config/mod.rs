use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub payment: PaymentConfig,
    pub seat_booking: SeatBookingConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки платежного шлюза. Без gateway_url платежи только логируются.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    pub gateway_url: Option<String>,
    pub merchant_id: String,
    pub merchant_password: String,
    pub timeout_seconds: u64,
}

// Настройки сервиса бронирования мест. Без url бронирование только логируется.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatBookingConfig {
    pub url: Option<String>,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Собирает конфигурацию из произвольного источника переменных.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let timeout_seconds = parse(&lookup, "COLLABORATOR_TIMEOUT_SECONDS", 30)?;

        Ok(Config {
            app: AppConfig {
                host: string("HOST", "0.0.0.0"),
                port: parse(&lookup, "PORT", 8000)?,
                environment: string("ENVIRONMENT", "development"),
                rust_log: string("RUST_LOG", "cinema_tickets=debug,tower_http=debug"),
            },
            payment: PaymentConfig {
                gateway_url: optional("PAYMENT_GATEWAY_URL"),
                merchant_id: string("MERCHANT_ID", "cinema-tickets"),
                merchant_password: string("MERCHANT_PASSWORD", ""),
                timeout_seconds,
            },
            seat_booking: SeatBookingConfig {
                url: optional("SEAT_BOOKING_URL"),
                timeout_seconds,
            },
        })
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
