pub mod payment;
pub mod seat_booking;
pub mod ticket;

use serde::Serialize;
use tokio::runtime::Handle;
use tracing::{error, warn};

use crate::error::CollaboratorError;

/// Синхронно выполняет POST-запрос к внешнему сервису на переданном рантайме.
///
/// Коллабораторы синхронные, поэтому вызывать это нужно из потока
/// блокирующего пула (`spawn_blocking`), а не из async-контекста.
pub(crate) fn post_json<T: Serialize>(
    runtime: &Handle,
    http_client: &reqwest::Client,
    url: &str,
    body: &T,
) -> Result<(), CollaboratorError> {
    runtime.block_on(send_json(http_client, url, body))
}

async fn send_json<T: Serialize>(
    http_client: &reqwest::Client,
    url: &str,
    body: &T,
) -> Result<(), CollaboratorError> {
    let response = http_client.post(url).json(body).send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let message = rejection_message(url, response.text().await);
    error!("Collaborator {} answered {}: {}", url, status, message);
    Err(CollaboratorError::Rejected {
        status: status.as_u16(),
        message,
    })
}

/// Текст отказа коллаборатора. Если тело ответа не прочиталось, это попадает в лог и в сообщение.
fn rejection_message(url: &str, body: Result<String, reqwest::Error>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to read response body from {}: {}", url, e);
            format!("unreadable response body: {}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_keeps_the_body() {
        let message = rejection_message("http://seats.local", Ok("no seats left".to_string()));
        assert_eq!(message, "no seats left");
    }

    #[tokio::test]
    async fn rejection_message_reports_unreadable_body() {
        // Относительный URL: reqwest отказывает ещё до отправки запроса.
        let err = reqwest::Client::new().get("not-a-url").send().await.unwrap_err();

        let message = rejection_message("http://seats.local", Err(err));

        assert!(message.starts_with("unreadable response body: "));
    }
}
