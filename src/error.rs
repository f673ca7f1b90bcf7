use thiserror::Error;

/// Ошибки клиентской части. Отсутствующие элементы страницы сюда не входят:
/// это `Option` в [`crate::page::SeatPage`], и запись в них просто пропускается.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status from server: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to read page data: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid page data: {0}")]
    PageData(#[source] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
