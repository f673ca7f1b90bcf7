//! Лайки рецензий.
//!
//! Клик по кнопке отправляет `POST /review/{id}/like`; сервер сам решает,
//! ставится лайк или снимается, и возвращает `{status, likes}`. Ответ
//! обновляет счётчик и маркер `liked` на кнопке. Ошибки только логируются,
//! повторов нет.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::config::SiteConfig;
use crate::error::{ClientError, Result};
use crate::models::{LikeResponse, LikeStatus};

// X-CSRFToken, имена заголовков в http хранятся в нижнем регистре
const CSRF_HEADER: &str = "x-csrftoken";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeButton {
    pub review_id: i64,
    pub likes: i64,
    pub liked: bool,
}

impl LikeButton {
    pub fn new(review_id: i64, likes: i64) -> Self {
        Self { review_id, likes, liked: false }
    }

    pub fn apply(&mut self, resp: &LikeResponse) {
        self.likes = resp.likes;
        self.liked = resp.status == LikeStatus::Liked;
    }
}

#[derive(Clone)]
pub struct LikeClient {
    base_url: String,
    csrf_token: Option<String>,
    http_client: reqwest::Client,
}

impl LikeClient {
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .cookie_store(true)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            csrf_token: config.csrf_token.clone(),
            http_client,
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        if let Some(token) = &self.csrf_token {
            match HeaderValue::from_str(token) {
                Ok(value) => {
                    headers.insert(CSRF_HEADER, value);
                }
                Err(e) => error!("CSRF token is not a valid header value: {:?}", e),
            }
        }
        headers
    }

    pub async fn like(&self, review_id: i64) -> Result<LikeResponse> {
        let url = format!("{}/review/{}/like", self.base_url, review_id);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .headers(self.headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ClientError::Decode)
    }

    /// Обработчик клика: при любой ошибке кнопка остаётся как была.
    pub async fn click(&self, button: &mut LikeButton) {
        match self.like(button.review_id).await {
            Ok(resp) => {
                debug!(
                    "Review {} {:?}, {} likes",
                    button.review_id, resp.status, resp.likes
                );
                button.apply(&resp);
            }
            Err(e) => error!("Like request for review {} failed: {}", button.review_id, e),
        }
    }

    /// Запускает клик в фоне и не ждёт его. Параллельные клики никак не упорядочены.
    pub fn spawn_click(&self, button: Arc<Mutex<LikeButton>>) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move {
            let review_id = button.lock().await.review_id;
            let result = client.like(review_id).await;

            match result {
                Ok(resp) => button.lock().await.apply(&resp),
                Err(e) => error!("Like request for review {} failed: {}", review_id, e),
            }
        })
    }
}
