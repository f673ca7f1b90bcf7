pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod selection;
pub mod likes;
pub mod commands;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use likes::{LikeButton, LikeClient};
use page::SeatPage;
use selection::{SeatEvent, SeatSelectionTracker, Toggle};

// Состояние одной открытой страницы: выбор мест + кнопки лайков
pub struct AppState {
    pub config: config::Config,
    pub page: SeatPage,
    pub tracker: SeatSelectionTracker,
    pub likes: LikeClient,
    pub like_buttons: HashMap<i64, Arc<Mutex<LikeButton>>>,
}

impl AppState {
    pub async fn new(config: config::Config) -> error::Result<Self> {
        let page = SeatPage::load(&config.page.seat_page_path).await?;
        Self::with_page(config, page)
    }

    pub fn with_page(config: config::Config, page: SeatPage) -> error::Result<Self> {
        let tracker = SeatSelectionTracker::attach(&page);
        let likes = LikeClient::from_config(&config.site)?;

        Ok(Self {
            config,
            page,
            tracker,
            likes,
            like_buttons: HashMap::new(),
        })
    }

    pub fn click_seat(&mut self, seat_id: i64) -> Toggle {
        self.tracker.handle(&mut self.page, SeatEvent::Clicked(seat_id))
    }

    pub fn like_button(&mut self, review_id: i64) -> Arc<Mutex<LikeButton>> {
        self.like_buttons
            .entry(review_id)
            .or_insert_with(|| Arc::new(Mutex::new(LikeButton::new(review_id, 0))))
            .clone()
    }

    // Fire-and-forget: результат применится к кнопке, когда придёт ответ
    pub fn click_like(&mut self, review_id: i64) -> JoinHandle<()> {
        let button = self.like_button(review_id);
        self.likes.spawn_click(button)
    }

    pub fn summary(&self) -> String {
        format!(
            "seats={} total={} seat_ids={} submit={}",
            self.page.count_text().unwrap_or("-"),
            self.page.price_text().unwrap_or("-"),
            self.page.payload().unwrap_or("-"),
            match self.page.submit_enabled() {
                Some(true) => "enabled",
                Some(false) => "disabled",
                None => "-",
            }
        )
    }
}
