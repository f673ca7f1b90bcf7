//! Типизированная модель страницы выбора мест.
//!
//! Сервер рендерит страницу сеанса: сетку мест, цену билета и несколько
//! элементов, в которые трекер выводит состояние (счётчик, сумма, скрытое
//! поле формы и кнопка отправки). Любой из этих элементов может
//! отсутствовать в шаблоне, поэтому все они `Option`.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{ClientError, Result};
use crate::models::Seat;

pub const OCCUPIED_CLASS: &str = "occupied";
pub const SELECTED_CLASS: &str = "selected";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextNode {
    #[serde(default)]
    pub text: String,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HiddenInput {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitButton {
    // Шаблон рендерит кнопку выключенной, пока ничего не выбрано
    #[serde(default = "default_disabled")]
    pub disabled: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self { disabled: true }
    }
}

fn default_disabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Seat")]
pub struct SeatElement {
    pub seat: Seat,
    pub classes: BTreeSet<String>,
}

impl From<Seat> for SeatElement {
    fn from(mut seat: Seat) -> Self {
        // Выбор всегда начинается пустым, отметка "selected" из данных страницы не переносится
        seat.selected = false;
        let mut classes = BTreeSet::new();
        classes.insert("seat".to_string());
        if seat.occupied {
            classes.insert(OCCUPIED_CLASS.to_string());
        }
        Self { seat, classes }
    }
}

impl SeatElement {
    pub fn id(&self) -> i64 {
        self.seat.id
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_occupied(&self) -> bool {
        self.has_class(OCCUPIED_CLASS)
    }

    pub fn is_selected(&self) -> bool {
        self.has_class(SELECTED_CLASS)
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.seat.selected = selected;
        if selected {
            self.classes.insert(SELECTED_CLASS.to_string());
        } else {
            self.classes.remove(SELECTED_CLASS);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeatPage {
    #[serde(default)]
    pub seats: Vec<SeatElement>,
    #[serde(default)]
    pub ticket_price: Option<String>,
    #[serde(default)]
    pub selected_seats: Option<TextNode>,
    #[serde(default)]
    pub total_price: Option<TextNode>,
    #[serde(default)]
    pub seat_ids: Option<HiddenInput>,
    #[serde(default)]
    pub submit_btn: Option<SubmitButton>,
}

impl SeatPage {
    /// Страница со всеми элементами вывода на месте.
    pub fn with_seats(seats: impl IntoIterator<Item = Seat>, ticket_price: Option<&str>) -> Self {
        Self {
            seats: seats.into_iter().map(SeatElement::from).collect(),
            ticket_price: ticket_price.map(str::to_string),
            selected_seats: Some(TextNode::new("0")),
            total_price: Some(TextNode::new("0.00")),
            seat_ids: Some(HiddenInput::default()),
            submit_btn: Some(SubmitButton::default()),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(ClientError::PageData)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_json(&raw)
    }

    pub fn seat(&self, seat_id: i64) -> Option<&SeatElement> {
        self.seats.iter().find(|s| s.id() == seat_id)
    }

    pub(crate) fn seat_mut(&mut self, seat_id: i64) -> Option<&mut SeatElement> {
        self.seats.iter_mut().find(|s| s.id() == seat_id)
    }

    pub fn count_text(&self) -> Option<&str> {
        self.selected_seats.as_ref().map(|n| n.text.as_str())
    }

    pub fn price_text(&self) -> Option<&str> {
        self.total_price.as_ref().map(|n| n.text.as_str())
    }

    pub fn payload(&self) -> Option<&str> {
        self.seat_ids.as_ref().map(|i| i.value.as_str())
    }

    pub fn submit_enabled(&self) -> Option<bool> {
        self.submit_btn.as_ref().map(|b| !b.disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_seats_carry_marker_class() {
        let page = SeatPage::with_seats([Seat::new(1), Seat::occupied(2)], Some("10"));
        assert!(!page.seat(1).unwrap().is_occupied());
        assert!(page.seat(2).unwrap().is_occupied());
    }

    #[test]
    fn parses_rendered_page_with_missing_sinks() {
        let page = SeatPage::from_json(
            r#"{
                "seats": [
                    {"id": 3, "row": "A", "number": 3},
                    {"id": 4, "row": "A", "number": 4, "occupied": true, "kind": "vip"}
                ],
                "ticket_price": "45.00",
                "selected_seats": {"text": "0"}
            }"#,
        )
        .unwrap();

        assert_eq!(page.seats.len(), 2);
        assert_eq!(page.seat(3).unwrap().seat.label(), "A3");
        assert!(page.seat(4).unwrap().is_occupied());
        assert_eq!(page.count_text(), Some("0"));
        assert!(page.total_price.is_none());
        assert!(page.submit_enabled().is_none());
    }

    #[test]
    fn page_data_cannot_arrive_preselected() {
        let page = SeatPage::from_json(r#"{"seats": [{"id": 1, "selected": true}]}"#).unwrap();
        let seat = page.seat(1).unwrap();
        assert!(!seat.is_selected());
        assert!(!seat.seat.selected);
    }

    #[test]
    fn malformed_page_is_reported() {
        let err = SeatPage::from_json("{\"seats\": 5}").unwrap_err();
        assert!(matches!(err, ClientError::PageData(_)));
    }
}
