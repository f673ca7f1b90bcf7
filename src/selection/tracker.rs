use std::collections::BTreeSet;
use tracing::debug;

use super::{parse_unit_price, PriceQuote, SelectionState};
use crate::page::SeatPage;

/// Событие страницы выбора мест.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatEvent {
    Clicked(i64),
}

/// Результат клика по месту.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Released,
    // Место занято или отсутствует на странице: обработчика на нём нет
    Ignored,
}

/// Состояние выбора мест одной страницы сеанса.
///
/// Кликабельные места фиксируются в [`attach`](Self::attach): занятые места
/// исключаются навсегда, повторной проверки занятости нет. Цена билета тоже
/// читается один раз. После каждого переключения [`recompute`](Self::recompute)
/// переписывает счётчик, сумму, скрытое поле и кнопку отправки.
#[derive(Debug, Clone)]
pub struct SeatSelectionTracker {
    clickable: BTreeSet<i64>,
    state: SelectionState,
    unit_price: f64,
}

impl SeatSelectionTracker {
    pub fn attach(page: &SeatPage) -> Self {
        let clickable: BTreeSet<i64> = page
            .seats
            .iter()
            .filter(|s| !s.is_occupied())
            .map(|s| s.id())
            .collect();
        let unit_price = parse_unit_price(page.ticket_price.as_deref());

        debug!(
            "Seat tracker attached: {} clickable of {} seats, unit price {:.2}",
            clickable.len(),
            page.seats.len(),
            unit_price
        );

        Self {
            clickable,
            state: SelectionState::new(),
            unit_price,
        }
    }

    pub fn handle(&mut self, page: &mut SeatPage, event: SeatEvent) -> Toggle {
        match event {
            SeatEvent::Clicked(seat_id) => self.toggle_seat(page, seat_id),
        }
    }

    pub fn toggle_seat(&mut self, page: &mut SeatPage, seat_id: i64) -> Toggle {
        if !self.clickable.contains(&seat_id) {
            debug!("Click on seat {} ignored", seat_id);
            return Toggle::Ignored;
        }

        let selected = self.state.toggle(seat_id);
        if let Some(seat) = page.seat_mut(seat_id) {
            seat.set_selected(selected);
        }
        debug!(
            "Seat {} {}, {} selected",
            seat_id,
            if selected { "selected" } else { "released" },
            self.state.len()
        );

        self.recompute(page);

        if selected {
            Toggle::Selected
        } else {
            Toggle::Released
        }
    }

    /// Проецирует текущий выбор на элементы страницы. Отсутствующие элементы пропускаются.
    pub fn recompute(&self, page: &mut SeatPage) {
        let n = self.state.len();

        if let Some(count) = page.selected_seats.as_mut() {
            count.text = n.to_string();
        }

        if let Some(total) = page.total_price.as_mut() {
            total.text = self.quote().to_string();
        }

        if let Some(submit) = page.submit_btn.as_mut() {
            submit.disabled = n == 0;
        }

        if let Some(input) = page.seat_ids.as_mut() {
            input.value = if n > 0 { self.state.payload() } else { String::new() };
        }
    }

    pub fn count(&self) -> usize {
        self.state.len()
    }

    pub fn payload(&self) -> String {
        self.state.payload()
    }

    pub fn quote(&self) -> PriceQuote {
        PriceQuote {
            count: self.state.len(),
            unit_price: self.unit_price,
        }
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn is_selected(&self, seat_id: i64) -> bool {
        self.state.contains(seat_id)
    }

    pub fn selected(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_clickable(&self, seat_id: i64) -> bool {
        self.clickable.contains(&seat_id)
    }
}
