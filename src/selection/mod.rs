//! Выбор мест на странице сеанса.
//!
//! [`SelectionState`] хранит выбранные места, [`PriceQuote`] считается из него
//! на лету, а [`SeatSelectionTracker`] связывает состояние со страницей.

pub mod tracker;

pub use tracker::{SeatEvent, SeatSelectionTracker, Toggle};

use std::fmt;

/// Выбранные места в порядке кликов. Повторный клик снимает выбор, дублей нет.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    seat_ids: Vec<i64>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Переключает место. Возвращает `true`, если место теперь выбрано.
    pub fn toggle(&mut self, seat_id: i64) -> bool {
        if let Some(pos) = self.seat_ids.iter().position(|&id| id == seat_id) {
            self.seat_ids.remove(pos);
            false
        } else {
            self.seat_ids.push(seat_id);
            true
        }
    }

    pub fn contains(&self, seat_id: i64) -> bool {
        self.seat_ids.contains(&seat_id)
    }

    pub fn len(&self) -> usize {
        self.seat_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seat_ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.seat_ids.iter().copied()
    }

    /// Значение скрытого поля формы: id через запятую, пусто если ничего не выбрано.
    pub fn payload(&self) -> String {
        self.seat_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub count: usize,
    pub unit_price: f64,
}

impl PriceQuote {
    pub fn total(&self) -> f64 {
        self.count as f64 * self.unit_price
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", round_cents(self.total()))
    }
}

// Ровно посередине между центами оказываются только суммы вида нечётное/8
// (0.125, 25.125, ...). `{:.2}` округляет их к чётному, а на странице
// ожидается округление вверх.
fn round_cents(total: f64) -> f64 {
    let eighths = total * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        (total * 100.0).ceil() / 100.0
    } else {
        total
    }
}

/// Цена билета из текста страницы. Берётся самый длинный числовой префикс
/// (`"12.50 ¥"` -> 12.5). Отсутствующий, нечисловой, отрицательный или
/// бесконечный текст даёт 0.
pub fn parse_unit_price(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };

    match numeric_prefix(text.trim()).parse::<f64>() {
        // "-0" тоже сюда не попадает, иначе сумма выводится как -0.00
        Ok(price) if price.is_finite() && price > 0.0 => price,
        _ => 0.0,
    }
}

fn numeric_prefix(s: &str) -> &str {
    let b = s.as_bytes();
    let is_digit = |i: usize| i < b.len() && b[i].is_ascii_digit();

    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while is_digit(i) {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        let frac_start = j;
        while is_digit(j) {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return "";
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while is_digit(j) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    &s[..i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut state = SelectionState::new();
        assert!(state.toggle(3));
        assert!(state.toggle(7));
        assert!(!state.toggle(3));
        assert_eq!(state.payload(), "7");
        assert!(state.toggle(3));
        assert_eq!(state.payload(), "7,3");
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn empty_selection_has_empty_payload() {
        assert_eq!(SelectionState::new().payload(), "");
    }

    #[test]
    fn quote_is_formatted_with_two_decimals() {
        let quote = PriceQuote { count: 2, unit_price: 12.5 };
        assert_eq!(quote.to_string(), "25.00");
        assert_eq!(PriceQuote { count: 0, unit_price: 12.5 }.to_string(), "0.00");
        assert_eq!(PriceQuote { count: 3, unit_price: 33.333 }.to_string(), "100.00");
    }

    #[test]
    fn unit_price_parsing() {
        assert_eq!(parse_unit_price(Some("12.5")), 12.5);
        assert_eq!(parse_unit_price(Some("  45.00\n")), 45.0);
        assert_eq!(parse_unit_price(Some("12.50 ¥")), 12.5);
        assert_eq!(parse_unit_price(Some(".5")), 0.5);
        assert_eq!(parse_unit_price(Some("1e2")), 100.0);
        assert_eq!(parse_unit_price(Some("7e")), 7.0);
    }

    #[test]
    fn unit_price_falls_back_to_zero() {
        assert_eq!(parse_unit_price(None), 0.0);
        assert_eq!(parse_unit_price(Some("")), 0.0);
        assert_eq!(parse_unit_price(Some("free")), 0.0);
        assert_eq!(parse_unit_price(Some(".")), 0.0);
        assert_eq!(parse_unit_price(Some("-10")), 0.0);
        assert_eq!(parse_unit_price(Some("1e400")), 0.0);
        assert!(parse_unit_price(Some("-0")).is_sign_positive());
        assert!(parse_unit_price(Some("-0.00")).is_sign_positive());
    }

    #[test]
    fn negative_zero_price_displays_as_zero() {
        assert_eq!(PriceQuote { count: 1, unit_price: parse_unit_price(Some("-0")) }.to_string(), "0.00");
    }

    #[test]
    fn exact_half_cent_rounds_up() {
        assert_eq!(PriceQuote { count: 1, unit_price: 0.125 }.to_string(), "0.13");
        assert_eq!(PriceQuote { count: 1, unit_price: 0.625 }.to_string(), "0.63");
        assert_eq!(PriceQuote { count: 3, unit_price: 8.375 }.to_string(), "25.13");
        assert_eq!(PriceQuote { count: 2, unit_price: 0.125 }.to_string(), "0.25");
        // 1.005 в двоичном виде чуть меньше половины цента
        assert_eq!(PriceQuote { count: 1, unit_price: 1.005 }.to_string(), "1.00");
    }
}
