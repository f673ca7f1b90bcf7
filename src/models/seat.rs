use serde::{Deserialize, Serialize};

// Тип места в зале (как в схеме зала на сервере)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    #[default]
    Regular,
    Vip,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    #[serde(default)]
    pub row: Option<String>,
    #[serde(default)]
    pub number: Option<i32>,
    #[serde(default)]
    pub kind: SeatKind,
    // Занятость фиксируется при рендере страницы и больше не меняется
    #[serde(default)]
    pub occupied: bool,
    #[serde(default)]
    pub selected: bool,
}

impl Seat {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            row: None,
            number: None,
            kind: SeatKind::Regular,
            occupied: false,
            selected: false,
        }
    }

    pub fn occupied(id: i64) -> Self {
        Self { occupied: true, ..Self::new(id) }
    }

    // Подпись вида "A7", если сервер прислал ряд и номер
    pub fn label(&self) -> String {
        match (&self.row, self.number) {
            (Some(row), Some(number)) => format!("{}{}", row, number),
            _ => format!("#{}", self.id),
        }
    }
}
