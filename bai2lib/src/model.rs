//! Доменная модель дерева BAI2: файл → группы → счета → транзакции.
//!
//! Суммы статусов и транзакций хранятся исходными токенами (знак и ведущие
//! нули сохраняются при выводе), контрольные итоги трейлеров — числом:
//! эмиттер выводит их заново по содержимому дерева.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bai2File {
    pub sender: String,
    pub receiver: String,
    /// Дата создания файла (ГГММДД).
    pub created_date: String,
    /// Время создания файла (ЧЧММ).
    pub created_time: String,
    /// Номер файла; хранится токеном, ведущие нули значимы.
    pub file_id: String,
    pub physical_record_length: Option<i64>,
    pub block_size: Option<i64>,
    pub version_number: i64,
    pub groups: Vec<Group>,
    /// Контрольный итог из трейлера 99.
    pub control_total: Decimal,
    pub number_of_groups: i64,
    pub number_of_records: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    /// Конечный получатель.
    pub receiver: String,
    pub originator: String,
    /// Статус группы: 1..4.
    pub status: String,
    pub as_of_date: String,
    pub as_of_time: String,
    /// Валюта группы; пустое поле — валюта по умолчанию из файла.
    pub currency: String,
    pub as_of_date_modifier: String,
    pub accounts: Vec<Account>,
    /// Контрольный итог из трейлера 98.
    pub control_total: Decimal,
    pub number_of_accounts: i64,
    pub number_of_records: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub number: String,
    pub currency: String,
    pub summaries: Vec<Summary>,
    pub details: Vec<Detail>,
    /// Контрольный итог из трейлера 49.
    pub control_total: Decimal,
    pub number_of_records: i64,
}

/// Элемент статуса или итога в записи 03.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub type_code: String,
    /// Сумма токеном: знак и ведущие нули сохраняются.
    pub amount: String,
    pub item_count: Option<i64>,
    pub funds_type: FundsType,
}

/// Транзакция (запись 16).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Detail {
    pub type_code: String,
    pub amount: String,
    pub funds_type: FundsType,
    pub bank_reference: String,
    pub customer_reference: String,
    pub text: String,
}

/// Доступность средств — вариант по однобуквенному коду.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FundsType {
    /// Пустое поле: доступность не указана.
    Unspecified,
    /// `Z` — распределение неизвестно.
    Unknown,
    /// `0` — доступно в тот же день.
    SameDay,
    /// `1` — доступно на следующий день.
    OneDay,
    /// `2` — доступно через два дня и позже.
    TwoOrMoreDays,
    /// `V` — дата (и время) валютирования.
    ValueDated { date: String, time: String },
    /// `S` — доступность тремя частями.
    Split {
        immediate: String,
        one_day: String,
        more_than_one_day: String,
    },
    /// `D` — распределение по дням.
    Distributed(Vec<Distribution>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Distribution {
    pub day: i64,
    pub amount: String,
}
