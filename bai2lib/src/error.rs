//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Bai2Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сканера полей.
    #[error("scan error: {0}")]
    Scan(&'static str),

    /// Поле не удалось прочитать по грамматике записи.
    #[error("{record}: unable to parse {field}")]
    Field {
        record: &'static str,
        field: &'static str,
    },

    /// Значение поля вне допустимого перечисления.
    #[error("{record}: invalid {field}")]
    Invalid {
        record: &'static str,
        field: &'static str,
    },

    /// Ошибка разбора записи с привязкой к смещению во входных данных.
    #[error("parse error at offset {offset}: {source}")]
    Record {
        offset: usize,
        source: Box<Bai2Error>,
    },

    /// Нарушение порядка или вложенности записей.
    #[error("structural error at offset {offset}: {message}")]
    Structure { offset: usize, message: String },

    /// Расхождение контрольного итога или счётчика записей.
    #[error("{scope}: {what} mismatch, reported {reported}, computed {computed}")]
    Aggregate {
        scope: String,
        what: &'static str,
        reported: String,
        computed: String,
    },
}

pub type Result<T> = std::result::Result<T, Bai2Error>;
