//! Валидация дерева: перечисления полей и сквозные контрольные агрегаты.
//!
//! Запускается после сборки: перечисления проверяют кодеки записей,
//! агрегаты пересчитываются снизу вверх и сравниваются с заявленными в
//! трейлерах. Счётчики записей сверяются с каноническим физическим
//! раскладом — числом строк, которое даст вывод с лимитом из заголовка.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{Bai2Error, Result};
use crate::model::Bai2File;
use crate::records::{account, detail, file, group};
use crate::write;

impl Bai2File {
    /// Проверяет перечисления и контрольные итоги собранного дерева.
    pub fn validate(&self) -> Result<()> {
        file::validate(self)?;
        for g in &self.groups {
            group::validate(g)?;
            for a in &g.accounts {
                account::validate(a)?;
                for d in &a.details {
                    detail::validate(d)?;
                }
            }
        }
        self.validate_aggregates()
    }

    fn validate_aggregates(&self) -> Result<()> {
        let max_len = self.physical_line_limit();
        let mut file_total = Decimal::ZERO;
        let mut file_records: i64 = 2; // записи 01 и 99

        for (index, g) in self.groups.iter().enumerate() {
            let mut group_total = Decimal::ZERO;

            for a in &g.accounts {
                let total = write::account_total(a);
                if total != a.control_total {
                    return Err(mismatch(
                        format!("account {}", a.number),
                        "control total",
                        a.control_total,
                        total,
                    ));
                }
                let records = write::account_record_count(a, max_len);
                if records != a.number_of_records {
                    return Err(Bai2Error::Aggregate {
                        scope: format!("account {}", a.number),
                        what: "record count",
                        reported: a.number_of_records.to_string(),
                        computed: records.to_string(),
                    });
                }
                group_total += total;
            }

            if group_total != g.control_total {
                return Err(mismatch(
                    format!("group {}", index + 1),
                    "control total",
                    g.control_total,
                    group_total,
                ));
            }
            if g.number_of_accounts != g.accounts.len() as i64 {
                return Err(Bai2Error::Aggregate {
                    scope: format!("group {}", index + 1),
                    what: "account count",
                    reported: g.number_of_accounts.to_string(),
                    computed: g.accounts.len().to_string(),
                });
            }
            let records = write::group_record_count(g, max_len);
            if records != g.number_of_records {
                return Err(Bai2Error::Aggregate {
                    scope: format!("group {}", index + 1),
                    what: "record count",
                    reported: g.number_of_records.to_string(),
                    computed: records.to_string(),
                });
            }
            file_total += group_total;
            file_records += records;
        }

        if file_total != self.control_total {
            return Err(mismatch(
                "file".to_string(),
                "control total",
                self.control_total,
                file_total,
            ));
        }
        if self.number_of_groups != self.groups.len() as i64 {
            return Err(Bai2Error::Aggregate {
                scope: "file".to_string(),
                what: "group count",
                reported: self.number_of_groups.to_string(),
                computed: self.groups.len().to_string(),
            });
        }
        if file_records != self.number_of_records {
            return Err(Bai2Error::Aggregate {
                scope: "file".to_string(),
                what: "record count",
                reported: self.number_of_records.to_string(),
                computed: file_records.to_string(),
            });
        }
        Ok(())
    }
}

fn mismatch(scope: String, what: &'static str, reported: Decimal, computed: Decimal) -> Bai2Error {
    Bai2Error::Aggregate {
        scope,
        what,
        reported: reported.to_string(),
        computed: computed.to_string(),
    }
}

/// Дата формата ГГММДД.
pub(crate) fn valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%y%m%d").is_ok()
}

/// Время формата ЧЧММ; встречаются условные 2400 и 9999 «конец дня»,
/// поэтому проверяется только форма.
pub(crate) fn valid_time(value: &str) -> bool {
    Regex::new(r"^\d{4}$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Код валюты: три заглавные латинские буквы, без сверки со списком ISO.
pub(crate) fn valid_currency(value: &str) -> bool {
    Regex::new(r"^[A-Z]{3}$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

pub(crate) fn valid_amount(value: &str) -> bool {
    value.parse::<Decimal>().is_ok()
}

/// Коды статусов и итогов записи 03: 001-099 статусы, 100-399 кредитовые
/// итоги, 400-699 дебетовые, 700-799 ссудные.
pub(crate) fn valid_summary_code(code: &str) -> bool {
    matches!(numeric_code(code), Some(1..=799))
}

/// Коды транзакций записи 16: 100-399 кредитовые, 400-699 дебетовые,
/// 890 и 900-999 неденежные.
pub(crate) fn valid_detail_code(code: &str) -> bool {
    matches!(numeric_code(code), Some(100..=699 | 890 | 900..=999))
}

fn numeric_code(code: &str) -> Option<u32> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    code.parse().ok()
}
