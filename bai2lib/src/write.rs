//! Канонический вывод дерева BAI2 и переразбивка длинных записей
//! в продолжения 88.
//!
//! Контрольные итоги и счётчики записей в трейлерах выводятся заново по
//! содержимому дерева, поэтому после разбора и вывода файл каноничен,
//! даже если входные трейлеры расходились с данными.

use rust_decimal::Decimal;
use std::io::Write;

use crate::model::{Account, Bai2File, Group};
use crate::parse::Bai2;
use crate::records::{account, detail, file, group};
use crate::traits::WriteFormat;

impl WriteFormat for Bai2 {
    fn write<W: Write>(mut w: W, f: &Bai2File) -> crate::error::Result<()> {
        w.write_all(f.render(f.physical_line_limit()).as_bytes())?;
        Ok(())
    }
}

impl Bai2File {
    /// Лимит длины физической строки, заявленный в заголовке файла.
    pub fn physical_line_limit(&self) -> Option<usize> {
        self.physical_record_length
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n > 0)
    }

    /// Сериализует дерево в документном порядке. При заданном `max_len`
    /// ни одна физическая строка вместе с терминатором не длиннее лимита.
    pub fn render(&self, max_len: Option<usize>) -> String {
        let mut lines = record_lines(&file::render_header(self), max_len);
        let mut file_total = Decimal::ZERO;

        for g in &self.groups {
            let mut group_lines = record_lines(&group::render_header(g), max_len);
            let mut group_total = Decimal::ZERO;

            for a in &g.accounts {
                let mut account_lines = record_lines(&account::render_identifier(a), max_len);
                for d in &a.details {
                    account_lines.extend(record_lines(&detail::render(d), max_len));
                }
                let total = account_total(a);
                let records = account_lines.len() as i64 + 1;
                account_lines.extend(record_lines(
                    &account::render_trailer(total, records),
                    max_len,
                ));
                group_total += total;
                group_lines.extend(account_lines);
            }

            let records = group_lines.len() as i64 + 1;
            group_lines.extend(record_lines(
                &group::render_trailer(group_total, g.accounts.len() as i64, records),
                max_len,
            ));
            file_total += group_total;
            lines.extend(group_lines);
        }

        let records = lines.len() as i64 + 1;
        lines.extend(record_lines(
            &file::render_trailer(file_total, self.groups.len() as i64, records),
            max_len,
        ));
        lines.join("\n")
    }
}

/// Собирает запись из полей; не влезающую в `max_len` режет по границам
/// полей на строку-заголовок и продолжения `88,...,/`.
pub fn record_lines(fields: &[String], max_len: Option<usize>) -> Vec<String> {
    let single = fields.join(",") + "/";
    let max = match max_len {
        Some(max) if single.len() > max => max,
        _ => return vec![single],
    };

    let mut lines = Vec::new();
    let mut line = fields[0].clone();
    let mut fields_in_line = 0;
    for field in &fields[1..] {
        // поле, запятая перед ним и терминатор должны уложиться в лимит;
        // хотя бы одно поле на строку пишем всегда
        if fields_in_line > 0 && line.len() + field.len() + 2 > max {
            line.push('/');
            lines.push(line);
            line = String::from("88");
            fields_in_line = 0;
        }
        line.push(',');
        line.push_str(field);
        fields_in_line += 1;
    }
    line.push('/');
    lines.push(line);
    lines
}

/// Контрольный итог счёта: суммы статусов и транзакций как записаны.
pub(crate) fn account_total(account: &Account) -> Decimal {
    let summaries = account.summaries.iter().map(|s| amount_value(&s.amount));
    let details = account.details.iter().map(|d| amount_value(&d.amount));
    summaries.chain(details).sum()
}

/// Денежный токен числом; нечитаемые значения считаются нулём, их
/// отлавливает валидатор.
pub(crate) fn amount_value(token: &str) -> Decimal {
    token.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Число физических записей счёта в каноническом выводе, включая трейлер.
pub(crate) fn account_record_count(a: &Account, max_len: Option<usize>) -> i64 {
    let mut lines = record_lines(&account::render_identifier(a), max_len).len();
    for d in &a.details {
        lines += record_lines(&detail::render(d), max_len).len();
    }
    lines as i64 + 1
}

/// Число физических записей группы в каноническом выводе, включая трейлер.
pub(crate) fn group_record_count(g: &Group, max_len: Option<usize>) -> i64 {
    let mut records = record_lines(&group::render_header(g), max_len).len() as i64 + 1;
    for a in &g.accounts {
        records += account_record_count(a, max_len);
    }
    records
}
