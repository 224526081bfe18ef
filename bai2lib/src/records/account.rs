//! Записи 03 (идентификатор счёта со списком статусов) и 49 (трейлер счёта).

use rust_decimal::Decimal;

use crate::error::{Bai2Error, Result};
use crate::model::{Account, Summary};
use crate::validate;

use super::funds;
use super::reader::RecordReader;

pub(crate) const IDENTIFIER_CODE: &str = "03";
pub(crate) const TRAILER_CODE: &str = "49";

pub fn parse_identifier(input: &str, start: usize) -> Result<(Account, usize)> {
    let mut r = RecordReader::new(input, start, "AccountIdentifier")?;
    r.expect_code(IDENTIFIER_CODE)?;

    let number = r.field("AccountNumber")?;
    let currency = r.optional_field("CurrencyCode")?.unwrap_or_default();

    // Элементы статусов и итогов идут до конца записи; запись может
    // оборваться посреди элемента, хвостовые поля тогда пустые.
    let mut summaries = Vec::new();
    while !r.ended() {
        let type_code = r.field("TypeCode")?;
        let amount = r.optional_field("Amount")?.unwrap_or_default();
        let item_count = r.optional_int_field("ItemCount")?;
        let funds_type = funds::parse(&mut r)?;
        summaries.push(Summary {
            type_code,
            amount,
            item_count,
            funds_type,
        });
    }

    let account = Account {
        number,
        currency,
        summaries,
        details: Vec::new(),
        control_total: Decimal::ZERO,
        number_of_records: 0,
    };
    Ok((account, r.consumed()))
}

pub fn parse_trailer(input: &str, start: usize, account: &mut Account) -> Result<usize> {
    let mut r = RecordReader::new(input, start, "AccountTrailer")?;
    r.expect_code(TRAILER_CODE)?;
    account.control_total = r.decimal_field("AccountControlTotal")?;
    account.number_of_records = r.int_field("NumberOfRecords")?;
    r.discard_rest("NumberOfRecords")?;
    Ok(r.consumed())
}

pub fn render_identifier(account: &Account) -> Vec<String> {
    let mut fields = vec![
        IDENTIFIER_CODE.to_string(),
        account.number.clone(),
        account.currency.clone(),
    ];
    for summary in &account.summaries {
        fields.push(summary.type_code.clone());
        fields.push(summary.amount.clone());
        fields.push(
            summary
                .item_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
        );
        funds::render(&summary.funds_type, &mut fields);
    }
    fields
}

pub fn render_trailer(control_total: Decimal, records: i64) -> Vec<String> {
    vec![
        TRAILER_CODE.to_string(),
        control_total.to_string(),
        records.to_string(),
    ]
}

pub fn validate(account: &Account) -> Result<()> {
    if account.number.is_empty() {
        return Err(Bai2Error::Invalid {
            record: "AccountIdentifier",
            field: "AccountNumber",
        });
    }
    if !account.currency.is_empty() && !validate::valid_currency(&account.currency) {
        return Err(Bai2Error::Invalid {
            record: "AccountIdentifier",
            field: "CurrencyCode",
        });
    }
    for summary in &account.summaries {
        // Пустой элемент-заполнитель допустим и пропускается.
        if summary.type_code.is_empty() && summary.amount.is_empty() {
            continue;
        }
        if !validate::valid_summary_code(&summary.type_code) {
            return Err(Bai2Error::Invalid {
                record: "AccountIdentifier",
                field: "TypeCode",
            });
        }
        if !summary.amount.is_empty() && !validate::valid_amount(&summary.amount) {
            return Err(Bai2Error::Invalid {
                record: "AccountIdentifier",
                field: "Amount",
            });
        }
        funds::validate("AccountIdentifier", &summary.funds_type)?;
    }
    Ok(())
}
