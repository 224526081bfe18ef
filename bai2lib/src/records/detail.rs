//! Запись 16 — детализация транзакции.

use crate::error::{Bai2Error, Result};
use crate::model::Detail;
use crate::validate;

use super::funds;
use super::reader::RecordReader;

pub(crate) const CODE: &str = "16";

pub fn parse(input: &str, start: usize) -> Result<(Detail, usize)> {
    let mut r = RecordReader::new(input, start, "TransactionDetail")?;
    r.expect_code(CODE)?;

    let type_code = r.field("TypeCode")?;
    let amount = r.optional_field("Amount")?.unwrap_or_default();
    let funds_type = funds::parse(&mut r)?;
    let bank_reference = r.optional_field("BankReferenceNumber")?.unwrap_or_default();
    let customer_reference = r
        .optional_field("CustomerReferenceNumber")?
        .unwrap_or_default();
    let text = r.optional_field("Text")?.unwrap_or_default();
    // Хвост записи и прикладные продолжения вида `KEY: value` не сохраняются.
    r.discard_rest("Text")?;

    let detail = Detail {
        type_code,
        amount,
        funds_type,
        bank_reference,
        customer_reference,
        text,
    };
    Ok((detail, r.consumed()))
}

pub fn render(detail: &Detail) -> Vec<String> {
    let mut fields = vec![
        CODE.to_string(),
        detail.type_code.clone(),
        detail.amount.clone(),
    ];
    funds::render(&detail.funds_type, &mut fields);
    fields.push(detail.bank_reference.clone());
    fields.push(detail.customer_reference.clone());
    fields.push(detail.text.clone());
    fields
}

pub fn validate(detail: &Detail) -> Result<()> {
    if !validate::valid_detail_code(&detail.type_code) {
        return Err(Bai2Error::Invalid {
            record: "TransactionDetail",
            field: "TypeCode",
        });
    }
    if !detail.amount.is_empty() && !validate::valid_amount(&detail.amount) {
        return Err(Bai2Error::Invalid {
            record: "TransactionDetail",
            field: "Amount",
        });
    }
    funds::validate("TransactionDetail", &detail.funds_type)?;
    for (field, value) in [
        ("BankReferenceNumber", &detail.bank_reference),
        ("CustomerReferenceNumber", &detail.customer_reference),
        ("Text", &detail.text),
    ] {
        // запятая и слэш в этих полях недопустимы, это разделители формата
        if value.contains(',') || value.contains('/') {
            return Err(Bai2Error::Invalid {
                record: "TransactionDetail",
                field,
            });
        }
    }
    Ok(())
}
