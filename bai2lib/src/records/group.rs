//! Записи 02 (заголовок группы) и 98 (трейлер группы).

use rust_decimal::Decimal;

use crate::error::{Bai2Error, Result};
use crate::model::Group;
use crate::validate;

use super::reader::RecordReader;

pub(crate) const HEADER_CODE: &str = "02";
pub(crate) const TRAILER_CODE: &str = "98";

pub fn parse_header(input: &str, start: usize) -> Result<(Group, usize)> {
    let mut r = RecordReader::new(input, start, "GroupHeader")?;
    r.expect_code(HEADER_CODE)?;

    let receiver = r.field("Receiver")?;
    let originator = r.field("Originator")?;
    let status = r.field("GroupStatus")?;
    let as_of_date = r.field("AsOfDate")?;
    let as_of_time = r.optional_field("AsOfTime")?.unwrap_or_default();
    let currency = r.optional_field("CurrencyCode")?.unwrap_or_default();
    let as_of_date_modifier = r.optional_field("AsOfDateModifier")?.unwrap_or_default();
    r.discard_rest("AsOfDateModifier")?;

    let group = Group {
        receiver,
        originator,
        status,
        as_of_date,
        as_of_time,
        currency,
        as_of_date_modifier,
        accounts: Vec::new(),
        control_total: Decimal::ZERO,
        number_of_accounts: 0,
        number_of_records: 0,
    };
    Ok((group, r.consumed()))
}

pub fn parse_trailer(input: &str, start: usize, group: &mut Group) -> Result<usize> {
    let mut r = RecordReader::new(input, start, "GroupTrailer")?;
    r.expect_code(TRAILER_CODE)?;
    group.control_total = r.decimal_field("GroupControlTotal")?;
    group.number_of_accounts = r.int_field("NumberOfAccounts")?;
    group.number_of_records = r.int_field("NumberOfRecords")?;
    r.discard_rest("NumberOfRecords")?;
    Ok(r.consumed())
}

pub fn render_header(group: &Group) -> Vec<String> {
    vec![
        HEADER_CODE.to_string(),
        group.receiver.clone(),
        group.originator.clone(),
        group.status.clone(),
        group.as_of_date.clone(),
        group.as_of_time.clone(),
        group.currency.clone(),
        group.as_of_date_modifier.clone(),
    ]
}

pub fn render_trailer(control_total: Decimal, accounts: i64, records: i64) -> Vec<String> {
    vec![
        TRAILER_CODE.to_string(),
        control_total.to_string(),
        accounts.to_string(),
        records.to_string(),
    ]
}

pub fn validate(group: &Group) -> Result<()> {
    if !matches!(group.status.as_str(), "1" | "2" | "3" | "4") {
        return Err(Bai2Error::Invalid {
            record: "GroupHeader",
            field: "GroupStatus",
        });
    }
    if !validate::valid_date(&group.as_of_date) {
        return Err(Bai2Error::Invalid {
            record: "GroupHeader",
            field: "AsOfDate",
        });
    }
    if !group.as_of_time.is_empty() && !validate::valid_time(&group.as_of_time) {
        return Err(Bai2Error::Invalid {
            record: "GroupHeader",
            field: "AsOfTime",
        });
    }
    if !group.currency.is_empty() && !validate::valid_currency(&group.currency) {
        return Err(Bai2Error::Invalid {
            record: "GroupHeader",
            field: "CurrencyCode",
        });
    }
    if !group.as_of_date_modifier.is_empty()
        && !matches!(group.as_of_date_modifier.as_str(), "1" | "2" | "3" | "4")
    {
        return Err(Bai2Error::Invalid {
            record: "GroupHeader",
            field: "AsOfDateModifier",
        });
    }
    Ok(())
}
