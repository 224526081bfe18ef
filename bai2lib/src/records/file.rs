//! Записи 01 (заголовок файла) и 99 (трейлер файла).

use rust_decimal::Decimal;

use crate::error::{Bai2Error, Result};
use crate::model::Bai2File;
use crate::validate;

use super::reader::RecordReader;

pub(crate) const HEADER_CODE: &str = "01";
pub(crate) const TRAILER_CODE: &str = "99";

/// Версия формата, единственная поддерживаемая.
const VERSION: i64 = 2;

pub fn parse_header(input: &str, start: usize) -> Result<(Bai2File, usize)> {
    let mut r = RecordReader::new(input, start, "FileHeader")?;
    r.expect_code(HEADER_CODE)?;

    let sender = r.field("Sender")?;
    let receiver = r.field("Receiver")?;
    let created_date = r.field("FileCreatedDate")?;
    let created_time = r.field("FileCreatedTime")?;
    let file_id = r.field("FileIdNumber")?;
    let physical_record_length = r.optional_int_field("PhysicalRecordLength")?;
    let block_size = r.optional_int_field("BlockSize")?;
    let version_number = r.int_field("VersionNumber")?;
    r.discard_rest("VersionNumber")?;

    let file = Bai2File {
        sender,
        receiver,
        created_date,
        created_time,
        file_id,
        physical_record_length,
        block_size,
        version_number,
        groups: Vec::new(),
        control_total: Decimal::ZERO,
        number_of_groups: 0,
        number_of_records: 0,
    };
    Ok((file, r.consumed()))
}

pub fn parse_trailer(input: &str, start: usize, file: &mut Bai2File) -> Result<usize> {
    let mut r = RecordReader::new(input, start, "FileTrailer")?;
    r.expect_code(TRAILER_CODE)?;
    file.control_total = r.decimal_field("FileControlTotal")?;
    file.number_of_groups = r.int_field("NumberOfGroups")?;
    file.number_of_records = r.int_field("NumberOfRecords")?;
    r.discard_rest("NumberOfRecords")?;
    Ok(r.consumed())
}

pub fn render_header(file: &Bai2File) -> Vec<String> {
    vec![
        HEADER_CODE.to_string(),
        file.sender.clone(),
        file.receiver.clone(),
        file.created_date.clone(),
        file.created_time.clone(),
        file.file_id.clone(),
        file.physical_record_length
            .map(|n| n.to_string())
            .unwrap_or_default(),
        file.block_size.map(|n| n.to_string()).unwrap_or_default(),
        file.version_number.to_string(),
    ]
}

pub fn render_trailer(control_total: Decimal, groups: i64, records: i64) -> Vec<String> {
    vec![
        TRAILER_CODE.to_string(),
        control_total.to_string(),
        groups.to_string(),
        records.to_string(),
    ]
}

pub fn validate(file: &Bai2File) -> Result<()> {
    if file.version_number != VERSION {
        return Err(Bai2Error::Invalid {
            record: "FileHeader",
            field: "VersionNumber",
        });
    }
    if !validate::valid_date(&file.created_date) {
        return Err(Bai2Error::Invalid {
            record: "FileHeader",
            field: "FileCreatedDate",
        });
    }
    if !validate::valid_time(&file.created_time) {
        return Err(Bai2Error::Invalid {
            record: "FileHeader",
            field: "FileCreatedTime",
        });
    }
    Ok(())
}
