//! Блок доступности средств внутри записей 03 и 16.

use crate::error::{Bai2Error, Result};
use crate::model::{Distribution, FundsType};
use crate::validate;

use super::reader::RecordReader;

pub(crate) fn parse(r: &mut RecordReader<'_>) -> Result<FundsType> {
    let code = match r.optional_field("FundsType")? {
        None => return Ok(FundsType::Unspecified),
        Some(code) => code,
    };
    match code.as_str() {
        "" => Ok(FundsType::Unspecified),
        "Z" => Ok(FundsType::Unknown),
        "0" => Ok(FundsType::SameDay),
        "1" => Ok(FundsType::OneDay),
        "2" => Ok(FundsType::TwoOrMoreDays),
        "V" => {
            let date = r.optional_field("FundsTypeDate")?.unwrap_or_default();
            let time = r.optional_field("FundsTypeTime")?.unwrap_or_default();
            Ok(FundsType::ValueDated { date, time })
        }
        "S" => {
            let immediate = r.optional_field("FundsTypeImmediate")?.unwrap_or_default();
            let one_day = r.optional_field("FundsTypeOneDay")?.unwrap_or_default();
            let more_than_one_day = r
                .optional_field("FundsTypeMoreThanOneDay")?
                .unwrap_or_default();
            Ok(FundsType::Split {
                immediate,
                one_day,
                more_than_one_day,
            })
        }
        "D" => {
            // Число пар объявлено в самой записи; читаем ровно столько.
            let count = r.int_field("DistributionNumber")?;
            let mut distributions = Vec::new();
            for _ in 0..count {
                let day = r.int_field("DistributionDay")?;
                let amount = r.field("DistributionAmount")?;
                distributions.push(Distribution { day, amount });
            }
            Ok(FundsType::Distributed(distributions))
        }
        _ => Err(r.invalid("FundsType")),
    }
}

/// Поля блока в каноническом порядке вывода.
pub(crate) fn render(funds: &FundsType, fields: &mut Vec<String>) {
    match funds {
        FundsType::Unspecified => fields.push(String::new()),
        FundsType::Unknown => fields.push("Z".to_string()),
        FundsType::SameDay => fields.push("0".to_string()),
        FundsType::OneDay => fields.push("1".to_string()),
        FundsType::TwoOrMoreDays => fields.push("2".to_string()),
        FundsType::ValueDated { date, time } => {
            fields.push("V".to_string());
            fields.push(date.clone());
            fields.push(time.clone());
        }
        FundsType::Split {
            immediate,
            one_day,
            more_than_one_day,
        } => {
            fields.push("S".to_string());
            fields.push(immediate.clone());
            fields.push(one_day.clone());
            fields.push(more_than_one_day.clone());
        }
        FundsType::Distributed(distributions) => {
            fields.push("D".to_string());
            fields.push(distributions.len().to_string());
            for distribution in distributions {
                fields.push(distribution.day.to_string());
                fields.push(distribution.amount.clone());
            }
        }
    }
}

pub(crate) fn validate(record: &'static str, funds: &FundsType) -> Result<()> {
    match funds {
        FundsType::ValueDated { date, time } => {
            if !date.is_empty() && !validate::valid_date(date) {
                return Err(Bai2Error::Invalid {
                    record,
                    field: "FundsTypeDate",
                });
            }
            if !time.is_empty() && !validate::valid_time(time) {
                return Err(Bai2Error::Invalid {
                    record,
                    field: "FundsTypeTime",
                });
            }
        }
        FundsType::Split {
            immediate,
            one_day,
            more_than_one_day,
        } => {
            for amount in [immediate, one_day, more_than_one_day] {
                if !amount.is_empty() && !validate::valid_amount(amount) {
                    return Err(Bai2Error::Invalid {
                        record,
                        field: "FundsTypeAmount",
                    });
                }
            }
        }
        FundsType::Distributed(distributions) => {
            for distribution in distributions {
                if !distribution.amount.is_empty() && !validate::valid_amount(&distribution.amount)
                {
                    return Err(Bai2Error::Invalid {
                        record,
                        field: "DistributionAmount",
                    });
                }
            }
        }
        _ => {}
    }
    Ok(())
}
