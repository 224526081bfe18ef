use bai2lib::model::{Detail, Distribution, FundsType};
use bai2lib::records::detail;
use bai2lib::write::record_lines;

#[test]
fn parse_detail_record() {
    let sample = "16,409,000000000002500,V,060316,,,,RETURNED CHEQUE     /";

    let (record, size) = detail::parse(sample, 0).expect("detail");
    assert_eq!(size, 56);
    assert_eq!(record.type_code, "409");
    assert_eq!(record.amount, "000000000002500");
    assert_eq!(
        record.funds_type,
        FundsType::ValueDated {
            date: "060316".to_string(),
            time: String::new(),
        }
    );
    assert_eq!(record.bank_reference, "");
    assert_eq!(record.customer_reference, "");
    assert_eq!(record.text, "RETURNED CHEQUE     ");

    // повторный вывод байт в байт
    assert_eq!(record_lines(&detail::render(&record), None).join("\n"), sample);
}

#[test]
fn render_detail_with_continuations() {
    let record = Detail {
        type_code: "409".to_string(),
        amount: "111111111111111".to_string(),
        funds_type: FundsType::Distributed(vec![
            Distribution { day: 1, amount: "1000000000".to_string() },
            Distribution { day: 2, amount: "2000000000".to_string() },
            Distribution { day: 3, amount: "3000000000".to_string() },
            Distribution { day: 4, amount: "4000000000".to_string() },
            Distribution { day: 5, amount: "5000000000".to_string() },
            Distribution { day: 6, amount: "6000000000".to_string() },
            Distribution { day: 7, amount: "7000000000".to_string() },
        ]),
        bank_reference: "222222222222222".to_string(),
        customer_reference: "333333333333333".to_string(),
        text: "RETURNED CHEQUE     444444444444444".to_string(),
    };

    let single = record_lines(&detail::render(&record), None).join("\n");
    assert_eq!(
        single,
        "16,409,111111111111111,D,7,1,1000000000,2,2000000000,3,3000000000,4,4000000000,5,5000000000,6,6000000000,7,7000000000,222222222222222,333333333333333,RETURNED CHEQUE     444444444444444/"
    );

    let flowed = record_lines(&detail::render(&record), Some(80));
    assert_eq!(
        flowed.join("\n"),
        "16,409,111111111111111,D,7,1,1000000000,2,2000000000,3,3000000000,4,4000000000/\n\
         88,5,5000000000,6,6000000000,7,7000000000,222222222222222,333333333333333/\n\
         88,RETURNED CHEQUE     444444444444444/"
    );
    for line in &flowed {
        assert!(line.len() <= 80, "line too long: {line}");
    }

    let flowed = record_lines(&detail::render(&record), Some(50));
    assert_eq!(
        flowed.join("\n"),
        "16,409,111111111111111,D,7,1,1000000000,2/\n\
         88,2000000000,3,3000000000,4,4000000000,5/\n\
         88,5000000000,6,6000000000,7,7000000000/\n\
         88,222222222222222,333333333333333/\n\
         88,RETURNED CHEQUE     444444444444444/"
    );
    for line in &flowed {
        assert!(line.len() <= 50, "line too long: {line}");
    }
}

#[test]
fn parse_detail_with_adhoc_continuations() {
    // продолжения с прикладными полями KEY: value читаются и отбрасываются
    let data = "16,266,1912,,GI2118700002010,20210706MMQFMPU8000001,Outgoing Wire Return,-/\n\
                88,CREF: 20210706MMQFMPU8000001/\n\
                88,EREF: 20210706MMQFMPU8000001/\n\
                88,DBIC: GSCRUS33/\n\
                88,CRNM: ABC Company/\n\
                88,DBNM: SAMPLE INC./";

    let (record, size) = detail::parse(data, 0).expect("detail");
    assert_eq!(size, data.len());
    assert_eq!(record.type_code, "266");
    assert_eq!(record.amount, "1912");
    assert_eq!(record.funds_type, FundsType::Unspecified);
    assert_eq!(record.bank_reference, "GI2118700002010");
    assert_eq!(record.customer_reference, "20210706MMQFMPU8000001");
    assert_eq!(record.text, "Outgoing Wire Return");

    assert_eq!(
        record_lines(&detail::render(&record), None).join("\n"),
        "16,266,1912,,GI2118700002010,20210706MMQFMPU8000001,Outgoing Wire Return/"
    );
}

#[test]
fn parse_detail_with_newline_termination() {
    // та же запись без единого `/`: строки закрыты переводами строк
    let data = "16,266,1912,,GI2118700002010,20210706MMQFMPU8000001,Outgoing Wire Return,-\n\
                88,CREF: 20210706MMQFMPU8000001\n\
                88,EREF: 20210706MMQFMPU8000001\n\
                88,DBIC: GSCRUS33\n\
                88,CRNM: ABC Company\n\
                88,DBNM: SAMPLE INC.";

    let (record, size) = detail::parse(data, 0).expect("detail");
    assert_eq!(size, data.len());
    assert_eq!(record.type_code, "266");
    assert_eq!(record.amount, "1912");
    assert_eq!(record.bank_reference, "GI2118700002010");
    assert_eq!(record.customer_reference, "20210706MMQFMPU8000001");
    assert_eq!(record.text, "Outgoing Wire Return");

    assert_eq!(
        record_lines(&detail::render(&record), None).join("\n"),
        "16,266,1912,,GI2118700002010,20210706MMQFMPU8000001,Outgoing Wire Return/"
    );
}

#[test]
fn reject_illegal_slash_in_reference() {
    let data = "16,447,928650,,SPB2322684598521,AB/GS/RPFILERP0001/RPBA0001,ACH Credit Payment/";

    let err = detail::parse(data, 0).expect_err("slash inside reference");
    assert_eq!(
        err.to_string(),
        "TransactionDetail: unable to parse CustomerReferenceNumber"
    );
}

#[test]
fn reject_illegal_slash_in_text() {
    let data = "16,447,928650,,SPB2322684598521,REF0001,AB/GS/RPFILERP0001,ACH Credit Payment/";

    let err = detail::parse(data, 0).expect_err("slash inside text");
    assert_eq!(err.to_string(), "TransactionDetail: unable to parse Text");
}

#[test]
fn parse_distribution_funds_type() {
    let sample = "16,409,1000,D,3,1,100,2,300,5,600,BANKREF,CUSTREF,TEXT/";

    let (record, size) = detail::parse(sample, 0).expect("detail");
    assert_eq!(size, sample.len());
    match &record.funds_type {
        FundsType::Distributed(distributions) => {
            assert_eq!(distributions.len(), 3);
            assert_eq!(distributions[1].day, 2);
            assert_eq!(distributions[1].amount, "300");
        }
        other => panic!("unexpected funds type: {other:?}"),
    }
    assert_eq!(record.bank_reference, "BANKREF");
    assert_eq!(record.customer_reference, "CUSTREF");
    assert_eq!(record.text, "TEXT");

    assert_eq!(record_lines(&detail::render(&record), None).join("\n"), sample);
}

#[test]
fn parse_distribution_with_zero_days() {
    let sample = "16,409,1000,D,0,BANKREF,CUSTREF,TEXT/";

    let (record, _) = detail::parse(sample, 0).expect("detail");
    assert_eq!(record.funds_type, FundsType::Distributed(Vec::new()));
    assert_eq!(record.bank_reference, "BANKREF");

    assert_eq!(record_lines(&detail::render(&record), None).join("\n"), sample);
}
