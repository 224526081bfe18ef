use bai2lib::model::Bai2File;

#[test]
fn valid_file_passes() {
    let data = "01,S,R,060321,0829,1,,,2/\n\
                02,R,S,1,060317,,CAD,/\n\
                03,ACCT1,CAD,100,500,,/\n\
                49,500,2/\n\
                98,500,1,4/\n\
                99,500,1,6/";
    let file = Bai2File::parse(data).expect("parse");
    file.validate().expect("validate");
}

#[test]
fn group_control_total_mismatch() {
    // трейлер группы заявляет итог, не равный сумме итогов счетов
    let data = "01,S,R,060321,0829,1,,,2/\n\
                02,R,S,1,060317,,CAD,/\n\
                03,ACCT1,CAD,100,500,,/\n\
                49,500,2/\n\
                98,900,1,4/\n\
                99,900,1,6/";
    let file = Bai2File::parse(data).expect("parse");

    let err = file.validate().expect_err("group mismatch");
    assert_eq!(
        err.to_string(),
        "group 1: control total mismatch, reported 900, computed 500"
    );
}

#[test]
fn account_control_total_mismatch() {
    let data = "01,S,R,060321,0829,1,,,2/\n\
                02,R,S,1,060317,,CAD,/\n\
                03,ACCT1,CAD,100,500,,/\n\
                16,165,250,,,,wire/\n\
                49,500,3/\n\
                98,500,1,5/\n\
                99,500,1,7/";
    let file = Bai2File::parse(data).expect("parse");

    let err = file.validate().expect_err("account mismatch");
    assert_eq!(
        err.to_string(),
        "account ACCT1: control total mismatch, reported 500, computed 750"
    );
}

#[test]
fn record_count_mismatch() {
    let data = "01,S,R,060321,0829,1,,,2/\n\
                02,R,S,1,060317,,CAD,/\n\
                03,ACCT1,CAD,100,500,,/\n\
                49,500,2/\n\
                98,500,1,4/\n\
                99,500,1,9/";
    let file = Bai2File::parse(data).expect("parse");

    let err = file.validate().expect_err("count mismatch");
    assert_eq!(
        err.to_string(),
        "file: record count mismatch, reported 9, computed 6"
    );
}

#[test]
fn unknown_detail_type_code_is_a_validation_error() {
    // код 050 не входит в перечень кодов транзакций: разбор проходит,
    // валидация — нет
    let data = "01,S,R,060321,0829,1,,,2/\n\
                02,R,S,1,060317,,CAD,/\n\
                03,ACCT1,,/\n\
                16,050,100,,,,X/\n\
                49,100,3/\n\
                98,100,1,5/\n\
                99,100,1,7/";
    let file = Bai2File::parse(data).expect("parse");

    let err = file.validate().expect_err("bad type code");
    assert_eq!(err.to_string(), "TransactionDetail: invalid TypeCode");
}

#[test]
fn invalid_version_number() {
    let data = "01,S,R,060321,0829,1,,,3/\n\
                02,R,S,1,060317,,CAD,/\n\
                03,ACCT1,CAD,100,500,,/\n\
                49,500,2/\n\
                98,500,1,4/\n\
                99,500,1,6/";
    let file = Bai2File::parse(data).expect("parse");

    let err = file.validate().expect_err("bad version");
    assert_eq!(err.to_string(), "FileHeader: invalid VersionNumber");
}

#[test]
fn invalid_group_status() {
    let data = "01,S,R,060321,0829,1,,,2/\n\
                02,R,S,7,060317,,CAD,/\n\
                03,ACCT1,CAD,100,500,,/\n\
                49,500,2/\n\
                98,500,1,4/\n\
                99,500,1,6/";
    let file = Bai2File::parse(data).expect("parse");

    let err = file.validate().expect_err("bad status");
    assert_eq!(err.to_string(), "GroupHeader: invalid GroupStatus");
}

#[test]
fn invalid_currency_code() {
    let data = "01,S,R,060321,0829,1,,,2/\n\
                02,R,S,1,060317,,CADX,/\n\
                03,ACCT1,CAD,100,500,,/\n\
                49,500,2/\n\
                98,500,1,4/\n\
                99,500,1,6/";
    let file = Bai2File::parse(data).expect("parse");

    let err = file.validate().expect_err("bad currency");
    assert_eq!(err.to_string(), "GroupHeader: invalid CurrencyCode");
}
