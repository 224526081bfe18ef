use bai2lib::scan;

#[test]
fn field_delimiter_selection() {
    // запятая, терминатор записи и перевод строки в одном буфере
    let input = "AB,CD/EF\n";

    let (field, advance) = scan::next_field(input, 0).expect("first field");
    assert_eq!(field, "AB");
    assert_eq!(advance, 3);

    let (field, advance) = scan::next_field(input, 3).expect("second field");
    assert_eq!(field, "CD");
    assert_eq!(advance, 3);

    let (field, advance) = scan::next_field(input, 6).expect("third field");
    assert_eq!(field, "EF");
    assert_eq!(advance, 3);
}

#[test]
fn newline_does_not_terminate_before_a_later_slash() {
    // `/` дальше по буферу: перевод строки входит в поле, запись тянется
    let input = "AB\n88,CD/";
    let (field, advance) = scan::next_field(input, 0).expect("folded field");
    assert_eq!(field, "AB\n88");
    assert_eq!(advance, 6);
}

#[test]
fn empty_fields() {
    let input = ",,/";

    let (field, advance) = scan::next_field(input, 0).expect("empty field");
    assert_eq!(field, "");
    assert_eq!(advance, 1);

    let (value, advance) = scan::next_field_as_int(input, 1).expect("empty int field");
    assert_eq!(value, 0);
    assert_eq!(advance, 1);
}

#[test]
fn integer_fields() {
    let (value, advance) = scan::next_field_as_int("003,", 0).expect("int field");
    assert_eq!(value, 3);
    assert_eq!(advance, 4);

    assert!(scan::next_field_as_int("abc,", 0).is_err());
}

#[test]
fn record_size() {
    assert_eq!(scan::record_size("01,A,B/\nrest"), Some(7));
    assert_eq!(scan::record_size("16,aaa\n88,bbb"), Some(7));
    assert_eq!(scan::record_size("no terminator"), None);
}

#[test]
fn scanner_errors() {
    assert!(scan::next_field("", 0).is_err());
    assert!(scan::next_field("ABC", 0).is_err());
    assert!(scan::next_field("AB/", 5).is_err());
}
