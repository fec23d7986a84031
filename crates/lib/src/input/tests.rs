use arrayvec::ArrayVec;
use bstr::BStr;

use super::Input;

fn input(data: &str) -> Input {
    Input::new("test", Box::leak(String::from(data).into_boxed_str()).as_bytes())
}

#[test]
fn parse_pairs() {
    let mut input = input("3   4\n10 2\n");

    assert_eq!(input.try_line::<(i64, i64)>().unwrap(), Some((3, 4)));
    assert_eq!(input.try_line::<(i64, i64)>().unwrap(), Some((10, 2)));
    assert_eq!(input.try_line::<(i64, i64)>().unwrap(), None);
    assert!(input.is_empty());
}

#[test]
fn parse_levels() {
    let mut input = input("7 6 4 2 1");

    let levels = input.line::<ArrayVec<i64, 16>>().unwrap();
    assert_eq!(&levels[..], [7, 6, 4, 2, 1]);
}

#[test]
fn raw_lines_and_crlf() {
    let mut input = input("MMMS\r\nXXMA\n");

    assert_eq!(input.try_line::<&BStr>().unwrap(), Some(BStr::new("MMMS")));
    assert_eq!(input.try_line::<&BStr>().unwrap(), Some(BStr::new("XXMA")));
    assert_eq!(input.try_line::<&BStr>().unwrap(), None);
}

#[test]
fn scanner() {
    let mut input = input("mul(2,44)rest");

    assert!(input.eat(b"mul("));
    assert_eq!(input.try_digits::<u64>().unwrap(), Some(2));
    assert!(input.eat(b","));
    assert_eq!(input.try_digits::<u64>().unwrap(), Some(44));
    assert!(input.eat(b")"));
    assert_eq!(input.try_digits::<u64>().unwrap(), None);
    assert!(!input.eat(b"mul("));
    assert_eq!(input.as_bstr(), BStr::new("rest"));
}

#[test]
fn error_carries_line_number() {
    let mut input = input("1 2\nx y\n");

    assert_eq!(input.try_line::<(i64, i64)>().unwrap(), Some((1, 2)));

    let error = input.try_line::<(i64, i64)>().unwrap_err();
    assert_eq!(error.to_string(), "test:2: not an integer or integer overflow `x`");
}

#[test]
fn expected_line_at_end_of_input() {
    let mut input = input("");
    assert!(input.line::<&BStr>().is_err());
}
