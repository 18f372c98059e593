//! Unit tests for built-in leaf implementations.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rstest::rstest;

use super::{FieldValue, zero_hint};
use crate::coerce::{DEFAULT_TIME_LAYOUT, Kind, Value};

#[rstest]
fn narrow_integers_accept_fitting_values() {
    let mut small = 0_i8;
    assert!(small.assign(Value::Int32(-7)));
    assert_eq!(small, -7);

    let mut port = 0_u16;
    assert!(port.assign(Value::Int64(8080)));
    assert_eq!(port, 8080);
}

#[rstest]
fn out_of_range_integers_become_zero() {
    let mut small = 5_u8;
    assert!(small.assign(Value::Int64(300)));
    assert_eq!(small, 0);

    let mut unsigned = 9_u32;
    assert!(unsigned.assign(Value::Int64(-1)));
    assert_eq!(unsigned, 0);
}

#[rstest]
fn mismatched_kinds_leave_the_field_alone() {
    let mut count = 3_i64;
    assert!(!count.assign(Value::String("4".into())));
    assert_eq!(count, 3);

    let mut name = String::from("keep");
    assert!(!name.assign(Value::Bool(true)));
    assert_eq!(name, "keep");
}

#[rstest]
#[case(&String::new(), true)]
#[case(&String::from("x"), false)]
#[case(&false, true)]
#[case(&true, false)]
#[case(&0_i32, true)]
#[case(&0.0_f64, true)]
#[case(&-0.0_f64, false)]
#[case(&Vec::<String>::new(), true)]
#[case(&PathBuf::new(), true)]
#[case(&DateTime::<Utc>::default(), true)]
#[case(&NaiveDateTime::default(), true)]
fn zero_checks(#[case] value: &dyn FieldValue, #[case] expected: bool) {
    assert_eq!(value.is_zero(), expected);
}

#[rstest]
fn paths_take_string_values() {
    let mut path = PathBuf::new();
    assert_eq!(path.kind(), Kind::String);
    assert!(path.assign(Value::String("/etc/app.yml".into())));
    assert_eq!(path, PathBuf::from("/etc/app.yml"));
}

#[rstest]
fn naive_timestamps_store_utc_wall_time() {
    let Some(ts) = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).single() else {
        panic!("valid timestamp");
    };
    let mut naive = NaiveDateTime::default();
    assert!(naive.assign(Value::Timestamp(ts)));
    assert_eq!(naive, ts.naive_utc());
}

#[rstest]
#[case(&0_u16, "0")]
#[case(&String::new(), "")]
#[case(&false, "false")]
#[case(&0.0_f32, "0")]
#[case(&DateTime::<Utc>::default(), "Thu, 01 Jan 1970 00:00:00 GMT")]
fn zero_hints(#[case] value: &dyn FieldValue, #[case] expected: &str) {
    assert_eq!(zero_hint(value, DEFAULT_TIME_LAYOUT), expected);
}

#[rstest]
fn type_names_are_short() {
    assert_eq!(FieldValue::type_name(&0_u16), "u16");
    assert_eq!(FieldValue::type_name(&String::new()), "string");
}

#[rstest]
fn unsigned_64_bit_leaves_cover_the_full_range() {
    let mut big = 0_u64;
    assert_eq!(big.kind(), Kind::Uint64);
    assert!(big.assign(Value::Uint64(u64::MAX)));
    assert_eq!(big, u64::MAX);

    let mut index = 4_usize;
    assert!(index.assign(Value::Int64(-3)));
    assert_eq!(index, 0);

    let mut signed = 1_i64;
    assert!(signed.assign(Value::Uint64(u64::MAX)));
    assert_eq!(signed, 0);
}

#[rstest]
#[case(&String::from("svc"), Some(Value::String("svc".into())))]
#[case(&true, Some(Value::Bool(true)))]
#[case(&-3_i8, Some(Value::Int32(-3)))]
#[case(&7_u16, Some(Value::Int64(7)))]
#[case(&u64::MAX, Some(Value::Uint64(u64::MAX)))]
#[case(&1.5_f32, Some(Value::Float32(1.5)))]
#[case(&vec![String::from("a")], Some(Value::StringList(vec!["a".into()])))]
fn leaves_report_their_current_value(
    #[case] value: &dyn FieldValue,
    #[case] expected: Option<Value>,
) {
    assert_eq!(value.to_value(), expected);
}
