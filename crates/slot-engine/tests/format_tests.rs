//! Tests for display formatting and export text.

use slot_engine::format::{export_raw, export_text, format_interval, format_raw};
use slot_engine::{Locale, TimeInterval};

fn iv(start: &str, end: &str) -> TimeInterval {
    TimeInterval::from_raw(&[start, end]).unwrap()
}

#[test]
fn same_day_slot_uses_dash_form() {
    let s = format_interval(&iv("2025-02-03T10:00:00", "2025-02-03T11:00:00"), Locale::En);
    assert_eq!(s, "2/3(Mon) 10:00-11:00");
}

#[test]
fn month_and_day_are_not_padded_but_times_are() {
    let s = format_interval(&iv("2025-12-25T09:05:00", "2025-12-25T09:35:00"), Locale::En);
    assert_eq!(s, "12/25(Thu) 09:05-09:35");
}

#[test]
fn cross_date_slot_uses_tilde_form() {
    let s = format_interval(&iv("2025-02-05T10:00:00", "2025-02-06T10:00:00"), Locale::En);
    assert_eq!(s, "2/5(Wed) 10:00 ~ 2/6(Thu) 10:00");
}

#[test]
fn japanese_locale_uses_kanji_weekdays() {
    let s = format_interval(&iv("2025-02-09T13:00:00", "2025-02-09T14:00:00"), Locale::Ja);
    assert_eq!(s, "2/9(日) 13:00-14:00");
}

#[test]
fn unparsable_entry_falls_back_to_verbatim_text() {
    assert_eq!(
        format_raw(&["2025-02-03T10:00:00", "soon"], Locale::En),
        "2025-02-03T10:00:00 soon"
    );
    assert_eq!(format_raw(&["only-one"], Locale::En), "only-one");
}

#[test]
fn export_joins_lines_with_newlines() {
    let text = export_text(
        &[
            iv("2025-02-03T10:00:00", "2025-02-03T11:00:00"),
            iv("2025-02-04T14:00:00", "2025-02-04T15:30:00"),
        ],
        Locale::En,
    );
    assert_eq!(text, "2/3(Mon) 10:00-11:00\n2/4(Tue) 14:00-15:30");
}

#[test]
fn empty_export_is_empty_string() {
    assert_eq!(export_text(&[], Locale::En), "");
    assert_eq!(export_raw::<&str>(&[], Locale::Ja), "");
}

#[test]
fn raw_export_mixes_formatted_and_fallback_lines() {
    let raw = vec![
        vec!["2025-02-03T10:00:00", "2025-02-03T11:00:00"],
        vec!["bad", "entry"],
    ];
    assert_eq!(export_raw(&raw, Locale::En), "2/3(Mon) 10:00-11:00\nbad entry");
}
