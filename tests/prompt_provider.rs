use chrono::{DateTime, TimeZone};
use chrono_tz::{Europe::Madrid, Tz};
use heras_advisor::clock::FixedClock;
use heras_advisor::prompts::{PromptBundle, PromptProvider, ERROR_MESSAGE, WELCOME_MESSAGE};
use heras_advisor::schedule::{fallback_is_open, FALLBACK_HOURS_INFO};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

const WEEKDAY_SCHEDULE: &str = r#"{
    "business_hours": {
        "Monday": "10:00-18:00",
        "Tuesday": "10:00-18:30",
        "Saturday": "Closed"
    }
}"#;

/// 2024-01-15 is a Monday, 2024-01-20 a Saturday
fn at(day: u32, hour: u32) -> DateTime<Tz> {
    Madrid.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
}

fn write_schedule(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("schedule.json");
    fs::write(&path, content).expect("Should write schedule");
    (dir, path)
}

fn provider(path: PathBuf, now: DateTime<Tz>) -> PromptProvider {
    PromptProvider::new(path, Arc::new(FixedClock::new(now)))
}

fn missing_path() -> PathBuf {
    PathBuf::from("does/not/exist/schedule.json")
}

#[test]
fn test_greeting_follows_hour_of_day() {
    for hour in 0..24 {
        let greeting = provider(missing_path(), at(15, hour)).time_based_greeting();
        let expected = if (6..12).contains(&hour) {
            "¡Buenos dias! Soy tu asesor de Hera's Nails & Lashes 👋"
        } else if (12..18).contains(&hour) {
            "¡Buenas tardes! Soy tu asesor de Hera's Nails & Lashes 👋"
        } else {
            "¡Buenas noches! Soy tu asesor de Hera's Nails & Lashes 👋"
        };
        assert_eq!(greeting, expected, "Wrong greeting at {}:00", hour);
    }
}

#[test]
fn test_hours_info_keeps_file_order() {
    let (_dir, path) = write_schedule(
        r#"{"business_hours": {"Monday": "09:30-20:30", "Sunday": "Closed"}}"#,
    );
    let info = provider(path, at(15, 12)).business_hours_info();
    assert_eq!(info, "Monday: 09:30-20:30\nSunday: Cerrado");

    let (_dir, path) = write_schedule(
        r#"{"business_hours": {"Sunday": "Closed", "Friday": "10:00-14:00", "Monday": "09:00-17:00"}}"#,
    );
    let info = provider(path, at(15, 12)).business_hours_info();
    assert_eq!(
        info,
        "Sunday: Cerrado\nFriday: 10:00-14:00\nMonday: 09:00-17:00"
    );
}

#[test]
fn test_hours_info_falls_back_on_missing_or_corrupt_file() {
    let info = provider(missing_path(), at(15, 12)).business_hours_info();
    assert_eq!(info, FALLBACK_HOURS_INFO);
    assert_eq!(info, "Lunes a Viernes: 10:00-18:00\nSabado y Domingo: Cerrado");

    for corrupt in [
        "{not json",
        "[1, 2, 3]",
        "[]",
        r#"[{"Monday": "Closed"}]"#,
        r#"{"business_hours": "Closed"}"#,
    ] {
        let (_dir, path) = write_schedule(corrupt);
        assert_eq!(
            provider(path, at(15, 12)).business_hours_info(),
            FALLBACK_HOURS_INFO,
            "Expected fallback for {:?}",
            corrupt
        );
    }
}

#[test]
fn test_closed_day_is_never_open() {
    let (_dir, path) = write_schedule(WEEKDAY_SCHEDULE);
    for hour in 0..24 {
        assert!(!provider(path.clone(), at(20, hour)).is_business_hours());
    }
}

#[test]
fn test_day_missing_from_schedule_is_closed() {
    let (_dir, path) = write_schedule(WEEKDAY_SCHEDULE);
    // 2024-01-17 is a Wednesday
    assert!(!provider(path, at(17, 12)).is_business_hours());
}

#[test]
fn test_open_range_boundaries() {
    let (_dir, path) = write_schedule(WEEKDAY_SCHEDULE);
    let open_at = |hour| provider(path.clone(), at(15, hour)).is_business_hours();

    assert!(!open_at(9));
    assert!(open_at(10));
    assert!(open_at(17));
    assert!(!open_at(18));
}

#[test]
fn test_closing_minutes_are_ignored() {
    let (_dir, path) = write_schedule(WEEKDAY_SCHEDULE);
    // Tuesday closes at 18:30 but only the hour is compared
    let tuesday = Madrid.with_ymd_and_hms(2024, 1, 16, 18, 15, 0).unwrap();
    assert!(!provider(path, tuesday).is_business_hours());
}

#[test]
fn test_open_check_falls_back_when_schedule_unusable() {
    let (_dir, bad_range) = write_schedule(
        r#"{"business_hours": {
            "Monday": "ten to six", "Tuesday": "ten to six", "Wednesday": "ten to six",
            "Thursday": "ten to six", "Friday": "ten to six", "Saturday": "ten to six",
            "Sunday": "ten to six"
        }}"#,
    );
    let (_corrupt_dir, corrupt) = write_schedule("not json at all");
    let (_empty_array_dir, empty_array) = write_schedule("[]");
    let (_array_dir, array) = write_schedule(r#"[{"Monday": "Closed"}]"#);

    for path in [missing_path(), bad_range, corrupt, empty_array, array] {
        // Monday
        assert!(!provider(path.clone(), at(15, 9)).is_business_hours());
        assert!(provider(path.clone(), at(15, 10)).is_business_hours());
        assert!(provider(path.clone(), at(15, 17)).is_business_hours());
        assert!(!provider(path.clone(), at(15, 18)).is_business_hours());
        // Friday
        assert!(provider(path.clone(), at(19, 12)).is_business_hours());
        // Saturday and Sunday
        assert!(!provider(path.clone(), at(20, 12)).is_business_hours());
        assert!(!provider(path, at(21, 12)).is_business_hours());
    }
}

#[test]
fn test_non_string_hours_render_and_only_today_falls_back() {
    let (_dir, path) = write_schedule(
        r#"{"business_hours": {"Monday": 9, "Tuesday": "10:00-18:00", "Sunday": null}}"#,
    );
    assert_eq!(
        provider(path.clone(), at(15, 12)).business_hours_info(),
        "Monday: 9\nTuesday: 10:00-18:00\nSunday: null"
    );

    // Monday is unreadable, so the weekday 10-18 policy applies
    assert!(provider(path.clone(), at(15, 12)).is_business_hours());
    assert!(!provider(path.clone(), at(15, 19)).is_business_hours());
    // Tuesday is read from the file as usual
    assert!(provider(path.clone(), at(16, 17)).is_business_hours());
    assert!(!provider(path.clone(), at(16, 9)).is_business_hours());
    // Sunday is unreadable and outside the fallback week
    assert!(!provider(path, at(21, 12)).is_business_hours());
}

#[test]
fn test_fallback_policy_matches_weekday_window() {
    for day in 15..=21 {
        for hour in 0..24 {
            let now = at(day, hour);
            let expected = day <= 19 && (10..18).contains(&hour);
            assert_eq!(fallback_is_open(&now), expected, "day {} hour {}", day, hour);
        }
    }
}

#[test]
fn test_system_prompt_embeds_hours_at_construction() {
    let (_dir, path) = write_schedule(WEEKDAY_SCHEDULE);
    let provider = provider(path.clone(), at(15, 12));
    let hours = provider.business_hours_info();
    let bundle = provider.bundle();

    assert!(bundle.system_prompt.contains(&hours));
    assert!(bundle
        .system_prompt
        .contains("HORARIOS DE ATENCION:\nMonday: 10:00-18:00\nTuesday: 10:00-18:30\nSaturday: Cerrado\n\nSOBRE NOSOTROS:"));
    assert_eq!(bundle.welcome_message, WELCOME_MESSAGE);
    assert_eq!(bundle.error_message, ERROR_MESSAGE);

    // The bundle is a snapshot and does not follow later schedule changes
    fs::write(&path, r#"{"business_hours": {"Monday": "Closed"}}"#).unwrap();
    assert!(bundle.system_prompt.contains("Monday: 10:00-18:00"));
    assert_ne!(provider.bundle(), bundle);
}

#[test]
fn test_system_prompt_uses_fallback_hours() {
    let bundle = provider(missing_path(), at(15, 12)).bundle();
    assert!(bundle.system_prompt.contains(FALLBACK_HOURS_INFO));
    assert!(!bundle.system_prompt.contains("{business_hours}"));
}

#[test]
fn test_static_messages() {
    let bundle = PromptBundle::new("");
    assert!(bundle.welcome_message.starts_with("¡Hola! Soy tu asesor de Hera's Nails & Lashes \n\n"));
    assert!(bundle.welcome_message.ends_with("¿Qué servicio te interesa?"));
    assert_eq!(
        bundle.error_message,
        "Lo siento, hubo un error procesando tu mensaje. Por favor, intenta de nuevo."
    );
}
