use super::*;

#[test]
fn normalize_zone_passes_iana_name_through() {
    assert_eq!(normalize_zone(Some("Europe/Minsk")), "Europe/Minsk");
}

#[test]
fn normalize_zone_strips_posix_colon_prefix() {
    assert_eq!(normalize_zone(Some(":America/New_York")), "America/New_York");
}

#[test]
fn normalize_zone_falls_back_to_utc() {
    assert_eq!(normalize_zone(None), FALLBACK_TIMEZONE);
    assert_eq!(normalize_zone(Some("  ")), FALLBACK_TIMEZONE);
}

#[test]
fn detect_timezone_is_never_empty() {
    assert!(!detect_timezone().is_empty());
}
