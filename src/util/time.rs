use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}

pub fn parses_as_rfc3339(raw: &str) -> bool {
    OffsetDateTime::parse(raw, &Rfc3339).is_ok()
}
