//! Validation of user-supplied command line values.

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use seaborne_api::types::{VesselSubclass, VesselType};

use crate::output::OutputFormat;

pub const MAX_NAME_LENGTH: usize = 100;

/// Strip ASCII control characters, trim whitespace and enforce a byte-length
/// limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String> {
    if input.len() > max_len {
        bail!("input exceeds maximum length of {} bytes", max_len);
    }
    Ok(input
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect::<String>()
        .trim()
        .to_string())
}

/// Name patterns are matched case-insensitively by the library; an empty
/// pattern after sanitizing means "no filter".
pub fn validate_name(input: &str) -> Result<Option<String>> {
    let sanitized = sanitize_text(input, MAX_NAME_LENGTH)?;
    Ok(Some(sanitized).filter(|s| !s.is_empty()))
}

/// IMO numbers are seven digits; the last one is a check digit equal to the
/// weighted sum (weights 7 down to 2) of the first six, modulo 10.
pub fn validate_imo(imo: i64) -> Result<i64> {
    if !(1_000_000..=9_999_999).contains(&imo) {
        bail!("invalid IMO number {}: expected 7 digits", imo);
    }
    let digits: Vec<i64> = imo
        .to_string()
        .bytes()
        .map(|b| i64::from(b - b'0'))
        .collect();
    let checksum: i64 = digits[..6]
        .iter()
        .zip((2..=7).rev())
        .map(|(d, w)| d * w)
        .sum();
    if checksum % 10 != digits[6] {
        bail!("invalid IMO number {}: check digit mismatch", imo);
    }
    Ok(imo)
}

pub fn validate_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        anyhow!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2021-03-09)",
            trimmed
        )
    })
}

/// Rejects ranges whose end precedes their start.
pub fn validate_date_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<()> {
    match end {
        Some(end) if end < start => bail!("end date {} is before start date {}", end, start),
        _ => Ok(()),
    }
}

pub fn validate_vessel_type(id: i32) -> Result<VesselType> {
    VesselType::from_id(id).ok_or_else(|| {
        anyhow!(
            "unknown vessel type {}. Valid ids: 1 (Tanker), 3 (Dry), 4 (Container), 5 (LNG), 6 (LPG)",
            id
        )
    })
}

pub fn validate_subclass(input: &str) -> Result<VesselSubclass> {
    input
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid vessel subclass '{}'. Valid: all, dirty, clean", input))
}

pub fn validate_output_format(input: &str) -> Result<OutputFormat> {
    match input.trim().to_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        "csv" => Ok(OutputFormat::Csv),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => bail!(
            "unknown output format '{}'. Valid: table, json, csv, markdown",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imo_valid() {
        assert_eq!(validate_imo(9074729).unwrap(), 9074729);
        assert_eq!(validate_imo(9867293).unwrap(), 9867293);
        assert_eq!(validate_imo(9419175).unwrap(), 9419175);
    }

    #[test]
    fn imo_bad_check_digit() {
        assert!(validate_imo(9074728).is_err());
    }

    #[test]
    fn imo_wrong_length() {
        assert!(validate_imo(907472).is_err());
        assert!(validate_imo(90747290).is_err());
        assert!(validate_imo(-9074729).is_err());
    }

    #[test]
    fn date_valid() {
        assert_eq!(
            validate_date(" 2021-03-09 ").unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 9).unwrap()
        );
    }

    #[test]
    fn date_invalid() {
        assert!(validate_date("09/03/2021").is_err());
        assert!(validate_date("2021-02-30").is_err());
    }

    #[test]
    fn date_range() {
        let start = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
        assert!(validate_date_range(start, None).is_ok());
        assert!(validate_date_range(start, Some(start)).is_ok());
        assert!(validate_date_range(start, NaiveDate::from_ymd_opt(2021, 4, 30)).is_err());
    }

    #[test]
    fn name_sanitized() {
        assert_eq!(validate_name(" Jebel\u{7}Ali ").unwrap().as_deref(), Some("JebelAli"));
        assert_eq!(validate_name("   ").unwrap(), None);
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn vessel_type_lookup() {
        assert_eq!(validate_vessel_type(5).unwrap().name, "LNG");
        assert!(validate_vessel_type(2).is_err());
    }

    #[test]
    fn subclass_case_insensitive() {
        assert_eq!(validate_subclass("Clean").unwrap(), VesselSubclass::Clean);
        assert_eq!(validate_subclass("DIRTY").unwrap(), VesselSubclass::Dirty);
        assert!(validate_subclass("muddy").is_err());
    }

    #[test]
    fn output_formats() {
        assert_eq!(validate_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(validate_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(validate_output_format("xml").is_err());
    }
}
