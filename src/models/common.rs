//! Common types shared across all models.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// Known external URLs for an object, keyed by service (e.g. "spotify").
pub type ExternalUrls = BTreeMap<String, String>;

/// Known external identifiers for an object, keyed by kind
/// (e.g. "upc", "isrc", "ean").
pub type ExternalIds = BTreeMap<String, String>;

/// Release date structure.
///
/// Year is always present; month and day are `None` when the service
/// only knows the date at a coarser precision, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReleaseDate {
    /// Year of release.
    pub year: u16,

    /// Month of release (1-12), if known.
    pub month: Option<u8>,

    /// Day of release, if known. Never set without `month`, and always a
    /// day that exists in that month.
    pub day: Option<u8>,
}

impl ReleaseDate {
    /// Parse a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` string.
    pub fn parse(date_str: &str) -> Result<Self, ModelError> {
        let invalid = |reason: &str| ModelError::InvalidReleaseDate {
            value: date_str.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = date_str.split('-').collect();
        if parts.len() > 3 {
            return Err(invalid("expected at most two '-' separators"));
        }

        let numbers = parts
            .iter()
            .map(|p| {
                if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid(&format!("component {:?} is not a number", p)));
                }
                p.parse::<u16>()
                    .map_err(|_| invalid(&format!("component {:?} is out of range", p)))
            })
            .collect::<Result<Vec<u16>, _>>()?;

        let month = match numbers.get(1) {
            Some(&m) if (1..=12).contains(&m) => Some(m as u8),
            Some(_) => return Err(invalid("month must be between 1 and 12")),
            None => None,
        };
        let day = match (numbers.get(2), month) {
            (Some(&d), Some(m)) if d >= 1 && d <= u16::from(days_in_month(numbers[0], m)) => {
                Some(d as u8)
            }
            (Some(_), _) => return Err(invalid("day does not exist in that month")),
            (None, _) => None,
        };

        Ok(Self {
            year: numbers[0],
            month,
            day,
        })
    }

    /// The precision implied by the populated components.
    pub fn precision(&self) -> DatePrecision {
        match (self.month, self.day) {
            (Some(_), Some(_)) => DatePrecision::Day,
            (Some(_), None) => DatePrecision::Month,
            _ => DatePrecision::Year,
        }
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.day) {
            (Some(m), Some(d)) => write!(f, "{:04}-{:02}-{:02}", self.year, m, d),
            (Some(m), None) => write!(f, "{:04}-{:02}", self.year, m),
            _ => write!(f, "{:04}", self.year),
        }
    }
}

impl FromStr for ReleaseDate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReleaseDate::parse(s)
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReleaseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ReleaseDate::parse(&raw).map_err(de::Error::custom)
    }
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// How much of a release date the service knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

impl DatePrecision {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePrecision::Year => "year",
            DatePrecision::Month => "month",
            DatePrecision::Day => "day",
        }
    }
}

impl fmt::Display for DatePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatePrecision {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(DatePrecision::Year),
            "month" => Ok(DatePrecision::Month),
            "day" => Ok(DatePrecision::Day),
            other => Err(ModelError::UnknownPrecision(other.to_string())),
        }
    }
}

/// Parse an optional raw release date and check it against an optional
/// raw precision string.
pub(crate) fn parse_release(
    date: Option<&str>,
    precision: Option<&str>,
) -> Result<Option<ReleaseDate>, ModelError> {
    let Some(raw) = date else {
        return Ok(None);
    };
    let parsed = ReleaseDate::parse(raw)?;
    if let Some(p) = precision {
        let expected: DatePrecision = p.parse()?;
        if parsed.precision() != expected {
            return Err(ModelError::PrecisionMismatch {
                date: raw.to_string(),
                precision: p.to_string(),
            });
        }
    }
    Ok(Some(parsed))
}

/// Image with URL and optional dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Height in pixels, when known.
    pub height: Option<u32>,

    /// Width in pixels, when known.
    pub width: Option<u32>,
}

impl Image {
    /// Create a new image.
    pub fn new<S: Into<String>>(url: S, height: u32, width: u32) -> Self {
        Self {
            url: url.into(),
            height: Some(height),
            width: Some(width),
        }
    }

    fn area(&self) -> u64 {
        u64::from(self.height.unwrap_or(0)) * u64::from(self.width.unwrap_or(0))
    }
}

/// Pick the largest image; images without dimensions rank lowest.
pub(crate) fn largest_image(images: &[Image]) -> Option<&Image> {
    images.iter().max_by_key(|img| img.area())
}

/// Why content is unavailable to the requesting user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Restrictions {
    /// "market", "product", "explicit", or another service-defined reason.
    pub reason: String,
}

/// One page of a larger result set.
///
/// Cursor fields are kept verbatim; following them is left to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Endpoint that produced this page.
    pub href: String,

    /// Items on this page.
    pub items: Vec<T>,

    /// Maximum number of items requested.
    pub limit: u32,

    /// URL of the next page, if any.
    pub next: Option<String>,

    /// Offset of the first item on this page.
    pub offset: u32,

    /// URL of the previous page, if any.
    pub previous: Option<String>,

    /// Total number of items available.
    pub total: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            href: String::new(),
            items: Vec::new(),
            limit: 0,
            next: None,
            offset: 0,
            previous: None,
            total: 0,
        }
    }
}

impl<T> Page<T> {
    /// Whether more items exist past this page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Serde helpers that keep the raw wire string but reject values the
/// typed accessors would refuse.
pub(crate) mod checked {
    use super::*;

    /// A raw string that must parse as `T`.
    pub fn string<'de, D, T>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<T>().map_err(de::Error::custom)?;
        Ok(raw)
    }

    /// An optional raw string that, when present, must parse as `T`.
    pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        if let Some(ref s) = raw {
            s.parse::<T>().map_err(de::Error::custom)?;
        }
        Ok(raw)
    }

    /// A list of raw market codes, each of which must be recognized.
    /// `null` is read as an empty list.
    pub fn markets<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
        crate::models::market::parse_markets(&raw).map_err(de::Error::custom)?;
        Ok(raw)
    }

    /// A popularity score in 0..=100.
    pub fn popularity<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        if value > 100 {
            return Err(de::Error::custom(format!(
                "popularity {} is outside 0..=100",
                value
            )));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_date_full() {
        let date = ReleaseDate::parse("1981-12-15").unwrap();
        assert_eq!(date.year, 1981);
        assert_eq!(date.month, Some(12));
        assert_eq!(date.day, Some(15));
        assert_eq!(date.precision(), DatePrecision::Day);
    }

    #[test]
    fn test_parse_release_date_month() {
        let date = ReleaseDate::parse("1981-12").unwrap();
        assert_eq!((date.year, date.month, date.day), (1981, Some(12), None));
        assert_eq!(date.precision(), DatePrecision::Month);
    }

    #[test]
    fn test_parse_release_date_year_only() {
        let date = ReleaseDate::parse("1981").unwrap();
        assert_eq!((date.year, date.month, date.day), (1981, None, None));
        assert_eq!(date.precision(), DatePrecision::Year);
    }

    #[test]
    fn test_parse_release_date_too_many_separators() {
        assert!(matches!(
            ReleaseDate::parse("1981-12-15-01"),
            Err(ModelError::InvalidReleaseDate { .. })
        ));
    }

    #[test]
    fn test_parse_release_date_non_numeric() {
        for bad in ["19x1", "1981-ab", "1981-12-1y", "", "1981-", "+981"] {
            assert!(ReleaseDate::parse(bad).is_err(), "{:?} should fail", bad);
        }
    }

    #[test]
    fn test_parse_release_date_checks_month_length() {
        assert!(ReleaseDate::parse("1981-02-31").is_err());
        assert!(ReleaseDate::parse("1981-04-31").is_err());
        assert!(ReleaseDate::parse("1900-02-29").is_err());
        assert!(ReleaseDate::parse("1981-13").is_err());
        assert_eq!(ReleaseDate::parse("2000-02-29").unwrap().day, Some(29));
        assert_eq!(ReleaseDate::parse("1984-02-29").unwrap().day, Some(29));
        assert_eq!(ReleaseDate::parse("1981-12-31").unwrap().day, Some(31));
    }

    #[test]
    fn test_release_date_display_pads() {
        let date = ReleaseDate::parse("2003-04-09").unwrap();
        assert_eq!(date.to_string(), "2003-04-09");
        assert_eq!(ReleaseDate::parse("0999").unwrap().to_string(), "0999");
    }

    #[test]
    fn test_parse_release_checks_precision() {
        assert_eq!(
            parse_release(Some("1981-12"), Some("month")).unwrap(),
            Some(ReleaseDate {
                year: 1981,
                month: Some(12),
                day: None
            })
        );
        assert!(matches!(
            parse_release(Some("1981-12"), Some("day")),
            Err(ModelError::PrecisionMismatch { .. })
        ));
        assert!(matches!(
            parse_release(Some("1981"), Some("decade")),
            Err(ModelError::UnknownPrecision(_))
        ));
        assert_eq!(parse_release(None, Some("day")).unwrap(), None);
    }

    #[test]
    fn test_largest_image() {
        let images = vec![
            Image::new("small", 64, 64),
            Image::new("big", 640, 640),
            Image {
                url: "unknown".to_string(),
                height: None,
                width: None,
            },
        ];
        assert_eq!(largest_image(&images).map(|i| i.url.as_str()), Some("big"));
        assert!(largest_image(&[]).is_none());
    }

    #[test]
    fn test_page_decodes_without_cursors() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"href":"h","items":[1,2],"limit":2,"next":null,"offset":0,"previous":null,"total":2}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert!(!page.has_next());
    }
}
