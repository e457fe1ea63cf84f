use regex::Regex;

use crate::error::AppError;
use crate::models::unit::{Unit, MEBIBYTE};

lazy_static::lazy_static! {
    // First number with an optional known suffix; anything after it is ignored.
    static ref SIZE_FORMAT: Regex = Regex::new(
        r"(?i)\b(?P<number>[0-9]+(?:\.[0-9]+)?)\s*(?P<unit>(?:b|k|ki?b|m|mi?b|g|gi?b|t|ti?b)?)\b"
    )
    .expect("size pattern is valid");
}

const DISPLAY_UNITS: [Unit; 4] = [Unit::Kibibyte, Unit::Mebibyte, Unit::Gibibyte, Unit::Tebibyte];

/// Parse a size such as `"4096"`, `"2GiB"`, `"4.5 g"` or `"4000kb"` into bytes.
///
/// Suffixes are matched case-insensitively through
/// [`SUFFIX_ALIASES`](crate::models::unit::SUFFIX_ALIASES), so `k`, `m`, `g`
/// and `t` are binary. Fractional results are rounded half to even.
pub fn parse_memory_to_bytes(mem: &str) -> Result<u64, AppError> {
    let caps = SIZE_FORMAT
        .captures(mem)
        .ok_or_else(|| AppError::Conversion(format!("unable to detect size from \"{}\"", mem)))?;

    let number = &caps["number"];
    let unit = Unit::from_suffix(caps.name("unit").map_or("", |m| m.as_str()))?;

    if unit == Unit::Byte && !number.contains('.') {
        return number.parse::<u64>().map_err(|_| too_large(mem));
    }

    let count: f64 = number
        .parse()
        .map_err(|_| AppError::Conversion(format!("unable to detect size from \"{}\"", mem)))?;
    let bytes = unit.to_bytes(count).round_ties_even();

    // u64::MAX as f64 rounds up to 2^64
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return Err(too_large(mem));
    }

    Ok(bytes as u64)
}

fn too_large(mem: &str) -> AppError {
    AppError::Conversion(format!("size \"{}\" is too large", mem))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteFormat {
    /// Largest unit size (in bytes) the formatter may escalate to.
    pub cap: u64,
    pub simple: bool,
    pub precision: usize,
}

impl ByteFormat {
    pub const HEAP: ByteFormat = ByteFormat {
        cap: MEBIBYTE,
        simple: true,
        precision: 0,
    };

    pub fn with_cap(mut self, cap: u64) -> Self {
        self.cap = cap;
        self
    }

    pub fn simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl Default for ByteFormat {
    fn default() -> Self {
        Self {
            cap: u64::MAX,
            simple: false,
            precision: 2,
        }
    }
}

pub fn format_bytes(byte_count: u64, format: &ByteFormat) -> String {
    let unit = DISPLAY_UNITS
        .iter()
        .copied()
        .filter(|unit| byte_count >= unit.bytes() && format.cap >= unit.bytes())
        .last()
        .unwrap_or(Unit::Byte);

    format!(
        "{:.*}{}",
        format.precision,
        unit.from_bytes(byte_count as f64),
        unit.label(format.simple)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::unit::{GIBIBYTE, KIBIBYTE, TEBIBYTE};

    #[test]
    fn test_parse_bytes() {
        assert_eq!(parse_memory_to_bytes("4096").unwrap(), 4096);
        assert_eq!(parse_memory_to_bytes("4096b").unwrap(), 4096);
        assert_eq!(parse_memory_to_bytes("4096B").unwrap(), 4096);
        assert_eq!(parse_memory_to_bytes("  4096 b").unwrap(), 4096);
    }

    #[test]
    fn test_parse_decimal_units() {
        assert_eq!(parse_memory_to_bytes("4000kb").unwrap(), 4000 * 1000);
        assert_eq!(parse_memory_to_bytes("4000mb").unwrap(), 4000 * 1000u64.pow(2));
        assert_eq!(parse_memory_to_bytes("4000gb").unwrap(), 4000 * 1000u64.pow(3));
        assert_eq!(parse_memory_to_bytes("3TB").unwrap(), 3 * 1000u64.pow(4));
    }

    #[test]
    fn test_parse_binary_units() {
        assert_eq!(parse_memory_to_bytes("4096k").unwrap(), 4096 * 1024);
        assert_eq!(parse_memory_to_bytes("4096kib").unwrap(), 4096 * 1024);
        assert_eq!(parse_memory_to_bytes("4096m").unwrap(), 4096 * 1024u64.pow(2));
        assert_eq!(parse_memory_to_bytes("4096mib").unwrap(), 4096 * 1024u64.pow(2));
        assert_eq!(parse_memory_to_bytes("4096g").unwrap(), 4096 * 1024u64.pow(3));
        assert_eq!(parse_memory_to_bytes("4096gib").unwrap(), 4096 * 1024u64.pow(3));
        assert_eq!(parse_memory_to_bytes("2t").unwrap(), 2 * TEBIBYTE);
        assert_eq!(parse_memory_to_bytes("2TiB").unwrap(), 2 * TEBIBYTE);
    }

    #[test]
    fn test_single_letter_suffix_is_not_decimal() {
        assert_ne!(parse_memory_to_bytes("1k").unwrap(), 1000);
        assert_eq!(parse_memory_to_bytes("1k").unwrap(), 1024);
        assert_eq!(parse_memory_to_bytes("1kb").unwrap(), 1000);
    }

    #[test]
    fn test_parse_every_alias() {
        for (suffix, unit) in crate::models::unit::SUFFIX_ALIASES {
            let text = format!("12{}", suffix);
            assert_eq!(parse_memory_to_bytes(&text).unwrap(), 12 * unit.bytes(), "{}", text);
        }
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(parse_memory_to_bytes("4.5k").unwrap(), 4608);
        assert_eq!(parse_memory_to_bytes("1.5 GiB").unwrap(), 3 * GIBIBYTE / 2);
        assert_eq!(parse_memory_to_bytes("0.1kb").unwrap(), 100);
        assert_eq!(parse_memory_to_bytes("7.0").unwrap(), 7);
    }

    #[test]
    fn test_parse_first_token() {
        assert_eq!(parse_memory_to_bytes("heap: 512m please").unwrap(), 512 * 1024u64.pow(2));
        assert_eq!(parse_memory_to_bytes("4096 apples").unwrap(), 4096);
        assert_eq!(parse_memory_to_bytes("2g and 4g").unwrap(), 2 * GIBIBYTE);
    }

    #[test]
    fn test_parse_no_number() {
        let err = parse_memory_to_bytes("lots").unwrap_err();
        assert_eq!(err, AppError::Conversion("unable to detect size from \"lots\"".into()));
        assert!(parse_memory_to_bytes("").is_err());
        assert!(parse_memory_to_bytes("16EiB").is_err());
    }

    #[test]
    fn test_parse_non_ascii_digits() {
        let err = parse_memory_to_bytes("٤٠٩٦").unwrap_err();
        assert_eq!(err, AppError::Conversion("unable to detect size from \"٤٠٩٦\"".into()));
        assert!(parse_memory_to_bytes("٤g").is_err());
    }

    #[test]
    fn test_parse_too_large() {
        assert!(matches!(
            parse_memory_to_bytes("99999999999999999999"),
            Err(AppError::Conversion(_))
        ));
        assert!(matches!(parse_memory_to_bytes("20000000t"), Err(AppError::Conversion(_))));
    }

    #[test]
    fn test_format_defaults() {
        assert_eq!(format_bytes(4096, &ByteFormat::default()), "4.00KiB");
        assert_eq!(format_bytes(100, &ByteFormat::default()), "100.00b");
        assert_eq!(format_bytes(0, &ByteFormat::default()), "0.00b");
        assert_eq!(format_bytes(3 * GIBIBYTE / 2, &ByteFormat::default()), "1.50GiB");
        assert_eq!(format_bytes(2 * TEBIBYTE, &ByteFormat::default()), "2.00TiB");
    }

    #[test]
    fn test_format_simple() {
        let format = ByteFormat::default().simple(true).with_precision(0);
        assert_eq!(format_bytes(4096, &format), "4k");
        assert_eq!(format_bytes(8 * GIBIBYTE, &format), "8g");
        assert_eq!(format_bytes(1000, &format), "1000b");
    }

    #[test]
    fn test_format_cap() {
        let format = ByteFormat::default()
            .with_cap(1024u64.pow(2))
            .simple(true)
            .with_precision(0);
        assert_eq!(format_bytes(1536 * 1024u64.pow(2), &format), "1536m");
        assert_eq!(format_bytes(1536 * 1024u64.pow(2), &ByteFormat::HEAP), "1536m");

        // a cap below one KiB always formats in bytes
        let bytes_only = ByteFormat::default().with_cap(KIBIBYTE - 1);
        assert_eq!(format_bytes(4096, &bytes_only), "4096.00b");
    }

    #[test]
    fn test_format_then_parse() {
        for bytes in [4096, 512 * 1024u64.pow(2), 8 * GIBIBYTE] {
            let text = format_bytes(bytes, &ByteFormat::HEAP);
            assert_eq!(parse_memory_to_bytes(&text).unwrap(), bytes, "{}", text);
        }
    }
}
