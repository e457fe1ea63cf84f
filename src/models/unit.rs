use crate::error::AppError;

pub const KILOBYTE: u64 = 1000;
pub const MEGABYTE: u64 = 1000 * KILOBYTE;
pub const GIGABYTE: u64 = 1000 * MEGABYTE;
pub const TERABYTE: u64 = 1000 * GIGABYTE;

pub const KIBIBYTE: u64 = 1024;
pub const MEBIBYTE: u64 = 1024 * KIBIBYTE;
pub const GIBIBYTE: u64 = 1024 * MEBIBYTE;
pub const TEBIBYTE: u64 = 1024 * GIBIBYTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Byte,
    Kilobyte,
    Kibibyte,
    Megabyte,
    Mebibyte,
    Gigabyte,
    Gibibyte,
    Terabyte,
    Tebibyte,
}

/// Lowercase size suffixes and the unit each one resolves to.
///
/// The single-letter suffixes are aliases of the binary units: `4k` is
/// 4096 bytes, not 4000. Only the explicit `kb`/`mb`/`gb`/`tb` forms are
/// decimal.
pub const SUFFIX_ALIASES: &[(&str, Unit)] = &[
    ("b", Unit::Byte),
    ("k", Unit::Kibibyte),
    ("kb", Unit::Kilobyte),
    ("kib", Unit::Kibibyte),
    ("m", Unit::Mebibyte),
    ("mb", Unit::Megabyte),
    ("mib", Unit::Mebibyte),
    ("g", Unit::Gibibyte),
    ("gb", Unit::Gigabyte),
    ("gib", Unit::Gibibyte),
    ("t", Unit::Tebibyte),
    ("tb", Unit::Terabyte),
    ("tib", Unit::Tebibyte),
];

impl Unit {
    pub const fn bytes(self) -> u64 {
        match self {
            Unit::Byte => 1,
            Unit::Kilobyte => KILOBYTE,
            Unit::Kibibyte => KIBIBYTE,
            Unit::Megabyte => MEGABYTE,
            Unit::Mebibyte => MEBIBYTE,
            Unit::Gigabyte => GIGABYTE,
            Unit::Gibibyte => GIBIBYTE,
            Unit::Terabyte => TERABYTE,
            Unit::Tebibyte => TEBIBYTE,
        }
    }

    pub fn from_suffix(suffix: &str) -> Result<Self, AppError> {
        let suffix = suffix.to_lowercase();
        if suffix.is_empty() {
            return Ok(Unit::Byte);
        }

        SUFFIX_ALIASES
            .iter()
            .find(|(alias, _)| *alias == suffix)
            .map(|(_, unit)| *unit)
            .ok_or_else(|| {
                AppError::Conversion(format!("unable to detect size modifier \"{}\"", suffix))
            })
    }

    pub fn to_bytes(self, count: f64) -> f64 {
        count * self.bytes() as f64
    }

    pub fn from_bytes(self, bytes: f64) -> f64 {
        bytes / self.bytes() as f64
    }

    pub fn label(self, simple: bool) -> &'static str {
        match (self, simple) {
            (Unit::Byte, _) => "b",
            (Unit::Kilobyte, false) => "kB",
            (Unit::Kibibyte, false) => "KiB",
            (Unit::Megabyte, false) => "MB",
            (Unit::Mebibyte, false) => "MiB",
            (Unit::Gigabyte, false) => "GB",
            (Unit::Gibibyte, false) => "GiB",
            (Unit::Terabyte, false) => "TB",
            (Unit::Tebibyte, false) => "TiB",
            (Unit::Kilobyte | Unit::Kibibyte, true) => "k",
            (Unit::Megabyte | Unit::Mebibyte, true) => "m",
            (Unit::Gigabyte | Unit::Gibibyte, true) => "g",
            (Unit::Terabyte | Unit::Tebibyte, true) => "t",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(false))
    }
}

impl std::str::FromStr for Unit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_suffix(s.trim())
    }
}
