use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::{Error, ErrorKind};
use crate::normalize::{self, BitWidth, BASE_UUID_PREFIX_16, BASE_UUID_SUFFIX};

/// A normalized GATT UUID, tagged with the width of the form it was built from.
///
/// The value is either the invalid sentinel (an empty string with [`BitWidth::Invalid`]) or a 36-character,
/// lowercase, dashed UUID string. 16- and 32-bit values are stored fully expanded against the Bluetooth Base UUID, so
/// `GattUuid::new("2901")` and `GattUuid::from_u16(0x2901)` hold the same string,
/// `00002901-0000-1000-8000-00805f9b34fb`.
///
/// Construction never fails. Callers that need to reject bad input should check [`is_valid`][Self::is_valid] or use
/// [`GattUuid::parse`].
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GattUuid {
    canonical: String,
    width: BitWidth,
}

/// The raw shapes a [`GattUuid`] can be built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UuidSource {
    /// Loosely formatted hex text, see [`GattUuid::new`]
    RawString(String),
    /// A 16-bit short UUID
    Short16(u16),
    /// A 32-bit short UUID
    Short32(u32),
    /// Five numeric fields, see [`GattUuid::from_fields`]
    FieldSet5 {
        /// First group, 8 digits
        part1: u32,
        /// Second group, 4 digits
        part2: u16,
        /// Third group, 4 digits
        part3: u16,
        /// Fourth group, 4 digits
        part4: u16,
        /// Last group, 12 digits
        part5: u64,
    },
}

impl GattUuid {
    /// Builds a UUID from a partial or complete string.
    ///
    /// The input is stripped down to its hex digits first, so any mix of case, dashes, dots or other punctuation is
    /// accepted. The remaining digits are then read as follows:
    ///
    /// - 4 digits: a 16-bit UUID, embedded as `0000xxxx-0000-1000-8000-00805f9b34fb`
    /// - 8 digits: a 32-bit UUID, embedded as `xxxxxxxx-0000-1000-8000-00805f9b34fb`
    /// - 32 digits: a 128-bit UUID
    ///
    /// Any other digit count produces the invalid sentinel.
    pub fn new(input: impl AsRef<str>) -> Self {
        let input = input.as_ref();
        let digits = normalize::clean(input);
        let (expanded, width) = normalize::expand(&digits);
        if width.is_valid() {
            trace!(input, %width, "normalized GATT UUID");
        } else {
            debug!(input, digits = digits.len(), "input does not form a GATT UUID");
        }

        GattUuid {
            canonical: normalize::dashify(&expanded),
            width,
        }
    }

    /// Builds a UUID from a string, failing instead of returning the invalid sentinel.
    pub fn parse(input: &str) -> crate::Result<Self> {
        let uuid = GattUuid::new(input);
        if uuid.is_valid() {
            Ok(uuid)
        } else {
            let digits = normalize::clean(input).len();
            Err(Error::new(
                ErrorKind::InvalidLength,
                None,
                format!("found {digits} hex digits in {input:?}"),
            ))
        }
    }

    /// Builds a 16-bit UUID of the form `0000????-0000-1000-8000-00805f9b34fb`.
    pub fn from_u16(short: u16) -> Self {
        GattUuid {
            canonical: format!("{BASE_UUID_PREFIX_16}{short:04x}{BASE_UUID_SUFFIX}"),
            width: BitWidth::Bits16,
        }
    }

    /// Builds a 32-bit UUID of the form `????????-0000-1000-8000-00805f9b34fb`.
    pub fn from_u32(short: u32) -> Self {
        GattUuid {
            canonical: format!("{short:08x}{BASE_UUID_SUFFIX}"),
            width: BitWidth::Bits32,
        }
    }

    /// Builds a 128-bit UUID of the form `11111111-2222-3333-4444-555555555555` from its five groups.
    ///
    /// # Last group
    ///
    /// `part5` is meant to carry a 48-bit value, but it is not simply masked to 48 bits. The last group is written as
    /// `(part5 >> 4) & 0xffffffff` followed by `part5 & 0xffff`, so bits 4..16 appear twice and bits 36..48 are
    /// dropped. Only values whose bits line up that way (for instance `0x5` or `0xffff_ffff_ffff`) come out as their
    /// plain 12-digit hex. Use [`GattUuid::from_u128`] for an exact numeric conversion.
    pub fn from_fields(part1: u32, part2: u16, part3: u16, part4: u16, part5: u64) -> Self {
        let part5_hi = ((part5 >> 4) & 0xffff_ffff) as u32;
        let part5_lo = (part5 & 0xffff) as u16;
        GattUuid {
            canonical: format!("{part1:08x}-{part2:04x}-{part3:04x}-{part4:04x}-{part5_hi:08x}{part5_lo:04x}"),
            width: BitWidth::Bits128,
        }
    }

    /// Builds a 128-bit UUID from its numeric value.
    pub fn from_u128(value: u128) -> Self {
        GattUuid {
            canonical: Uuid::from_u128(value).hyphenated().to_string(),
            width: BitWidth::Bits128,
        }
    }

    /// Builds a UUID from any of the supported input shapes.
    pub fn from_source(source: UuidSource) -> Self {
        match source {
            UuidSource::RawString(s) => GattUuid::new(s),
            UuidSource::Short16(short) => GattUuid::from_u16(short),
            UuidSource::Short32(short) => GattUuid::from_u32(short),
            UuidSource::FieldSet5 {
                part1,
                part2,
                part3,
                part4,
                part5,
            } => GattUuid::from_fields(part1, part2, part3, part4, part5),
        }
    }

    /// Returns the invalid sentinel.
    pub fn invalid() -> Self {
        GattUuid::default()
    }

    /// Returns the number of bits of the form this UUID was built from: 16, 32, 128, or 0 if it is invalid.
    pub fn bit_count(&self) -> u32 {
        self.width.bits()
    }

    /// Returns the width class of this UUID.
    pub fn width(&self) -> BitWidth {
        self.width
    }

    /// Returns `false` for the invalid sentinel.
    pub fn is_valid(&self) -> bool {
        self.width.is_valid()
    }

    /// Returns the 16-bit portion (`0000????-...`), or an empty string if this UUID is invalid.
    ///
    /// This is a plain substring. It is only meaningful for UUIDs built on the Base UUID with a zero upper half.
    pub fn short16(&self) -> &str {
        self.canonical.get(4..8).unwrap_or("")
    }

    /// Returns the 32-bit portion (`????????-...`), or an empty string if this UUID is invalid.
    ///
    /// This is a plain substring. It is only meaningful for UUIDs built on the Base UUID.
    pub fn short32(&self) -> &str {
        self.canonical.get(0..8).unwrap_or("")
    }

    /// Returns the full dashed 128-bit form, or an empty string if this UUID is invalid.
    pub fn full(&self) -> &str {
        &self.canonical
    }

    /// Same as [`full`][Self::full].
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Returns the form matching [`width`][Self::width]: 4 digits for 16-bit, 8 digits for 32-bit, the full form
    /// otherwise.
    pub fn as_width_str(&self) -> &str {
        match self.width {
            BitWidth::Bits16 => self.short16(),
            BitWidth::Bits32 => self.short32(),
            BitWidth::Bits128 | BitWidth::Invalid => self.full(),
        }
    }

    /// Converts to a [`uuid::Uuid`], or `None` for the invalid sentinel.
    pub fn to_uuid(&self) -> Option<Uuid> {
        Uuid::try_from(self).ok()
    }
}

impl AsRef<str> for GattUuid {
    fn as_ref(&self) -> &str {
        self.full()
    }
}

impl fmt::Display for GattUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_width_str())
    }
}

impl FromStr for GattUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GattUuid::parse(s)
    }
}

impl From<&str> for GattUuid {
    fn from(s: &str) -> Self {
        GattUuid::new(s)
    }
}

impl From<String> for GattUuid {
    fn from(s: String) -> Self {
        GattUuid::new(s)
    }
}

impl From<u16> for GattUuid {
    fn from(short: u16) -> Self {
        GattUuid::from_u16(short)
    }
}

impl From<u32> for GattUuid {
    fn from(short: u32) -> Self {
        GattUuid::from_u32(short)
    }
}

impl From<UuidSource> for GattUuid {
    fn from(source: UuidSource) -> Self {
        GattUuid::from_source(source)
    }
}

impl From<Uuid> for GattUuid {
    fn from(uuid: Uuid) -> Self {
        GattUuid::from_u128(uuid.as_u128())
    }
}

impl TryFrom<&GattUuid> for Uuid {
    type Error = Error;

    fn try_from(value: &GattUuid) -> Result<Self, Self::Error> {
        // The sentinel has no digits, which the radix parse rejects.
        u128::from_str_radix(&normalize::clean(value.full()), 16)
            .map(Uuid::from_u128)
            .map_err(|err| Error::new(ErrorKind::Invalid, Some(Box::new(err)), String::new()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GattUuid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_width_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GattUuid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(deserializer).map(GattUuid::new)
    }
}
