//! The string normalization pipeline behind [`GattUuid::new`][crate::GattUuid::new]
//!
//! Input goes through four steps: [`clean`] reduces it to lowercase hex digits, [`BitWidth::from_hex_len`] classifies
//! the digit count, [`expand`] wraps short forms in the Bluetooth Base UUID and [`dashify`] puts the separators back.
//! Every step is total: anything that doesn't classify comes out as an empty string with [`BitWidth::Invalid`].

/// Leading digits placed in front of a 16-bit short UUID.
pub const BASE_UUID_PREFIX_16: &str = "0000";

/// Everything after the first group of the Bluetooth Base UUID `00000000-0000-1000-8000-00805f9b34fb`.
pub const BASE_UUID_SUFFIX: &str = "-0000-1000-8000-00805f9b34fb";

/// Positions of the separators in the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` layout.
///
/// Each offset is counted in the string after the previous separators were inserted.
pub const DASH_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Length of a canonical dashed UUID string.
pub const CANONICAL_LEN: usize = 36;

/// The width class of a GATT UUID, as given by the form it was built from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitWidth {
    /// Malformed or uninitialized
    #[default]
    Invalid,
    /// A 16-bit short UUID embedded in the Base UUID
    Bits16,
    /// A 32-bit short UUID embedded in the Base UUID
    Bits32,
    /// A full 128-bit UUID
    Bits128,
}

impl BitWidth {
    /// Classifies a count of hex digits. Each digit carries 4 bits, so only 4, 8 and 32 digits are meaningful.
    pub const fn from_hex_len(len: usize) -> Self {
        match len {
            4 => BitWidth::Bits16,
            8 => BitWidth::Bits32,
            32 => BitWidth::Bits128,
            _ => BitWidth::Invalid,
        }
    }

    /// Returns the number of bits, or 0 for [`BitWidth::Invalid`].
    pub const fn bits(self) -> u32 {
        match self {
            BitWidth::Invalid => 0,
            BitWidth::Bits16 => 16,
            BitWidth::Bits32 => 32,
            BitWidth::Bits128 => 128,
        }
    }

    /// Returns `true` unless this is [`BitWidth::Invalid`].
    pub const fn is_valid(self) -> bool {
        !matches!(self, BitWidth::Invalid)
    }
}

impl std::fmt::Display for BitWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitWidth::Invalid => f.write_str("invalid"),
            _ => write!(f, "{}-bit", self.bits()),
        }
    }
}

/// Returns the lowercase contents of `input` with every character that is not a hex digit removed.
///
/// ```
/// # use gatt_uuid::normalize::clean;
/// assert_eq!(clean("0000180A/0000.1000_zzzzzz_8000+00805f9b34fb"), "0000180a00001000800000805f9b34fb");
/// assert_eq!(clean("rqzp"), "");
/// ```
pub fn clean(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_hexdigit)
        .collect()
}

/// Classifies an already cleaned digit stream and expands it against the Base UUID.
///
/// The result still carries the dashes of [`BASE_UUID_SUFFIX`]; run it through [`dashify`] to get the canonical
/// layout. Digit counts other than 4, 8 or 32 yield an empty string and [`BitWidth::Invalid`].
pub fn expand(digits: &str) -> (String, BitWidth) {
    let width = BitWidth::from_hex_len(digits.len());
    let expanded = match width {
        BitWidth::Bits16 => format!("{BASE_UUID_PREFIX_16}{digits}{BASE_UUID_SUFFIX}"),
        BitWidth::Bits32 => format!("{digits}{BASE_UUID_SUFFIX}"),
        BitWidth::Bits128 => digits.to_owned(),
        BitWidth::Invalid => String::new(),
    };
    (expanded, width)
}

/// Cleans `input` (see [`clean`]) and inserts dashes at [`DASH_OFFSETS`].
///
/// A dash is only inserted while the string is longer than its offset, so partial input gets as many separators as
/// it has room for and never a trailing one.
///
/// ```
/// # use gatt_uuid::normalize::dashify;
/// assert_eq!(dashify("0000180A00001000800000805f9b34fb"), "0000180a-0000-1000-8000-00805f9b34fb");
/// assert_eq!(dashify("0000180A"), "0000180a");
/// assert_eq!(dashify("0000180A.0000.100"), "0000180a-0000-100");
/// assert_eq!(dashify(""), "");
/// ```
pub fn dashify(input: &str) -> String {
    let digits = clean(input);
    let mut dashed = String::with_capacity(digits.len() + DASH_OFFSETS.len());
    for (i, c) in digits.chars().enumerate() {
        // The k-th offset sits k places further along than the digit it precedes.
        if DASH_OFFSETS.iter().enumerate().any(|(k, &offset)| offset - k == i) {
            dashed.push('-');
        }
        dashed.push(c);
    }
    dashed
}

/// Runs the whole pipeline: [`clean`], [`expand`], [`dashify`].
///
/// Returns either a canonical 36-character string with its width, or an empty string with [`BitWidth::Invalid`].
pub fn normalize(input: &str) -> (String, BitWidth) {
    let (expanded, width) = expand(&clean(input));
    (dashify(&expanded), width)
}
