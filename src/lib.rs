#![warn(missing_docs)]

//! gatt-uuid normalizes and formats the UUIDs that name Bluetooth GATT services, characteristics and descriptors.
//!
//! GATT UUIDs come in three flavors: 16-bit, 32-bit and 128-bit. The short forms are abbreviations of a 128-bit UUID
//! built on the Bluetooth Base UUID `00000000-0000-1000-8000-00805f9b34fb`, and are reserved for numbers assigned by
//! the Bluetooth SIG. For instance the 16-bit UUID `2901` ("Characteristic User Description") stands for
//! `00002901-0000-1000-8000-00805f9b34fb`. Custom services use full 128-bit UUIDs.
//!
//! A [`GattUuid`] holds one of these in a single canonical shape: a lowercase, dashed, 36-character string, tagged
//! with the width of the form it was built from. It gives UUIDs their own type so they are not mixed up with other
//! strings throughout a GATT stack.
//!
//! # Usage
//!
//! ```rust
//! use gatt_uuid::{BitWidth, GattUuid};
//!
//! // Any formatting works: case, dashes and other punctuation are ignored.
//! let info = GattUuid::new("0000180A/0000.1000_8000+00805F9B34FB");
//! assert_eq!(info.full(), "0000180a-0000-1000-8000-00805f9b34fb");
//! assert_eq!(info.width(), BitWidth::Bits128);
//!
//! // Short forms are expanded against the Base UUID.
//! let user_description = GattUuid::new("2901");
//! assert_eq!(user_description, GattUuid::from_u16(0x2901));
//! assert_eq!(user_description.full(), "00002901-0000-1000-8000-00805f9b34fb");
//! assert_eq!(user_description.to_string(), "2901");
//!
//! // Malformed input never panics, it yields the invalid sentinel.
//! let bogus = GattUuid::new("rqzp");
//! assert_eq!(bogus.bit_count(), 0);
//! assert_eq!(bogus.full(), "");
//! ```
//!
//! # Feature flags
//!
//! The `serde` feature is available to enable serializing/deserializing [`GattUuid`] values. They are written in their
//! width-dependent form (see [`GattUuid::as_width_str`]) and read back through [`GattUuid::new`].

pub mod btuuid;
pub mod error;
mod gatt_uuid;
pub mod normalize;

pub use btuuid::BluetoothUuidExt;
pub use error::Error;
pub use gatt_uuid::{GattUuid, UuidSource};
pub use normalize::BitWidth;
pub use uuid::Uuid;

/// Convenience alias for a result with [`Error`]
pub type Result<T, E = Error> = core::result::Result<T, E>;
