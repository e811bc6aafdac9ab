//! `Uuid` interop for Bluetooth UUIDs

use uuid::Uuid;

use crate::GattUuid;

/// This is the Bluetooth Base UUID. It is used with 16-bit and 32-bit UUIDs
/// [defined](https://www.bluetooth.com/specifications/assigned-numbers/) by the Bluetooth SIG.
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

const BLUETOOTH_BASE_MASK_32: u128 = (1 << 96) - 1;

/// Const function to create a 16-bit Bluetooth UUID
pub const fn bluetooth_uuid_from_u16(uuid: u16) -> Uuid {
    bluetooth_uuid_from_u32(uuid as u32)
}

/// Const function to create a 32-bit Bluetooth UUID
pub const fn bluetooth_uuid_from_u32(uuid: u32) -> Uuid {
    Uuid::from_u128(((uuid as u128) << 96) | BLUETOOTH_BASE_UUID)
}

/// Extension trait for [uuid::Uuid] with helpers for Bluetooth short UUIDs and [`GattUuid`]
pub trait BluetoothUuidExt: private::Sealed {
    /// Creates a 16-bit Bluetooth UUID
    fn from_u16(uuid: u16) -> Self;

    /// Creates a 32-bit Bluetooth UUID
    fn from_u32(uuid: u32) -> Self;

    /// Returns `true` if self is a valid 16-bit Bluetooth UUID
    fn is_u16_uuid(&self) -> bool;

    /// Returns `true` if self is a valid 32-bit Bluetooth UUID
    fn is_u32_uuid(&self) -> bool;

    /// Tries to convert self into a 16-bit Bluetooth UUID
    fn try_to_u16(&self) -> Option<u16>;

    /// Tries to convert self into a 32-bit Bluetooth UUID
    fn try_to_u32(&self) -> Option<u32>;

    /// Converts self into a [`GattUuid`] tagged with the narrowest width that represents it.
    ///
    /// Unlike `GattUuid::from(uuid)`, which always records a 128-bit width, a UUID built on the Base UUID comes back
    /// as a 16- or 32-bit value.
    fn to_gatt_uuid(&self) -> GattUuid;
}

impl BluetoothUuidExt for Uuid {
    fn from_u16(uuid: u16) -> Self {
        bluetooth_uuid_from_u16(uuid)
    }

    fn from_u32(uuid: u32) -> Self {
        bluetooth_uuid_from_u32(uuid)
    }

    fn is_u16_uuid(&self) -> bool {
        self.is_u32_uuid() && (self.as_u128() >> 112) == 0
    }

    fn is_u32_uuid(&self) -> bool {
        (self.as_u128() & BLUETOOTH_BASE_MASK_32) == BLUETOOTH_BASE_UUID
    }

    fn try_to_u16(&self) -> Option<u16> {
        self.is_u16_uuid().then(|| (self.as_u128() >> 96) as u16)
    }

    fn try_to_u32(&self) -> Option<u32> {
        self.is_u32_uuid().then(|| (self.as_u128() >> 96) as u32)
    }

    fn to_gatt_uuid(&self) -> GattUuid {
        if let Some(short) = self.try_to_u16() {
            GattUuid::from_u16(short)
        } else if let Some(short) = self.try_to_u32() {
            GattUuid::from_u32(short)
        } else {
            GattUuid::from_u128(self.as_u128())
        }
    }
}

mod private {
    use uuid::Uuid;

    pub trait Sealed {}

    impl Sealed for Uuid {}
}

/// Bluetooth GATT Service 16-bit assigned numbers
pub mod services {
    #![allow(missing_docs)]

    pub const GENERIC_ACCESS: u16 = 0x1800;
    pub const GENERIC_ATTRIBUTE: u16 = 0x1801;
    pub const DEVICE_INFORMATION: u16 = 0x180A;
    pub const HEART_RATE: u16 = 0x180D;
    pub const BATTERY: u16 = 0x180F;
    pub const ENVIRONMENTAL_SENSING: u16 = 0x181A;
    pub const OBJECT_TRANSFER: u16 = 0x1825;
}

/// Bluetooth GATT Characteristic 16-bit assigned numbers
pub mod characteristics {
    #![allow(missing_docs)]

    pub const DEVICE_NAME: u16 = 0x2A00;
    pub const APPEARANCE: u16 = 0x2A01;
    pub const SERVICE_CHANGED: u16 = 0x2A05;
    pub const BATTERY_LEVEL: u16 = 0x2A19;
    pub const MODEL_NUMBER_STRING: u16 = 0x2A24;
    pub const MANUFACTURER_NAME_STRING: u16 = 0x2A29;
    pub const CURRENT_TIME: u16 = 0x2A2B;
    pub const HEART_RATE_MEASUREMENT: u16 = 0x2A37;
}

/// Bluetooth GATT Descriptor 16-bit assigned numbers
pub mod descriptors {
    #![allow(missing_docs)]

    pub const CHARACTERISTIC_EXTENDED_PROPERTIES: u16 = 0x2900;
    pub const CHARACTERISTIC_USER_DESCRIPTION: u16 = 0x2901;
    pub const CLIENT_CHARACTERISTIC_CONFIGURATION: u16 = 0x2902;
    pub const SERVER_CHARACTERISTIC_CONFIGURATION: u16 = 0x2903;
    pub const CHARACTERISTIC_PRESENTATION_FORMAT: u16 = 0x2904;
    pub const CHARACTERISTIC_AGGREGATE_FORMAT: u16 = 0x2905;
}
