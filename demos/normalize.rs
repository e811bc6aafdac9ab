use std::error::Error;

use gatt_uuid::btuuid::{descriptors, services};
use gatt_uuid::GattUuid;
use tracing::{info, metadata::LevelFilter, warn};

fn main() -> Result<(), Box<dyn Error>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = vec![
            "2901".into(),
            "0000180A".into(),
            "0000180A/0000.1000_zzzzzz_8000+00805f9b34fb".into(),
            "00000002-1E3C-FAD4-74E2-97A033F1BFAA".into(),
            "rqzp".into(),
        ];
    }

    for input in &inputs {
        let uuid = GattUuid::new(input);
        if uuid.is_valid() {
            info!(input = %input, bits = uuid.bit_count(), short = %uuid, full = uuid.full(), "normalized");
        } else {
            warn!(input = %input, "not a GATT UUID");
        }
    }

    let strict: GattUuid = "2A19".parse()?;
    info!(
        battery_service = %GattUuid::from_u16(services::BATTERY),
        user_description = %GattUuid::from_u16(descriptors::CHARACTERISTIC_USER_DESCRIPTION).full(),
        battery_level = %strict,
        "assigned numbers"
    );

    Ok(())
}
