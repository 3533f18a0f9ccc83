//! Demo: estimate mortar for two rooms at a 1:4 mix and print the table.

use mortar_calc::estimator::RoomInput;
use mortar_calc::lifecycle::{setup_tracing, EstimatorSystem, SystemConfig};
use mortar_calc::model::SheetCreate;
use mortar_calc::sheet_actor::SheetError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting mortar estimator");

    let system = EstimatorSystem::with_config(config);

    let sheet = SheetCreate {
        cement_ratio: "1".to_string(),
        sand_ratio: "4".to_string(),
        rooms: vec![
            RoomInput::new("Living Room", 5, 4, 3, 0.15),
            RoomInput::new("Bedroom", 4, 3.5, 3, 0.2),
        ],
    };

    let span = tracing::info_span!("estimate");
    let estimate = async {
        let id = system.sheet_client.create_sheet(sheet).await?;
        info!(sheet_id = %id, "Sheet created");
        let estimate = system.sheet_client.calculate(id).await?;
        Ok::<_, SheetError>(estimate)
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    match estimate {
        Some(estimate) => println!("{estimate}"),
        None => warn!("Mix ratio declined, nothing to show"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
