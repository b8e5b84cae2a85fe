use async_trait::async_trait;
use log::warn;

use crate::bt_addr::BtAddr;
use crate::usb::errors::SixaxisError;

/// The two control exchanges a controller supports for its stored master
/// address. Split out so the pairing flow can run against a test double.
#[async_trait]
pub trait MasterPort {
    async fn current_master(&self) -> Result<BtAddr, SixaxisError>;
    async fn set_master(&self, addr: &BtAddr) -> Result<(), SixaxisError>;
}

/// Shows the master currently stored in the controller, then overwrites it
/// with `master`. A failed read is reported and skipped; the write is the
/// point of the whole run, so its error propagates. No read-back
/// verification is performed.
pub async fn pair_with<P: MasterPort + ?Sized>(
    port: &P,
    master: &BtAddr,
) -> Result<(), SixaxisError> {
    match port.current_master().await {
        Ok(current) => println!("Current Bluetooth master: {current}"),
        Err(e) => warn!("Failed to read current master: {e}"),
    }

    println!("Setting master bd_addr to {master}");
    port.set_master(master).await?;
    println!("Master bd_addr set to {master}");
    Ok(())
}
