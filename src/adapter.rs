use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use crate::bt_addr::{BtAddr, ParseBtAddrError};

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Failed to run `hcitool dev`: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("No local Bluetooth adapter reported by `hcitool dev`")]
    NoAdapter,

    #[error("Unparseable adapter address \"{0}\": {1}")]
    BadAddress(String, ParseBtAddrError),
}

/// Source of the host's own Bluetooth adapter address, used as the master
/// when no address is given on the command line.
#[async_trait]
pub trait LocalAdapter {
    async fn address(&self) -> Result<BtAddr, AdapterError>;
}

/// Queries the host Bluetooth stack through `hcitool dev`.
pub struct HciAdapter;

#[async_trait]
impl LocalAdapter for HciAdapter {
    async fn address(&self) -> Result<BtAddr, AdapterError> {
        let output = Command::new("hcitool").arg("dev").output().await?;
        parse_hcitool_dev(&String::from_utf8_lossy(&output.stdout))
    }
}

/// `hcitool dev` prints a "Devices:" banner followed by one
/// "\thci0\tXX:XX:XX:XX:XX:XX" line per adapter. The first adapter wins.
fn parse_hcitool_dev(output: &str) -> Result<BtAddr, AdapterError> {
    let line = output.lines().nth(1).ok_or(AdapterError::NoAdapter)?;
    let addr = line
        .split_whitespace()
        .nth(1)
        .ok_or(AdapterError::NoAdapter)?;
    addr.parse()
        .map_err(|e| AdapterError::BadAddress(addr.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_adapter() {
        let output = "Devices:\n\thci0\t11:22:33:44:55:66\n";
        let addr = parse_hcitool_dev(output).unwrap();
        assert_eq!(addr.to_string(), "11:22:33:44:55:66");
    }

    #[test]
    fn test_parse_takes_first_of_several_adapters() {
        let output = "Devices:\n\thci0\tAA:BB:CC:DD:EE:FF\n\thci1\t11:22:33:44:55:66\n";
        let addr = parse_hcitool_dev(output).unwrap();
        assert_eq!(addr.to_string(), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn test_parse_banner_only_means_no_adapter() {
        let err = parse_hcitool_dev("Devices:\n").unwrap_err();
        assert!(matches!(err, AdapterError::NoAdapter));
    }

    #[test]
    fn test_parse_empty_output_means_no_adapter() {
        let err = parse_hcitool_dev("").unwrap_err();
        assert!(matches!(err, AdapterError::NoAdapter));
    }

    #[test]
    fn test_parse_garbled_address_is_reported() {
        let output = "Devices:\n\thci0\tnot-an-address\n";
        let err = parse_hcitool_dev(output).unwrap_err();
        assert!(matches!(err, AdapterError::BadAddress(addr, _) if addr == "not-an-address"));
    }
}
