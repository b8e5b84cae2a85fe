use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of octets in a Bluetooth device address.
pub const BT_ADDR_OCTETS: usize = 6;

/// A Bluetooth device address, stored in the octet order the controller
/// expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BtAddr([u8; BT_ADDR_OCTETS]);

impl BtAddr {
    pub const fn new(octets: [u8; BT_ADDR_OCTETS]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; BT_ADDR_OCTETS] {
        self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBtAddrError {
    #[error("Expected {BT_ADDR_OCTETS} colon-separated octets, got {0}")]
    WrongGroupCount(usize),

    #[error("Invalid hex octet \"{0}\"")]
    InvalidOctet(String),
}

impl FromStr for BtAddr {
    type Err = ParseBtAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = s.split(':').collect();
        if groups.len() != BT_ADDR_OCTETS {
            return Err(ParseBtAddrError::WrongGroupCount(groups.len()));
        }
        let mut octets = [0u8; BT_ADDR_OCTETS];
        for (octet, group) in octets.iter_mut().zip(&groups) {
            if group.is_empty() || group.len() > 2 {
                return Err(ParseBtAddrError::InvalidOctet(group.to_string()));
            }
            *octet = u8::from_str_radix(group, 16)
                .map_err(|_| ParseBtAddrError::InvalidOctet(group.to_string()))?;
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for BtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}
