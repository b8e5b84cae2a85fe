use std::time::Duration;

use crate::bt_addr::{BtAddr, BT_ADDR_OCTETS};
use crate::usb::errors::SixaxisError;

/// HID class request codes used on the control endpoint.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidRequestCode {
    GetReport = 0x01,
    SetReport = 0x09,
}

/// wValue selecting the feature report that holds the master address
/// (report type 0x03 "feature", report id 0xf5).
pub const MASTER_REPORT_VALUE: u16 = 0x03f5;

/// The master report is 8 bytes in both directions.
pub const MASTER_REPORT_LEN: usize = 8;

/// Address octets sit after the two-byte report prefix.
const ADDR_OFFSET: usize = 2;

/// Per-transfer deadline.
pub const CONTROL_TIMEOUT: Duration = Duration::from_millis(5000);

/// Builds the outbound master report: `[0x01, 0x00, addr0..addr5]`.
pub fn encode_master_report(addr: &BtAddr) -> [u8; MASTER_REPORT_LEN] {
    let mut report = [0u8; MASTER_REPORT_LEN];
    report[0] = 0x01;
    report[1] = 0x00;
    report[ADDR_OFFSET..].copy_from_slice(&addr.octets());
    report
}

/// Extracts the address from an inbound master report, discarding the
/// two-byte prefix.
pub fn decode_master_report(report: &[u8]) -> Result<BtAddr, SixaxisError> {
    if report.len() < MASTER_REPORT_LEN {
        return Err(SixaxisError::ReportTooShort {
            expected: MASTER_REPORT_LEN,
            actual: report.len(),
        });
    }
    let mut octets = [0u8; BT_ADDR_OCTETS];
    octets.copy_from_slice(&report[ADDR_OFFSET..MASTER_REPORT_LEN]);
    Ok(BtAddr::new(octets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_master_report_layout() {
        let addr = BtAddr::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        let report = encode_master_report(&addr);
        assert_eq!(report, [0x01, 0x00, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn test_decode_master_report_skips_prefix() {
        let report = [0xFF, 0xFF, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
        let addr = decode_master_report(&report).unwrap();
        assert_eq!(addr.octets(), [0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
    }

    #[test]
    fn test_decode_master_report_rejects_short_buffer() {
        let err = decode_master_report(&[0x00; 7]).unwrap_err();
        assert!(matches!(
            err,
            SixaxisError::ReportTooShort {
                expected: MASTER_REPORT_LEN,
                actual: 7,
            }
        ));
    }

    #[test]
    fn test_encode_decode_agree_on_offsets() {
        let addr = BtAddr::new([1, 2, 3, 4, 5, 6]);
        let decoded = decode_master_report(&encode_master_report(&addr)).unwrap();
        assert_eq!(decoded, addr);
    }
}
