use nusb::DeviceInfo;

pub mod errors;
pub mod requests;
mod sixaxis_interface;

pub use sixaxis_interface::SixaxisInterface;

use crate::usb::errors::SixaxisError;

pub const SIXAXIS_VENDOR_ID: u16 = 0x054c;
pub const SIXAXIS_PRODUCT_ID: u16 = 0x0268;
pub const HID_INTERFACE_CLASS: u8 = 3;

/// Interface numbers of every HID interface on a Sixaxis controller.
/// Empty for any other device. Each qualifying interface is configured
/// once, regardless of how many endpoints it exposes.
pub fn controller_interfaces(device_info: &DeviceInfo) -> Vec<u8> {
    matching_interfaces(
        device_info.vendor_id(),
        device_info.product_id(),
        device_info
            .interfaces()
            .map(|interface| (interface.interface_number(), interface.class())),
    )
}

/// Matching over plain descriptor values: `interfaces` yields
/// (interface number, interface class) pairs.
fn matching_interfaces(
    vendor_id: u16,
    product_id: u16,
    interfaces: impl Iterator<Item = (u8, u8)>,
) -> Vec<u8> {
    if vendor_id != SIXAXIS_VENDOR_ID || product_id != SIXAXIS_PRODUCT_ID {
        return Vec::new();
    }
    interfaces
        .filter(|&(_, class)| class == HID_INTERFACE_CLASS)
        .map(|(number, _)| number)
        .collect()
}

pub async fn open_controller_interface(
    device_info: &DeviceInfo,
    interface_number: u8,
) -> Result<SixaxisInterface, SixaxisError> {
    let device = device_info.open().map_err(SixaxisError::Open)?;

    // The kernel hid driver binds the controller on Linux and has to let go
    // before the interface can be claimed.
    #[cfg(target_os = "linux")]
    let interface = device
        .detach_and_claim_interface(interface_number)
        .map_err(|source| SixaxisError::Claim {
            interface: interface_number,
            source,
        })?;
    #[cfg(not(target_os = "linux"))]
    let interface = device
        .claim_interface(interface_number)
        .map_err(|source| SixaxisError::Claim {
            interface: interface_number,
            source,
        })?;

    Ok(SixaxisInterface::new(interface))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_rejects_wrong_vendor() {
        let interfaces = [(0u8, HID_INTERFACE_CLASS)];
        let matched =
            matching_interfaces(0x046d, SIXAXIS_PRODUCT_ID, interfaces.into_iter());
        assert!(matched.is_empty());
    }

    #[test]
    fn test_matching_rejects_wrong_product() {
        let interfaces = [(0u8, HID_INTERFACE_CLASS)];
        let matched = matching_interfaces(SIXAXIS_VENDOR_ID, 0x05c4, interfaces.into_iter());
        assert!(matched.is_empty());
    }

    #[test]
    fn test_matching_filters_non_hid_interfaces() {
        // Class 0xE0 is the controller's Bluetooth radio side, class 1 audio.
        let interfaces = [(0u8, HID_INTERFACE_CLASS), (1, 0xE0), (2, 1)];
        let matched = matching_interfaces(
            SIXAXIS_VENDOR_ID,
            SIXAXIS_PRODUCT_ID,
            interfaces.into_iter(),
        );
        assert_eq!(matched, vec![0]);
    }

    #[test]
    fn test_matching_returns_every_hid_interface() {
        let interfaces = [(0u8, HID_INTERFACE_CLASS), (3, HID_INTERFACE_CLASS)];
        let matched = matching_interfaces(
            SIXAXIS_VENDOR_ID,
            SIXAXIS_PRODUCT_ID,
            interfaces.into_iter(),
        );
        assert_eq!(matched, vec![0, 3]);
    }

    #[test]
    fn test_matching_with_no_interfaces_is_empty() {
        let matched = matching_interfaces(
            SIXAXIS_VENDOR_ID,
            SIXAXIS_PRODUCT_ID,
            std::iter::empty(),
        );
        assert!(matched.is_empty());
    }
}
