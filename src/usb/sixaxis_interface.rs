use async_trait::async_trait;
use nusb::transfer::{ControlIn, ControlOut, ControlType, Recipient};
use nusb::Interface;

use crate::bt_addr::BtAddr;
use crate::pairing::MasterPort;
use crate::usb::errors::SixaxisError;
use crate::usb::requests;
use crate::usb::requests::HidRequestCode;

/// A claimed HID interface of a Sixaxis controller.
pub struct SixaxisInterface {
    interface: Interface,
}

impl SixaxisInterface {
    pub fn new(interface: Interface) -> Self {
        Self { interface }
    }

    async fn get_master_report(&self) -> Result<Vec<u8>, SixaxisError> {
        let control_in = ControlIn {
            control_type: ControlType::Class,
            recipient: Recipient::Interface,
            request: HidRequestCode::GetReport as u8,
            value: requests::MASTER_REPORT_VALUE,
            index: self.interface.interface_number() as u16,
            length: requests::MASTER_REPORT_LEN as u16,
        };
        let completion = tokio::time::timeout(
            requests::CONTROL_TIMEOUT,
            self.interface.control_in(control_in),
        )
        .await
        .map_err(|_| SixaxisError::Timeout(requests::CONTROL_TIMEOUT))?;
        Ok(completion.into_result()?)
    }

    async fn set_master_report(&self, report: &[u8]) -> Result<(), SixaxisError> {
        let control_out = ControlOut {
            control_type: ControlType::Class,
            recipient: Recipient::Interface,
            request: HidRequestCode::SetReport as u8,
            value: requests::MASTER_REPORT_VALUE,
            index: self.interface.interface_number() as u16,
            data: report,
        };
        let completion = tokio::time::timeout(
            requests::CONTROL_TIMEOUT,
            self.interface.control_out(control_out),
        )
        .await
        .map_err(|_| SixaxisError::Timeout(requests::CONTROL_TIMEOUT))?;
        completion.into_result()?;
        Ok(())
    }
}

#[async_trait]
impl MasterPort for SixaxisInterface {
    async fn current_master(&self) -> Result<BtAddr, SixaxisError> {
        let report = self.get_master_report().await?;
        requests::decode_master_report(&report)
    }

    async fn set_master(&self, addr: &BtAddr) -> Result<(), SixaxisError> {
        let report = requests::encode_master_report(addr);
        self.set_master_report(&report).await
    }
}
