use std::process::ExitCode;

use anyhow::Context;
use log::{error, warn};
use nusb::DeviceInfo;

use sixpair::adapter::{HciAdapter, LocalAdapter};
use sixpair::bt_addr::BtAddr;
use sixpair::pairing::pair_with;
use sixpair::usb;

fn usage(program: &str) -> String {
    format!("Usage:\n{program} [<bd_addr of master>]")
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "sixpair".to_string());

    let master = match args.next() {
        Some(arg) => match arg.parse::<BtAddr>() {
            Ok(addr) => addr,
            Err(e) => {
                eprintln!("Invalid master address \"{arg}\": {e}");
                eprintln!("{}", usage(&program));
                return ExitCode::FAILURE;
            }
        },
        None => match HciAdapter.address().await {
            Ok(addr) => addr,
            Err(e) => {
                eprintln!("Unable to retrieve the local adapter address: {e}");
                eprintln!("Please enable Bluetooth or specify an address manually.");
                return ExitCode::FAILURE;
            }
        },
    };

    match run(&master).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            println!("No controller found on USB busses");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Walks the USB bus and pairs every Sixaxis controller to `master`.
/// Returns whether at least one controller was configured.
async fn run(master: &BtAddr) -> anyhow::Result<bool> {
    let devices: Vec<DeviceInfo> = match nusb::list_devices() {
        Ok(devices) => devices.collect(),
        Err(e) => {
            warn!("Failed to list USB devices: {e}");
            Vec::new()
        }
    };
    println!("{} devices in list", devices.len());

    let mut found = false;
    for device_info in &devices {
        println!(
            "{:04X}:{:04X}",
            device_info.vendor_id(),
            device_info.product_id()
        );

        for interface_number in usb::controller_interfaces(device_info) {
            describe_device(device_info, interface_number);

            let port = match usb::open_controller_interface(device_info, interface_number).await {
                Ok(port) => port,
                Err(e) => {
                    warn!("Skipping interface {interface_number}: {e}");
                    continue;
                }
            };

            pair_with(&port, master)
                .await
                .with_context(|| format!("Failed to set master on interface {interface_number}"))?;
            found = true;
        }
    }

    Ok(found)
}

fn describe_device(device_info: &DeviceInfo, interface_number: u8) {
    println!(
        "Sixaxis controller found: \"{}\" ({:04X}:{:04X})",
        device_info.product_string().unwrap_or("Unknown"),
        device_info.vendor_id(),
        device_info.product_id()
    );
    for interface in device_info.interfaces() {
        if interface.interface_number() != interface_number {
            continue;
        }
        println!("Interface number: {}", interface.interface_number());
        println!("Interface class: {}", interface.class());
        println!("Interface subclass: {}", interface.subclass());
        println!("Interface protocol: {}", interface.protocol());
    }
}
