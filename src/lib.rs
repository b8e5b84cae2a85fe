pub mod adapter;
pub mod bt_addr;
pub mod pairing;
pub mod usb;

pub use adapter::{HciAdapter, LocalAdapter};
pub use bt_addr::BtAddr;
pub use pairing::{pair_with, MasterPort};
pub use usb::SixaxisInterface;
