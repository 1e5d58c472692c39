use crate::config::settings::LinkTimings;
use crate::utils::error::Result;
use serialport::{SerialPort, SerialPortInfo, SerialPortType};

/// Open the device port with the session's baud rate and per-read timeout.
pub fn open_port(name: &str, timings: &LinkTimings) -> Result<Box<dyn SerialPort>> {
    tracing::info!("Opening {} @ {} baud", name, timings.baud_rate);
    let port = serialport::new(name, timings.baud_rate)
        .timeout(timings.read_timeout)
        .open()?;
    Ok(port)
}

pub fn list_ports() -> Result<Vec<SerialPortInfo>> {
    let ports = serialport::available_ports()?;
    tracing::debug!("Found {} serial ports", ports.len());
    Ok(ports)
}

/// One-line description for `--list-ports`.
pub fn describe_port(info: &SerialPortInfo) -> String {
    match &info.port_type {
        SerialPortType::UsbPort(usb) => {
            let mut text = format!("{} (USB {:04x}:{:04x}", info.port_name, usb.vid, usb.pid);
            if let Some(product) = &usb.product {
                text.push_str(&format!(" {}", product));
            }
            text.push(')');
            text
        }
        SerialPortType::BluetoothPort => format!("{} (Bluetooth)", info.port_name),
        SerialPortType::PciPort => format!("{} (PCI)", info.port_name),
        SerialPortType::Unknown => info.port_name.clone(),
    }
}
