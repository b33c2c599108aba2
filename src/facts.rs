use reqwest::Client;
use std::net::{IpAddr, UdpSocket};
use sysinfo::System;

const PUBLIC_IP_URL: &str = "https://api.ipify.org?format=text";

/// Machine facts attached to a submission. Collection is best-effort: any
/// field that cannot be determined is left empty rather than failing the run.
#[derive(Debug)]
pub struct MachineFacts {
    pub host: String,
    pub user: String,
    pub os: String,
    pub version: String,
    pub uptime_secs: u64,
    pub local_ip: String,
    pub public_ip: String,
}

pub async fn collect(client: &Client) -> MachineFacts {
    MachineFacts {
        host: System::host_name().unwrap_or_default(),
        user: std::env::var("USER").unwrap_or_default(),
        os: std::env::consts::OS.to_string(),
        version: System::os_version().unwrap_or_default(),
        uptime_secs: System::uptime(),
        local_ip: local_ipv4().map(|ip| ip.to_string()).unwrap_or_default(),
        public_ip: public_ip(client).await.unwrap_or_default(),
    }
}

/// Routable local IPv4, discovered by opening a UDP socket towards a public
/// address. No packet is sent; this only asks the OS which interface routes.
fn local_ipv4() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_loopback()).then_some(ip)
}

async fn public_ip(client: &Client) -> Option<String> {
    let response = client.get(PUBLIC_IP_URL).send().await.ok()?;
    let response = response.error_for_status().ok()?;
    let body = response.text().await.ok()?;
    let ip = body.trim();
    (!ip.is_empty()).then(|| ip.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_family_is_populated() {
        assert!(!std::env::consts::OS.is_empty());
    }

    #[test]
    fn test_local_ipv4_is_not_loopback() {
        // On hosts without a route this is None, which maps to an empty field.
        if let Some(ip) = local_ipv4() {
            assert!(!ip.is_loopback());
        }
    }
}
