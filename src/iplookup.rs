use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::IpAddr;

const LOOKUP_ENDPOINT: &str = "https://ipapi.co";

#[derive(Debug, Clone, Deserialize)]
pub struct IpInfo {
    pub ip: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_name: Option<String>,
    pub org: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub asn: Option<String>,

    // ipapi.co reports failures inside a 200 body.
    #[serde(default)]
    pub error: bool,
    pub reason: Option<String>,
}

pub fn parse_ip(input: &str) -> Result<IpAddr> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .with_context(|| format!("\"{}\" is not a valid IPv4 or IPv6 address", trimmed))
}

pub fn lookup(ip: IpAddr) -> Result<IpInfo> {
    let url = format!("{}/{}/json/", LOOKUP_ENDPOINT, ip);

    let response = reqwest::blocking::get(&url).context("Could not fetch IP information")?;

    if !response.status().is_success() {
        anyhow::bail!("Lookup service answered with status {}", response.status());
    }

    let info: IpInfo = response
        .json()
        .context("Lookup service answered with malformed data")?;

    if info.error {
        anyhow::bail!(
            "Lookup failed: {}",
            info.reason.as_deref().unwrap_or("unknown reason")
        );
    }

    Ok(info)
}

pub fn or_na(field: &Option<String>) -> &str {
    field.as_deref().filter(|s| !s.is_empty()).unwrap_or("N/A")
}
