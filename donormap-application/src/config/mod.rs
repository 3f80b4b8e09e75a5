use std::{env, fs, io::ErrorKind, path::Path};

use anyhow::{anyhow, Result};
use donormap_entities::{geo::MapPoint, id::Id};
use time::Duration;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "donormap.toml";

const ENV_NAME_API_URL: &str = "DONOR_API_URL";

pub struct Config {
    pub api: Api,
    pub socket: Socket,
    pub app: App,
    pub throttle: Throttle,
    pub map: MapView,
}

pub struct Api {
    /// Base URL of the donor service REST API.
    pub base_url: String,
}

pub struct Socket {
    /// Endpoint of the push channel.
    pub url: String,
}

pub struct App {
    /// Public base path used for shareable posting links.
    pub base_path: String,
}

pub struct Throttle {
    /// Minimum gap between two bounding box searches of one map view.
    pub cooldown: Duration,
}

pub struct MapView {
    pub center: MapPoint,
    pub zoom: u8,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    info!("{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration.");
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_url) = env::var(ENV_NAME_API_URL) {
            cfg.api.base_url = api_url;
        }
        Ok(cfg)
    }

    /// Shareable detail link of a posting, e.g. for the confirmation
    /// dialog after a successful submission.
    pub fn posting_url(&self, id: &Id) -> String {
        format!("{}/donors/{}", self.app.base_path, id)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api,
            socket,
            app,
            throttle,
            map,
        } = from;
        let raw::Api { base_url } = api.unwrap_or_default();
        let raw::Socket { url } = socket.unwrap_or_default();
        let raw::App { base_path } = app.unwrap_or_default();
        let cooldown = throttle
            .unwrap_or_default()
            .cooldown
            .or_else(|| raw::Throttle::default().cooldown)
            .ok_or_else(|| anyhow!("Missing throttle cooldown"))?;
        let cooldown =
            Duration::try_from(cooldown).map_err(|err| anyhow!("Invalid throttle cooldown: {err}"))?;
        let raw::MapView {
            center_lat,
            center_lng,
            zoom,
        } = map.unwrap_or_default();
        let center = MapPoint::try_from_lat_lng_deg(center_lat, center_lng)
            .map_err(|err| anyhow!("Invalid map center: {err}"))?;
        Ok(Self {
            api: Api { base_url },
            socket: Socket { url },
            app: App { base_path },
            throttle: Throttle { cooldown },
            map: MapView { center, zoom },
        })
    }
}
