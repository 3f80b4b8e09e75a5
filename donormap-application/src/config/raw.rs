use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("donormap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub socket: Option<Socket>,
    pub app: Option<App>,
    pub throttle: Option<Throttle>,
    pub map: Option<MapView>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: String,
}

impl Default for Api {
    fn default() -> Self {
        Config::default().api.expect("API configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Socket {
    pub url: String,
}

impl Default for Socket {
    fn default() -> Self {
        Config::default().socket.expect("Socket configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct App {
    pub base_path: String,
}

impl Default for App {
    fn default() -> Self {
        Config::default().app.expect("App configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Throttle {
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub cooldown: Option<Duration>,
}

impl Default for Throttle {
    fn default() -> Self {
        Config::default().throttle.expect("Throttle configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MapView {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}
