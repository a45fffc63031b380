//! Effect configuration: defaults, and permissive override merging.
//!
//! Overrides come from the caller's options object (or a YAML string) and
//! are merged over the defaults. A falsy override (zero, empty string,
//! empty or zero-valued range, absent key) falls back to the default
//! rather than being rejected; no further validation is done.

use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 100;
pub const DEFAULT_BACKGROUND_COLOR: &str = "rgba(17, 82, 248, 0.52)";
pub const DEFAULT_NCLOUDS: usize = 10;
pub const DEFAULT_CLOUD_RADIUS: f64 = 50.0;
pub const DEFAULT_CLOUD_WIDTH: f64 = 50.0;
pub const DEFAULT_CLOUD_SPEED_RANGE: [f64; 2] = [0.5, 2.0];
pub const DEFAULT_PUFFS_PER_CLOUD: usize = 10;

/// Resolved configuration, fixed for the lifetime of the effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub update_interval_ms: u32,
    pub background_color: String,
    pub nclouds: usize,
    pub cloud_radius: f64,
    pub cloud_width: f64,
    pub cloud_speed_range: [f64; 2],
    pub puffs_per_cloud: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            nclouds: DEFAULT_NCLOUDS,
            cloud_radius: DEFAULT_CLOUD_RADIUS,
            cloud_width: DEFAULT_CLOUD_WIDTH,
            cloud_speed_range: DEFAULT_CLOUD_SPEED_RANGE,
            puffs_per_cloud: DEFAULT_PUFFS_PER_CLOUD,
        }
    }
}

/// Caller-supplied overrides; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub update_interval: Option<u32>,
    pub background_color: Option<String>,
    pub nclouds: Option<usize>,
    pub cloud_radius: Option<f64>,
    pub cloud_width: Option<f64>,
    pub cloud_speed_range: Option<Vec<f64>>,
    pub puffs_per_cloud: Option<usize>,
}

impl Overrides {
    /// Parse overrides from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
    }

    /// Read overrides from a JS options object. Unknown keys are ignored;
    /// values of the wrong type read as absent.
    pub fn from_js(options: &JsValue) -> Self {
        if !options.is_object() {
            return Self::default();
        }

        Self {
            update_interval: get_f64(options, "updateInterval").map(|v| v as u32),
            background_color: get_string(options, "backgroundColor"),
            nclouds: get_f64(options, "nclouds").map(|v| v as usize),
            cloud_radius: get_f64(options, "cloudRadius"),
            cloud_width: get_f64(options, "cloudWidth"),
            cloud_speed_range: get_pair(options, "cloudSpeedRange"),
            puffs_per_cloud: get_f64(options, "puffsPerCloud").map(|v| v as usize),
        }
    }
}

fn get_f64(options: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

fn get_string(options: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn get_pair(options: &JsValue, key: &str) -> Option<Vec<f64>> {
    let value = js_sys::Reflect::get(options, &JsValue::from_str(key)).ok()?;
    if !js_sys::Array::is_array(&value) {
        return None;
    }
    let array = js_sys::Array::from(&value);
    Some(array.iter().filter_map(|v| v.as_f64()).collect())
}

impl Config {
    /// Merge overrides over the defaults. Falsy values fall back.
    pub fn resolve(overrides: &Overrides) -> Self {
        let defaults = Self::default();

        Self {
            update_interval_ms: overrides
                .update_interval
                .filter(|v| *v != 0)
                .unwrap_or(defaults.update_interval_ms),
            background_color: overrides
                .background_color
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.background_color),
            nclouds: overrides
                .nclouds
                .filter(|v| *v != 0)
                .unwrap_or(defaults.nclouds),
            cloud_radius: overrides
                .cloud_radius
                .filter(|v| *v != 0.0)
                .unwrap_or(defaults.cloud_radius),
            cloud_width: overrides
                .cloud_width
                .filter(|v| *v != 0.0)
                .unwrap_or(defaults.cloud_width),
            cloud_speed_range: overrides
                .cloud_speed_range
                .as_deref()
                .and_then(|r| match r {
                    [min, max] if *min != 0.0 || *max != 0.0 => Some([*min, *max]),
                    _ => None,
                })
                .unwrap_or(defaults.cloud_speed_range),
            puffs_per_cloud: overrides
                .puffs_per_cloud
                .filter(|v| *v != 0)
                .unwrap_or(defaults.puffs_per_cloud),
        }
    }
}
