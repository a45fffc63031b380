//! Boundary tests for the JS options object intake.

#![cfg(target_arch = "wasm32")]

use cloud_drift::config::{Config, Overrides};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn set(obj: &Object, key: &str, value: JsValue) {
    Reflect::set(obj, &JsValue::from_str(key), &value).unwrap();
}

#[wasm_bindgen_test]
fn from_js_reads_recognized_keys() {
    let options = Object::new();
    set(&options, "updateInterval", JsValue::from_f64(16.0));
    set(&options, "backgroundColor", JsValue::from_str("black"));
    set(&options, "nclouds", JsValue::from_f64(3.0));
    set(&options, "cloudRadius", JsValue::from_f64(10.0));
    set(&options, "cloudWidth", JsValue::from_f64(20.0));
    set(
        &options,
        "cloudSpeedRange",
        Array::of2(&JsValue::from_f64(1.0), &JsValue::from_f64(4.0)).into(),
    );
    set(&options, "puffsPerCloud", JsValue::from_f64(5.0));

    let config = Config::resolve(&Overrides::from_js(&options.into()));
    assert_eq!(config.update_interval_ms, 16);
    assert_eq!(config.background_color, "black");
    assert_eq!(config.nclouds, 3);
    assert_eq!(config.cloud_radius, 10.0);
    assert_eq!(config.cloud_width, 20.0);
    assert_eq!(config.cloud_speed_range, [1.0, 4.0]);
    assert_eq!(config.puffs_per_cloud, 5);
}

#[wasm_bindgen_test]
fn from_js_falsy_values_fall_back() {
    let options = Object::new();
    set(&options, "updateInterval", JsValue::from_f64(0.0));
    set(&options, "backgroundColor", JsValue::from_str(""));
    set(&options, "nclouds", JsValue::from_f64(0.0));

    let config = Config::resolve(&Overrides::from_js(&options.into()));
    assert_eq!(config, Config::default());
}

#[wasm_bindgen_test]
fn from_js_undefined_options_resolve_to_defaults() {
    let config = Config::resolve(&Overrides::from_js(&JsValue::UNDEFINED));
    assert_eq!(config, Config::default());
}

#[wasm_bindgen_test]
fn from_js_wrong_types_read_as_absent() {
    let options = Object::new();
    set(&options, "nclouds", JsValue::from_str("lots"));
    set(&options, "cloudSpeedRange", JsValue::from_f64(2.0));

    let config = Config::resolve(&Overrides::from_js(&options.into()));
    assert_eq!(config, Config::default());
}
