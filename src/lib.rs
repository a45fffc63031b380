//! Animated drifting-cloud background for the browser.
//!
//! Scatters a fixed set of clouds over a canvas and drifts them to the
//! right on a fixed-interval timer, wrapping seamlessly at the screen
//! edge. Call [`main`] from JS with an optional options object.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

pub mod animation;
pub mod config;
pub mod math;
pub mod render;
pub mod sky;

use animation::Driver;
use config::{Config, Overrides};
use render::CanvasSurface;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Start the effect. `options` may carry overrides for any of the
/// recognized keys (`updateInterval`, `backgroundColor`, `nclouds`,
/// `cloudRadius`, `cloudWidth`, `cloudSpeedRange`, `puffsPerCloud`) plus
/// an optional `canvas` to draw on; with no canvas a screen-sized one is
/// created behind the page content. Falsy overrides fall back to the
/// defaults. The effect runs until the page goes away.
#[wasm_bindgen]
pub fn main(options: JsValue) -> Result<(), JsValue> {
    let config = Config::resolve(&Overrides::from_js(&options));

    let surface = match supplied_canvas(&options)? {
        Some(canvas) => CanvasSurface::from_canvas(&canvas)?,
        None => CanvasSurface::create_background()?,
    };

    let seed = js_sys::Date::now() as u64 as u32;
    let mut driver = Driver::new(surface, config, seed);

    web_sys::console::log_1(
        &format!(
            "cloud-drift: {} clouds, {}ms tick",
            driver.clouds().len(),
            driver.config().update_interval_ms
        )
        .into(),
    );

    let interval_ms = driver.config().update_interval_ms as i32;
    let tick = Closure::wrap(Box::new(move || driver.tick()) as Box<dyn FnMut()>);

    web_sys::window()
        .ok_or("No window")?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            interval_ms,
        )?;

    // no stop API: the closure lives as long as the page
    tick.forget();

    Ok(())
}

fn supplied_canvas(options: &JsValue) -> Result<Option<HtmlCanvasElement>, JsValue> {
    if !options.is_object() {
        return Ok(None);
    }

    let value = js_sys::Reflect::get(options, &JsValue::from_str("canvas"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    Ok(Some(value.dyn_into::<HtmlCanvasElement>()?))
}
