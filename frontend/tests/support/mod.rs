// Shared helpers for the browser component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let Yew flush pending renders and effects.
pub async fn settle() {
    for _ in 0..3 {
        gloo_timers::future::TimeoutFuture::new(10).await;
    }
}

pub fn exists(mount: &Element, selector: &str) -> bool {
    mount.query_selector(selector).unwrap().is_some()
}

pub fn count(mount: &Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

pub fn text(mount: &Element) -> String {
    mount.text_content().unwrap_or_default()
}

pub fn click(mount: &Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

// ---------------------------------------------------------------------------
// Fake Google Identity Services
// ---------------------------------------------------------------------------

/// Install a stand-in for `window.google.accounts.id` that remembers the
/// credential callback instead of rendering a real button.
pub fn install_fake_gsi() {
    let initialize = Function::new_with_args("config", "window.__gsiCallback = config.callback;");
    let render_button = Function::new_no_args("");

    let id = Object::new();
    Reflect::set(&id, &"initialize".into(), &initialize).unwrap();
    Reflect::set(&id, &"renderButton".into(), &render_button).unwrap();
    let accounts = Object::new();
    Reflect::set(&accounts, &"id".into(), &id).unwrap();
    let google = Object::new();
    Reflect::set(&google, &"accounts".into(), &accounts).unwrap();

    Reflect::set(&gloo_utils::window(), &"google".into(), &google).unwrap();
}

pub fn remove_fake_gsi() {
    let window: Object = gloo_utils::window().into();
    let _ = Reflect::delete_property(&window, &"google".into());
    let _ = Reflect::delete_property(&window, &"__gsiCallback".into());
}

/// Deliver a credential response the way GSI would after a successful sign-in.
pub fn deliver_credential(token: &str) {
    let callback: Function = Reflect::get(&gloo_utils::window(), &"__gsiCallback".into())
        .unwrap()
        .dyn_into()
        .expect("GSI was never initialized");
    let response = Object::new();
    Reflect::set(&response, &"credential".into(), &token.into()).unwrap();
    callback.call1(&JsValue::NULL, &response).unwrap();
}

/// Token whose payload is `{"name":"Ann","email":"a@b.com","picture":"x"}`.
pub const ANN_TOKEN: &str =
    "eyJhbGciOiJSUzI1NiJ9.eyJuYW1lIjoiQW5uIiwiZW1haWwiOiJhQGIuY29tIiwicGljdHVyZSI6IngifQ.c2ln";
