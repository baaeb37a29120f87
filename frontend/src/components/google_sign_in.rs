//! "Sign in with Google" button rendered by Google Identity Services.
//!
//! The GSI script is loaded by `index.html`. This component only initializes
//! it and hands the credential string (or the lack of one) to its caller.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn gsi_initialize(config: &Object) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn gsi_render_button(parent: &HtmlElement, options: &Object) -> Result<(), JsValue>;
}

#[derive(Properties, PartialEq)]
pub struct GoogleSignInButtonProps {
    pub on_success: Callback<String>,
    pub on_error: Callback<()>,
}

fn credential_of(response: &JsValue) -> Option<String> {
    Reflect::get(response, &JsValue::from_str("credential"))
        .ok()
        .and_then(|value| value.as_string())
}

fn object_with(entries: &[(&str, &JsValue)]) -> Result<Object, JsValue> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object)
}

fn render_into(parent: &HtmlElement, callback: &Closure<dyn FnMut(JsValue)>) -> Result<(), JsValue> {
    let init = object_with(&[
        ("client_id", &JsValue::from_str(config::google_client_id())),
        ("callback", callback.as_ref()),
    ])?;
    gsi_initialize(&init)?;

    let options = object_with(&[
        ("theme", &JsValue::from_str("outline")),
        ("size", &JsValue::from_str("large")),
        ("width", &JsValue::from_f64(320.0)),
    ])?;
    gsi_render_button(parent, &options)
}

// GSI keeps whatever callback it was last initialized with, so point it at a
// plain JS no-op before the Rust closure is freed.
fn detach() -> Result<(), JsValue> {
    let init = object_with(&[
        ("client_id", &JsValue::from_str(config::google_client_id())),
        ("callback", &JsValue::from(Function::new_no_args(""))),
    ])?;
    gsi_initialize(&init)
}

#[function_component(GoogleSignInButton)]
pub fn google_sign_in_button(props: &GoogleSignInButtonProps) -> Html {
    let container = use_node_ref();
    let on_success = use_latest(props.on_success.clone());
    let on_error = use_latest(props.on_error.clone());

    {
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                let callback = {
                    let on_error = on_error.clone();
                    Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
                        match credential_of(&response) {
                            Some(credential) => on_success.current().emit(credential),
                            None => on_error.current().emit(()),
                        }
                    })
                };

                match container.cast::<HtmlElement>() {
                    Some(parent) => {
                        if let Err(e) = render_into(&parent, &callback) {
                            gloo_console::error!("Google Identity Services unavailable", e);
                            on_error.current().emit(());
                        }
                    }
                    None => on_error.current().emit(()),
                }

                move || {
                    if let Err(e) = detach() {
                        log::debug!("could not detach sign-in callback: {:?}", e);
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div class="google-sign-in" ref={container}></div>
    }
}
