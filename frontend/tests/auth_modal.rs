// Browser tests for the login/signup modal, driven through a fake Google
// Identity Services object so credentials can be delivered on demand.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{
    cleanup, click, create_mount_point, deliver_credential, exists, install_fake_gsi,
    remove_fake_gsi, settle, text, ANN_TOKEN,
};
use wasm_bindgen_test::*;
use yew::prelude::*;

use learnhub::components::auth_modal::AuthModal;
use learnhub::components::error_boundary::ErrorBoundary;
use learnhub::state::{AuthAction, AuthMode, AuthPanel};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    open: bool,
    mode: AuthMode,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let mode = props.mode;
    let panel = use_reducer(move || AuthPanel::new(mode));
    let on_action = {
        let panel = panel.dispatcher();
        Callback::from(move |action: AuthAction| panel.dispatch(action))
    };

    html! {
        <ErrorBoundary>
            <AuthModal
                open={props.open}
                panel={(*panel).clone()}
                {on_action}
                on_close={Callback::noop()}
            />
        </ErrorBoundary>
    }
}

fn render(open: bool, mode: AuthMode) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<Harness>::with_root_and_props(mount.clone(), HarnessProps { open, mode })
        .render();
    mount
}

#[wasm_bindgen_test]
async fn closed_modal_renders_nothing() {
    let mount = render(false, AuthMode::Login);
    settle().await;

    assert!(!exists(&mount, ".auth-overlay"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn opens_in_requested_mode() {
    install_fake_gsi();
    let mount = render(true, AuthMode::Signup);
    settle().await;

    assert!(exists(&mount, ".signup-form"));
    assert!(!exists(&mount, ".login-form"));
    assert!(exists(&mount, ".auth-tab.tab-signup.active"));

    cleanup(&mount);
    remove_fake_gsi();
}

#[wasm_bindgen_test]
async fn tabs_swap_between_disjoint_forms() {
    install_fake_gsi();
    let mount = render(true, AuthMode::Login);
    settle().await;

    assert!(exists(&mount, ".login-form"));
    assert!(!exists(&mount, ".signup-form"));

    click(&mount, ".tab-signup");
    settle().await;
    assert!(exists(&mount, ".signup-form"));
    assert!(!exists(&mount, ".login-form"));

    click(&mount, ".tab-login");
    settle().await;
    assert!(exists(&mount, ".login-form"));

    cleanup(&mount);
    remove_fake_gsi();
}

#[wasm_bindgen_test]
async fn missing_sign_in_library_is_not_fatal() {
    remove_fake_gsi();
    let mount = render(true, AuthMode::Login);
    settle().await;

    assert!(exists(&mount, ".login-form"));
    assert!(!text(&mount).contains("Something went wrong."));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn decoded_identity_survives_mode_switch() {
    install_fake_gsi();
    let mount = render(true, AuthMode::Login);
    settle().await;

    deliver_credential(ANN_TOKEN);
    settle().await;

    assert!(exists(&mount, ".identity-card"));
    assert!(text(&mount).contains("Welcome, Ann!"));
    assert!(text(&mount).contains("a@b.com"));
    assert!(!exists(&mount, ".login-form"));

    click(&mount, ".tab-signup");
    settle().await;
    assert!(exists(&mount, ".auth-tab.tab-signup.active"));
    assert!(text(&mount).contains("Welcome, Ann!"));

    click(&mount, ".identity-sign-out");
    settle().await;
    assert!(!exists(&mount, ".identity-card"));
    assert!(exists(&mount, ".signup-form"));

    cleanup(&mount);
    remove_fake_gsi();
}

#[wasm_bindgen_test]
async fn signing_in_after_a_tab_switch_keeps_that_tab() {
    install_fake_gsi();
    let mount = render(true, AuthMode::Login);
    settle().await;

    click(&mount, ".tab-signup");
    settle().await;
    deliver_credential(ANN_TOKEN);
    settle().await;

    assert!(exists(&mount, ".auth-tab.tab-signup.active"));
    assert!(!exists(&mount, ".auth-tab.tab-login.active"));
    assert!(text(&mount).contains("Welcome, Ann!"));

    cleanup(&mount);
    remove_fake_gsi();
}

#[wasm_bindgen_test]
async fn credential_after_the_button_unmounts_is_ignored() {
    install_fake_gsi();
    let mount = render(true, AuthMode::Login);
    settle().await;

    deliver_credential(ANN_TOKEN);
    settle().await;
    assert!(!exists(&mount, ".google-sign-in"));

    // The button is gone, so this must land on the detached no-op callback.
    deliver_credential("only.two");
    settle().await;

    assert!(!text(&mount).contains("Something went wrong."));
    assert!(text(&mount).contains("Welcome, Ann!"));

    cleanup(&mount);
    remove_fake_gsi();
}

#[wasm_bindgen_test]
async fn malformed_credential_trips_the_boundary() {
    install_fake_gsi();
    let mount = render(true, AuthMode::Login);
    settle().await;

    deliver_credential("only.two");
    settle().await;

    assert!(text(&mount).contains("Something went wrong."));
    assert!(!exists(&mount, ".auth-overlay"));

    click(&mount, ".boundary-retry");
    settle().await;
    assert!(exists(&mount, ".auth-overlay"));
    assert!(exists(&mount, ".login-form"));

    cleanup(&mount);
    remove_fake_gsi();
}
