use yew::prelude::*;

use crate::components::error_boundary::BoundaryHandle;
use crate::components::google_sign_in::GoogleSignInButton;
use crate::identity::{decode_identity, IdentitySnapshot};
use crate::state::{AuthAction, AuthMode, AuthPanel};

/// The panel state is owned by the caller so it outlives the modal being
/// closed; every change comes back through `on_action`.
#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub open: bool,
    pub panel: AuthPanel,
    pub on_action: Callback<AuthAction>,
    pub on_close: Callback<()>,
}

#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let boundary = use_context::<BoundaryHandle>();

    if !props.open {
        return html! {};
    }

    let panel = &props.panel;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let select_mode = |mode: AuthMode| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(AuthAction::SelectMode(mode)))
    };

    let on_credential = {
        let on_action = props.on_action.clone();
        Callback::from(move |token: String| {
            let decoded = decode_identity(&token);
            let identity = match &boundary {
                Some(boundary) => boundary.capture(decoded),
                None => decoded
                    .map_err(|e| log::error!("dropping undecodable credential: {}", e))
                    .ok(),
            };
            if let Some(identity) = identity {
                log::info!("displaying identity for {}", identity.email);
                on_action.emit(AuthAction::SignedIn(identity));
            }
        })
    };

    let on_sign_in_error = Callback::from(|_: ()| log::warn!("Login Failed"));

    let sign_out = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(AuthAction::SignedOut))
    };

    let tab = |mode: AuthMode| {
        html! {
            <button
                class={classes!("auth-tab", mode_class(mode), (panel.mode == mode).then(|| "active"))}
                onclick={select_mode(mode)}
            >
                {mode.label()}
            </button>
        }
    };

    html! {
        <div class="auth-overlay">
            <style>
            {r#".auth-overlay {
                position: fixed;
                inset: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.4);
            }
            .auth-dialog {
                position: relative;
                width: 100%;
                max-width: 28rem;
                background: #fff;
                border-radius: 1rem;
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                padding: 2rem;
            }
            .auth-close {
                position: absolute;
                top: 1rem;
                right: 1rem;
                background: none;
                border: none;
                font-size: 1.5rem;
                color: #9ca3af;
                cursor: pointer;
            }
            .auth-close:hover { color: #374151; }
            .auth-tabs {
                display: flex;
                justify-content: center;
                gap: 1rem;
                margin-bottom: 1.5rem;
            }
            .auth-tab {
                padding: 0.5rem 1rem;
                border-radius: 9999px;
                border: none;
                font-weight: 500;
                background: #f3f4f6;
                color: #374151;
                cursor: pointer;
            }
            .auth-tab.tab-login.active { background: #2563eb; color: #fff; }
            .auth-tab.tab-signup.active { background: #9333ea; color: #fff; }
            .auth-divider {
                display: flex;
                align-items: center;
                margin-bottom: 1rem;
                color: #9ca3af;
                font-size: 0.75rem;
            }
            .auth-divider::before, .auth-divider::after {
                content: '';
                flex-grow: 1;
                border-top: 1px solid #e5e7eb;
            }
            .auth-divider span { margin: 0 0.5rem; }
            .auth-form label {
                display: block;
                color: #374151;
                margin-bottom: 0.25rem;
            }
            .auth-form input {
                width: 100%;
                box-sizing: border-box;
                border: 1px solid #d1d5db;
                border-radius: 0.5rem;
                padding: 0.5rem 0.75rem;
                margin-bottom: 1rem;
            }
            .auth-submit {
                width: 100%;
                color: #fff;
                border: none;
                border-radius: 0.5rem;
                padding: 0.5rem;
                font-weight: 500;
                cursor: pointer;
            }
            .auth-form.login-form .auth-submit { background: #2563eb; }
            .auth-form.signup-form .auth-submit { background: #9333ea; }
            .google-sign-in {
                display: flex;
                justify-content: center;
                margin-bottom: 1rem;
            }
            .identity-card { text-align: center; margin-bottom: 1rem; }
            .identity-card img {
                width: 4rem;
                height: 4rem;
                border-radius: 9999px;
                margin: 0 auto 0.5rem;
                display: block;
            }
            .identity-name { font-weight: 700; font-size: 1.125rem; }
            .identity-email { color: #4b5563; font-size: 0.875rem; margin-bottom: 0.5rem; }
            .identity-sign-out {
                background: none;
                border: none;
                color: #2563eb;
                text-decoration: underline;
                cursor: pointer;
            }"#}
            </style>
            <div class="auth-dialog">
                <button class="auth-close" onclick={close}>{"✕"}</button>
                <div class="auth-tabs">
                    { tab(AuthMode::Login) }
                    { tab(AuthMode::Signup) }
                </div>
                {
                    match &panel.identity {
                        Some(identity) => identity_card(identity, sign_out),
                        None => html! {
                            <>
                                <GoogleSignInButton on_success={on_credential} on_error={on_sign_in_error} />
                                <div class="auth-divider"><span>{"or"}</span></div>
                                { auth_form(panel.mode) }
                            </>
                        },
                    }
                }
            </div>
        </div>
    }
}

fn mode_class(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "tab-login",
        AuthMode::Signup => "tab-signup",
    }
}

fn identity_card(identity: &IdentitySnapshot, sign_out: Callback<MouseEvent>) -> Html {
    html! {
        <div class="identity-card">
            if let Some(picture) = &identity.picture {
                <img src={picture.clone()} alt="Profile" />
            }
            <div class="identity-name">{format!("Welcome, {}!", identity.name)}</div>
            <div class="identity-email">{&identity.email}</div>
            <button class="identity-sign-out" onclick={sign_out}>{"Logout"}</button>
        </div>
    }
}

// Neither form talks to anything; submission is swallowed.
fn auth_form(mode: AuthMode) -> Html {
    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        log::debug!("{} form submitted, nothing to do", mode.label());
    });

    match mode {
        AuthMode::Login => html! {
            <form class="auth-form login-form" {onsubmit}>
                <label>{"Email"}</label>
                <input type="email" placeholder="Enter your email" />
                <label>{"Password"}</label>
                <input type="password" placeholder="Enter your password" />
                <button type="submit" class="auth-submit">{"Login"}</button>
            </form>
        },
        AuthMode::Signup => html! {
            <form class="auth-form signup-form" {onsubmit}>
                <label>{"Name"}</label>
                <input type="text" placeholder="Enter your name" />
                <label>{"Email"}</label>
                <input type="email" placeholder="Enter your email" />
                <label>{"Password"}</label>
                <input type="password" placeholder="Create a password" />
                <button type="submit" class="auth-submit">{"Sign Up"}</button>
            </form>
        },
    }
}
