use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::BRAND_NAME;
use crate::section::{scroll_to_section, Section};
use crate::state::AuthMode;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub on_open_auth: Callback<AuthMode>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, on_open_auth } = props;
    let menu_open = use_bool_toggle(false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let go_to = |section: Section| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            scroll_to_section(section);
            menu_open.set(false);
        })
    };

    let open_auth = |mode: AuthMode| {
        let on_open_auth = on_open_auth.clone();
        Callback::from(move |_: MouseEvent| on_open_auth.emit(mode))
    };

    let section_links = |extra_class: &'static str| -> Html {
        Section::ALL
            .iter()
            .map(|section| {
                html! {
                    <button
                        key={section.id()}
                        class={classes!("nav-link", extra_class, (*active == *section).then(|| "active"))}
                        onclick={go_to(*section)}
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class="top-nav">
            <style>
            {r#".top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 40;
                background: rgba(255, 255, 255, 0.8);
                backdrop-filter: blur(12px);
                border-bottom: 1px solid #e5e7eb;
            }
            .nav-content {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1rem;
                height: 4rem;
                display: flex;
                justify-content: space-between;
                align-items: center;
            }
            .nav-logo {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                font-size: 1.25rem;
                font-weight: 700;
                background: linear-gradient(90deg, #2563eb, #9333ea);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .nav-right {
                display: flex;
                align-items: center;
                gap: 2rem;
            }
            .nav-link {
                background: none;
                border: none;
                font-size: 0.875rem;
                font-weight: 500;
                color: #4b5563;
                cursor: pointer;
                transition: color 0.2s;
            }
            .nav-link:hover, .nav-link.active { color: #2563eb; }
            .nav-cta {
                color: #fff;
                border: none;
                border-radius: 9999px;
                padding: 0.5rem 1.5rem;
                font-size: 0.875rem;
                font-weight: 500;
                cursor: pointer;
                background: linear-gradient(90deg, #2563eb, #9333ea);
            }
            .nav-cta.signup { background: linear-gradient(90deg, #9333ea, #2563eb); }
            .burger-menu {
                display: none;
                background: none;
                border: none;
                font-size: 1.5rem;
                color: #4b5563;
                cursor: pointer;
            }
            .mobile-menu {
                display: flex;
                flex-direction: column;
                gap: 1rem;
                padding: 1rem;
                border-top: 1px solid #e5e7eb;
            }
            .mobile-menu .nav-link { text-align: left; }
            .mobile-menu .nav-cta { width: fit-content; }
            @media (max-width: 768px) {
                .nav-right { display: none; }
                .burger-menu { display: block; }
            }
            @media (min-width: 769px) {
                .mobile-menu { display: none; }
            }"#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <span class="nav-logo-mark">{"📖"}</span>
                    <span>{BRAND_NAME}</span>
                </div>
                <div class="nav-right">
                    { section_links("") }
                    <button class="nav-cta login" onclick={open_auth(AuthMode::Login)}>{"Login"}</button>
                    <button class="nav-cta signup" onclick={open_auth(AuthMode::Signup)}>{"Sign Up"}</button>
                </div>
                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { section_links("mobile") }
                    <button class="nav-cta login" onclick={open_auth(AuthMode::Login)}>{"Login"}</button>
                    <button class="nav-cta signup" onclick={open_auth(AuthMode::Signup)}>{"Sign Up"}</button>
                </div>
            }
        </nav>
    }
}
