use yew::prelude::*;

use crate::components::{
    about::About, auth_modal::AuthModal, courses::CoursesSection, error_boundary::ErrorBoundary,
    footer::Footer, hero::Hero, nav::Nav, test_series::TestSeriesSection,
};
use crate::section::use_active_section;
use crate::state::{AuthAction, AuthMode, AuthPanel};

#[function_component(Landing)]
pub fn landing() -> Html {
    let active_section = use_active_section();
    let auth_open = use_state(|| false);
    let auth_panel = use_reducer(AuthPanel::default);

    let open_auth = {
        let auth_open = auth_open.clone();
        let auth_panel = auth_panel.dispatcher();
        Callback::from(move |mode: AuthMode| {
            log::debug!("opening auth modal in {:?} mode", mode);
            auth_panel.dispatch(AuthAction::SelectMode(mode));
            auth_open.set(true);
        })
    };

    let close_auth = {
        let auth_open = auth_open.clone();
        Callback::from(move |_: ()| auth_open.set(false))
    };

    let on_auth_action = {
        let auth_panel = auth_panel.dispatcher();
        Callback::from(move |action: AuthAction| auth_panel.dispatch(action))
    };

    html! {
        <div class="landing-page">
            <style>
            {r#".landing-page {
                min-height: 100vh;
                background: linear-gradient(135deg, #f8fafc, #eff6ff);
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            }
            .landing-page h3 { font-size: 1.25rem; font-weight: 700; color: #111827; margin-bottom: 0.75rem; }"#}
            </style>
            <Nav active={active_section} on_open_auth={open_auth} />
            <Hero />
            <CoursesSection />
            <TestSeriesSection />
            <About />
            <Footer />
            <ErrorBoundary>
                <AuthModal
                    open={*auth_open}
                    panel={(*auth_panel).clone()}
                    on_action={on_auth_action}
                    on_close={close_auth}
                />
            </ErrorBoundary>
        </div>
    }
}
