use yew::prelude::*;
use yew_router::prelude::*;

pub mod catalog;
pub mod config;
pub mod identity;
pub mod section;
pub mod state;

pub mod components {
    pub mod about;
    pub mod auth_modal;
    pub mod courses;
    pub mod error_boundary;
    pub mod footer;
    pub mod google_sign_in;
    pub mod hero;
    pub mod nav;
    pub mod test_series;
}

pub mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            log::info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            log::info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
