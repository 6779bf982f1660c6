use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod error;

pub mod utils {
    pub mod dom;
}

pub mod view {
    pub mod hooks;
    pub mod navigation;
    pub mod progress;
    pub mod sections;
    pub mod tracker;
}

pub mod downloads {
    pub mod browser;
    pub mod slot;
    pub mod trigger;
}

pub mod components {
    pub mod backdrop;
    pub mod doodles;
    pub mod download_card;
    pub mod navbar;
}

pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use config::PageConfig;
use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ContextProvider<PageConfig> context={PageConfig::default()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<PageConfig>>
    }
}
