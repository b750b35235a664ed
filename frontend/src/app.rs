use clara_common::routes::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::{html, Component, Context, Html};

use crate::components::login::LoginComponent;
use crate::components::navigation::Navigation;
use crate::components::student::StudentComponent;
use crate::components::teacher::TeacherComponent;
use crate::components::video::VideoComponent;

pub enum Msg {
    Navigate(Route),
    /// Back/forward moved the browser to another entry.
    LocationChanged,
}

/// Navigation menu plus the form for the current route. Every route is open
/// regardless of login state.
pub struct App {
    route: Route,
    popstate: Closure<dyn Fn()>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let popstate = Closure::<dyn Fn()>::new(move || link.send_message(Msg::LocationChanged));
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref());
        }

        Self {
            route: current_route(),
            popstate,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let route = match msg {
            Msg::Navigate(route) => {
                if route != self.route {
                    push_route(route);
                }
                route
            }
            Msg::LocationChanged => current_route(),
        };
        if route == self.route {
            return false;
        }
        self.route = route;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <Navigation active={self.route} on_navigate={ctx.link().callback(Msg::Navigate)} />
                <main>{ page(self.route) }</main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "popstate",
                self.popstate.as_ref().unchecked_ref(),
            );
        }
    }
}

fn page(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginComponent /> },
        Route::Teacher => html! { <TeacherComponent /> },
        Route::Student => html! { <StudentComponent /> },
        Route::Video => html! { <VideoComponent /> },
        Route::NotFound => html! { <h2>{ Route::NotFound.title() }</h2> },
    }
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Login)
}

fn push_route(route: Route) {
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(route.path()));
    }
}
