use crate::app::App;

mod app;
mod components;
mod config;
mod transport;

fn main() {
    yew::Renderer::<App>::new().render();
}
