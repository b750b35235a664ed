use clara_common::routes::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

/// Persistent menu with one link per form.
pub struct Navigation;

impl Component for Navigation {
    type Message = ();
    type Properties = NavigationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navigation
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <nav>
                <ul>
                    { for Route::ALL.into_iter().map(|route| {
                        let on_navigate = props.on_navigate.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit(route);
                        });
                        html! {
                            <li>
                                <a
                                    href={route.path()}
                                    class={classes!("nav-link", (route == props.active).then_some("active"))}
                                    {onclick}
                                >
                                    { route.title() }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        }
    }
}
