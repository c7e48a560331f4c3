//! Page shell around the console.

use yew::{html, Component, Context, Html};

use crate::components::console::ConsoleComponent;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <header class="app-header">
                    <h1>{"Person Management System"}</h1>
                    <p>{"Person records and CSV imports"}</p>
                </header>
                <ConsoleComponent />
            </div>
        }
    }
}
