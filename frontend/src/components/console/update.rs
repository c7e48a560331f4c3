use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;

use common::state::{Action, Effect};
use common::perform;

use crate::api::HttpClient;
use crate::helpers::alert;

use super::messages::Msg;
use super::state::ConsoleComponent;

pub fn update(component: &mut ConsoleComponent, ctx: &Context<ConsoleComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Configured(config) => {
            gloo_console::log!(format!("Person API at {}", config.api_url));
            component.client = Some(Rc::new(HttpClient::new(&config)));
            dispatch(component, ctx, Action::Mount);
            true
        }
        Msg::Dispatch(action) => {
            if let Some(err) = action.failure() {
                gloo_console::error!(format!("Backend call failed: {}", err));
            }
            dispatch(component, ctx, action);
            true
        }
    }
}

/// Applies `action` to the store and starts whatever it asks for.
fn dispatch(component: &mut ConsoleComponent, ctx: &Context<ConsoleComponent>, action: Action) {
    for effect in component.console.update(action) {
        match effect {
            Effect::Alert(text) => alert(&text),
            Effect::Call(call) => {
                let Some(client) = component.client.clone() else {
                    gloo_console::error!(format!("Dropped {:?}: backend not configured", call));
                    continue;
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let settled = perform(client.as_ref(), call).await;
                    link.send_message(Msg::Dispatch(settled));
                });
            }
        }
    }
}
