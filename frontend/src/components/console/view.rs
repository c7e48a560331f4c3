use yew::prelude::*;

use crate::components::etl::JobPanelComponent;
use crate::components::notification::NotificationBanner;
use crate::components::person_form::PersonForm;
use crate::components::persons::PersonListComponent;

use super::messages::Msg;
use super::state::ConsoleComponent;

pub fn view(component: &ConsoleComponent, ctx: &Context<ConsoleComponent>) -> Html {
    let console = &component.console;
    let on_action = ctx.link().callback(Msg::Dispatch);

    let body = if component.client.is_none() {
        html! {
            <div class="loading">
                <div class="spinner"></div>
                <span>{"Connecting..."}</span>
            </div>
        }
    } else {
        html! {
            <>
                <div class="section full-width">
                    <h2>{"ETL Process"}</h2>
                    <JobPanelComponent panel={console.jobs.clone()} on_action={on_action.clone()} />
                </div>
                <div class="section full-width">
                    <h2>{"Add Person"}</h2>
                    <PersonForm on_action={on_action.clone()} />
                </div>
                <div class="section full-width">
                    <h2>{"Persons List"}</h2>
                    <PersonListComponent list={console.persons.clone()} on_action={on_action} />
                </div>
            </>
        }
    };

    html! {
        <main class="app-main">
            <NotificationBanner notification={console.notification.clone()} />
            { body }
        </main>
    }
}
