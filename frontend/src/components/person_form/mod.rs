//! "Add person" form. Keeps its own draft; the store validates again on submit.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::state::Action;

#[derive(Properties, PartialEq)]
pub struct PersonFormProps {
    pub on_action: Callback<Action>,
}

pub enum Msg {
    UpdateName(String),
    Submit,
}

pub struct PersonForm {
    name: String,
}

impl Component for PersonForm {
    type Message = Msg;
    type Properties = PersonFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateName(name) => {
                self.name = name;
                true
            }
            Msg::Submit => {
                // Blank names are ignored without a message.
                if self.name.trim().is_empty() {
                    return false;
                }
                ctx.props()
                    .on_action
                    .emit(Action::CreatePerson(std::mem::take(&mut self.name)));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <form class="person-form" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <div class="form-group">
                    <label for="name">{"Full Name"}</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Enter person's name"
                        value={self.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::UpdateName(input.value())
                        })}
                    />
                </div>
                <button type="submit" class="btn-primary">{"Add Person"}</button>
            </form>
        }
    }
}
