//! Person list with inline editing.
//!
//! Stateless: the rows and the edit state come from the store, and every button
//! turns into an `Action`. Delete and delete-all act immediately, without going
//! through the editor.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::person::Person;
use common::state::person_list::EMPTY_STATE_TEXT;
use common::state::{Action, PersonList};

#[derive(Properties, PartialEq)]
pub struct PersonListProps {
    pub list: PersonList,
    pub on_action: Callback<Action>,
}

pub struct PersonListComponent;

impl Component for PersonListComponent {
    type Message = ();
    type Properties = PersonListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PersonListComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let PersonListProps { list, on_action } = ctx.props();

        if list.loading {
            return html! {
                <div class="loading">
                    <div class="spinner"></div>
                    <span>{"Loading..."}</span>
                </div>
            };
        }

        if list.is_empty() {
            return html! {
                <div class="empty-state">
                    <div class="empty-state-text">{ EMPTY_STATE_TEXT }</div>
                    <p>{"Add a person using the form or run the ETL to import data"}</p>
                    <button class="btn-secondary" onclick={on_action.reform(|_| Action::Refresh)}>
                        {"Refresh"}
                    </button>
                </div>
            };
        }

        html! {
            <div class="person-list">
                <div class="person-list-toolbar">
                    <span class="person-count">{ list.total_label() }</span>
                    <div class="person-list-actions">
                        <button class="btn-secondary" onclick={on_action.reform(|_| Action::Refresh)}>
                            {"Refresh"}
                        </button>
                        if list.can_delete_all() {
                            <button class="btn-delete-all" onclick={on_action.reform(|_| Action::DeleteAll)}>
                                {"Delete All"}
                            </button>
                        }
                    </div>
                </div>
                { for list.persons.iter().map(|person| row(list, person, on_action)) }
            </div>
        }
    }
}

fn row(list: &PersonList, person: &Person, on_action: &Callback<Action>) -> Html {
    let id = person.id;

    if list.is_editing(id) {
        let draft = list.draft().unwrap_or_default().to_string();
        let on_input = on_action.reform(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Action::EditDraft(input.value())
        });
        let on_enter = {
            let on_action = on_action.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" {
                    on_action.emit(Action::SaveEdit);
                }
            })
        };

        return html! {
            <div key={id} class="person-item editing">
                <div class="person-info">
                    <div class="person-id">{ id }</div>
                    <input
                        type="text"
                        class="edit-input"
                        value={draft}
                        oninput={on_input}
                        onkeypress={on_enter}
                        disabled={list.is_saving()}
                    />
                </div>
                <div class="person-actions">
                    <button class="btn-save" title="Save" disabled={list.is_saving()}
                        onclick={on_action.reform(|_| Action::SaveEdit)}>{"✓"}</button>
                    <button class="btn-cancel" title="Cancel"
                        onclick={on_action.reform(|_| Action::CancelEdit)}>{"✕"}</button>
                </div>
            </div>
        };
    }

    html! {
        <div key={id} class="person-item">
            <div class="person-info">
                <div class="person-id">{ id }</div>
                <div class="person-name">{ person.name.clone() }</div>
            </div>
            <div class="person-actions">
                <button class="btn-edit" title="Edit"
                    onclick={on_action.reform(move |_| Action::StartEdit(id))}>{"Edit"}</button>
                <button class="btn-delete" title="Delete"
                    onclick={on_action.reform(move |_| Action::DeletePerson(id))}>{"Delete"}</button>
            </div>
        </div>
    }
}
