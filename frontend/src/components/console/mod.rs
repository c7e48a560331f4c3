//! Console root: owns the store and runs its effects.
//!
//! Responsibilities
//! - Resolve the backend configuration on first render, then mount the store
//!   (one list fetch plus the job description).
//! - Feed every `Action` from child components through `Console::update`.
//! - Perform the returned HTTP calls with `spawn_local` and feed their
//!   settlement actions back in; show alerts directly.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ConsoleComponent;

impl Component for ConsoleComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ConsoleComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let config = crate::config::load().await;
                link.send_message(Msg::Configured(config));
            });
        }
    }
}
