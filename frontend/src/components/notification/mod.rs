use yew::{classes, html, Component, Context, Html, Properties};

use common::model::notification::{Notification, Severity};

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notification: Notification,
}

/// The single message slot above the panels. Renders nothing when empty.
pub struct NotificationBanner;

impl Component for NotificationBanner {
    type Message = ();
    type Properties = NotificationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        NotificationBanner
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let notification = &ctx.props().notification;
        if !notification.is_visible() {
            return html! {};
        }

        let severity = match notification.severity {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::None => "info",
        };

        html! {
            <div class={classes!("message", severity)}>
                { notification.text.clone() }
            </div>
        }
    }
}
