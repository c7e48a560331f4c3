use std::rc::Rc;

use common::state::Console;

use crate::api::HttpClient;

pub struct ConsoleComponent {
    /// All screen state; the view is a projection of it.
    pub console: Console,

    /// `None` until the backend configuration has been resolved.
    pub client: Option<Rc<HttpClient>>,

    /// Guard for the one-time configuration load.
    pub loaded: bool,
}

impl ConsoleComponent {
    pub fn new() -> Self {
        Self {
            console: Console::new(),
            client: None,
            loaded: false,
        }
    }
}
