use common::state::Action;
use common::ConsoleConfig;

pub enum Msg {
    /// Backend location resolved; the store can be mounted.
    Configured(ConsoleConfig),
    Dispatch(Action),
}
