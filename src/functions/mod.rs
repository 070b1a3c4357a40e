// Built-in function handlers
// Each submodule exposes one Handler; the manifest below is what the
// registry loads, replacing runtime directory scanning with an explicit
// compile-time table.

mod hello;
mod time;
mod users;

use std::sync::Arc;

use crate::router::{Handler, HandlerFactory};

/// The handler manifest. Adding a function means adding one entry here.
pub fn manifest() -> Vec<HandlerFactory> {
    vec![
        HandlerFactory {
            name: "hello",
            build: || Ok(Arc::new(hello::Hello) as Arc<dyn Handler>),
        },
        HandlerFactory {
            name: "time",
            build: || Ok(Arc::new(time::Time) as Arc<dyn Handler>),
        },
        HandlerFactory {
            name: "users",
            build: || Ok(Arc::new(users::Users) as Arc<dyn Handler>),
        },
    ]
}
