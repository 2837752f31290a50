//! Layered constructors threading a growing resource bundle.
//!
//! Run with `cargo run --example layered_services --features tracing`.

#![recursion_limit = "256"]

use std::cell::Cell;
use std::rc::Rc;

use shared_resources::prelude::*;

#[derive(Resource, Debug, Clone)]
struct Settings {
    service: &'static str,
    retries: u32,
}

#[derive(Resource, Debug, Clone, Default)]
struct Metrics {
    requests: Rc<Cell<u64>>,
}

#[derive(Resource, Debug, Clone)]
struct Storage {
    rows: Vec<&'static str>,
}

#[derive(Resource, Debug)]
struct Handler {
    prefix: String,
}

/// Everything the process ends up holding.
type Services = type_set![Settings, Metrics, Storage, Handler];

/// What the bootstrap layer can provide on its own.
type Bootstrap = SharedResources<Services, type_set![Storage, Handler]>;

fn bootstrap() -> Bootstrap {
    let settings = Settings { service: "inventory", retries: 3 };
    SharedResources::new((Metrics::default(), settings))
}

fn open_storage(base: Bootstrap) -> SharedResources<Services, type_set![Handler]> {
    let retries = base.get::<Settings>().retries;
    let rows = (0..retries).map(|_| "row").collect();
    SharedResources::extend(base, (Storage { rows },))
}

fn install_handler(base: SharedResources<Services, type_set![Handler]>) -> SharedResources<Services> {
    let prefix = format!("[{}]", base.get::<Settings>().service);
    SharedResources::extend(base, (Handler { prefix },))
}

fn serve(mut requests: SharedReferences<'_, type_set![Metrics, Handler, Storage]>) {
    for row in requests.get::<Storage>().rows.clone() {
        let metrics = requests.get::<Metrics>();
        metrics.requests.set(metrics.requests.get() + 1);
        tracing::info!(prefix = %requests.get::<Handler>().prefix, row, "served");
    }
    requests.get_mut::<Handler>().prefix.push_str(":done");
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(true)
        .init();

    let app = install_handler(open_storage(bootstrap()));
    let counter = app.get::<Metrics>().requests.clone();

    let Cons {
        head: settings,
        tail: Cons {
            head: mut metrics,
            tail: Cons { head: mut storage, tail: Cons { head: mut handler, tail: Nil } },
        },
    } = app.into_bindings();
    serve(SharedReferences::new((&mut handler, &mut storage, &mut metrics)));

    tracing::info!(
        service = settings.service,
        requests = counter.get(),
        handler = %handler.prefix,
        "finished"
    );
}
