#![allow(dead_code)]

use genealogy_graph::Entity;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, PartialEq)]
pub struct Virus {
    id: String,
}

impl Entity for Virus {
    type Id = String;

    fn from_id(id: &String) -> Self {
        Self { id: id.clone() }
    }

    fn id(&self) -> String {
        self.id.clone()
    }
}

pub fn id(value: &str) -> String {
    value.to_string()
}

/// Route `tracing` output through the test harness, filtered by `RUST_LOG`
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
        .unwrap();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

impl Virus {
    pub fn from_id_str(value: &str) -> Self {
        Self { id: id(value) }
    }
}
