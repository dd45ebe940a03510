mod inspect;
mod options;
mod runner;
mod state;
mod ui;

pub(crate) use inspect::run_inspect;
pub(crate) use options::{InspectOptions, PresentOptions, StoreOptions};
pub(crate) use runner::run_present;
