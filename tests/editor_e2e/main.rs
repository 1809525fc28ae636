#[path = "../helpers/mod.rs"]
mod helpers;

mod copy;
mod panel;
