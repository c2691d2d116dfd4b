pub mod api;
pub mod client;
pub mod controller;
pub mod currency;
pub mod error;
pub mod form;
pub mod reveal;
pub mod settings;
pub mod validation;
pub mod view;
#[cfg(test)]
mod mock;
