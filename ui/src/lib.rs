//! egui front end of the roster page: search boxes, sort selector, people
//! table and the profile side panel.

pub mod app;
pub mod seed;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::RosterApp;
