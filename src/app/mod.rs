pub mod actions;
pub mod detail;
pub mod event_loop;
pub mod search;
pub mod state;
pub mod update;
pub mod view;
