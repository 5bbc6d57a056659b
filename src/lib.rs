pub mod app;
pub mod github;
pub mod storage;
pub mod ui;
pub mod util;
