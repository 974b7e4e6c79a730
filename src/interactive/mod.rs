pub mod app;
pub mod dropdown;
pub mod event;
pub mod handlers;
pub mod keys;
pub mod layout;
pub mod ui;
