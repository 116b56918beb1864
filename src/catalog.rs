pub mod command;
pub mod controller;
pub mod domain;
pub mod factory;
pub mod import;
pub mod selector;
