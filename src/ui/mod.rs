//! Interactive console menu.

pub mod menu;

pub use menu::run;
