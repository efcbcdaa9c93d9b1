pub mod alert;
pub mod nav;
pub mod style;
