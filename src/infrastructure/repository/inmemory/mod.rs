pub mod project;
pub mod room;
