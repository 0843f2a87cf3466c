pub mod form;
pub mod submissions;
