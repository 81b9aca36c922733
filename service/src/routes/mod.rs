pub mod convert;
pub mod root;
