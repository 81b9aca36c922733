pub mod consts;
pub mod state;
