pub const NAME: &str = "convert-relay";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
