mod convert;
pub use convert::*;

mod jobs;
pub use jobs::*;
