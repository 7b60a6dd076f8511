mod args;

pub use args::{parse_assignment, Args, ViewArg};
