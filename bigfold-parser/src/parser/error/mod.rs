pub mod kind;

pub use bigfold_error::Error;
