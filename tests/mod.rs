pub mod convert;
pub mod properties;
pub mod sources;
