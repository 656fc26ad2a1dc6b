mod config;
mod readable;
mod visit;

pub use config::ReadableConfig;

pub use readable::ReadableList;
pub use readable::ReadableStruct;
pub use readable::ReadableValue;

pub use visit::Visit;
