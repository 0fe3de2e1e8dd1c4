mod logger;

pub use logger::level_from_env;
pub use logger::RuntimeLogger;
