pub mod constants;
pub mod date;
pub mod filename;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use date::TargetDate;
pub use filename::generate_default_csv_filename;
pub use logging::init_logging;
pub use progress::ProgressReporter;
