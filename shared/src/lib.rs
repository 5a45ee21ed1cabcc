mod logging;

pub use logging::init_test_logging;
