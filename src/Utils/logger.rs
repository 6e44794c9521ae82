use crate::settings::AnalysisSettings;
use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// installs a terminal logger, fails if a logger is already installed
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

/// logger with the level named in the settings
pub fn init_logger_from(settings: &AnalysisSettings) -> Result<(), SetLoggerError> {
    init_logger(settings.level_filter())
}
