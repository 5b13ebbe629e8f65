use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Terminal logger at `Info`, without timestamps.
pub fn init() -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    TermLogger::init(LevelFilter::Info, config, TerminalMode::Mixed, ColorChoice::Auto)
}
