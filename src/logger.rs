use log::LevelFilter;

/// Log to stderr so stdout stays a clean image stream.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}
