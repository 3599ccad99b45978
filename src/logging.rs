/// Installs the stderr logger. `RUST_LOG` overrides the verbosity flags.
pub fn setup<Level>(verbosity: &clap_verbosity_flag::Verbosity<Level>)
where
    Level: clap_verbosity_flag::LogLevel,
{
    env_logger::Builder::new()
        .filter_level(verbosity.log_level_filter())
        .parse_default_env()
        .init();
}
