use clap::Parser;

#[derive(Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[clap(long, env = "CONFIG_FILE", default_value = "config.yaml")]
    pub config_file: String,

    /// Overrides the port of the configured socket address.
    #[clap(long, env = "PORT")]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::try_parse_from(["server"]).unwrap();

        assert_eq!(args.config_file, "config.yaml");
    }

    #[test]
    fn port_override() {
        let args = CliArgs::try_parse_from(["server", "--port", "9000"]).unwrap();

        assert_eq!(args.port, Some(9000));
    }
}
