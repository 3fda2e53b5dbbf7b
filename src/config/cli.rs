//! Command-line surface.

use clap::Parser;

/// Round-robin HTTP load balancer.
#[derive(Debug, Clone, Parser)]
#[command(name = "http-balancer")]
#[command(about = "Round-robin HTTP load balancer", long_about = None)]
pub struct Cli {
    /// Load balanced backends, use commas to separate.
    #[arg(long)]
    pub backends: String,

    /// Port to serve.
    #[arg(long, default_value_t = 3000)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_3000() {
        let cli = Cli::try_parse_from(["http-balancer", "--backends", "http://127.0.0.1:8081"]).unwrap();
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.backends, "http://127.0.0.1:8081");
    }

    #[test]
    fn test_backends_flag_is_required() {
        assert!(Cli::try_parse_from(["http-balancer", "--port", "8080"]).is_err());
    }

    #[test]
    fn test_port_must_fit_u16() {
        let res = Cli::try_parse_from(["http-balancer", "--backends", "http://a", "--port", "70000"]);
        assert!(res.is_err());
    }
}
