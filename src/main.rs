use clap::Parser;
use skills_x_install::install::install;
use skills_x_install::runtime::RealRuntime;
use std::path::PathBuf;

/// skills-x-install - post-install step for the packaged skills-x CLI
///
/// Resolves the running platform, copies the matching prebuilt binary from
/// the bundled catalog to its canonical name, and marks it executable on
/// non-Windows systems.
///
/// Examples:
///   skills-x-install --bin-dir bin
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory holding the prebuilt platform binaries
    #[arg(
        long = "bin-dir",
        short = 'b',
        value_name = "PATH",
        default_value = "bin"
    )]
    pub bin_dir: PathBuf,

    /// Name of the tool to install
    #[arg(long = "tool", value_name = "NAME", default_value = "skills-x")]
    pub tool: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(err) = install(RealRuntime, &cli.bin_dir, &cli.tool) {
        eprintln!("\n⚠ Installation failed: {:#}", err);
        eprintln!("\nYou can install manually:");
        eprintln!("  go install github.com/anthropics/skills-x/cmd/skills-x@latest");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["skills-x-install"]).unwrap();
        assert_eq!(cli.bin_dir, PathBuf::from("bin"));
        assert_eq!(cli.tool, "skills-x");
    }

    #[test]
    fn test_cli_bin_dir_parsing() {
        let cli = Cli::try_parse_from(["skills-x-install", "--bin-dir", "/tmp/bin"]).unwrap();
        assert_eq!(cli.bin_dir, PathBuf::from("/tmp/bin"));
    }

    #[test]
    fn test_cli_short_bin_dir_parsing() {
        let cli = Cli::try_parse_from(["skills-x-install", "-b", "npm/bin"]).unwrap();
        assert_eq!(cli.bin_dir, PathBuf::from("npm/bin"));
    }

    #[test]
    fn test_cli_tool_parsing() {
        let cli = Cli::try_parse_from(["skills-x-install", "--tool", "mytool"]).unwrap();
        assert_eq!(cli.tool, "mytool");
    }

    #[test]
    fn test_cli_rejects_positional_args() {
        let result = Cli::try_parse_from(["skills-x-install", "bin"]);
        assert!(result.is_err());
    }
}
