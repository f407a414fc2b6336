use clap::Parser;

use rbac_audit::cli::{Cli, Commands};
use rbac_audit::commands::{run_audit, run_explain, run_init, run_manifest};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Audit(args) => run_audit(args, &cli),
        Commands::Manifest(args) => run_manifest(args, &cli),
        Commands::Explain(args) => run_explain(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
