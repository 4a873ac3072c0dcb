use clap::Parser;
use miette::Result;
use shaftkit::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let file = cli.file;

    match cli.command {
        Commands::New(args) => shaftkit::cli::commands::new::run(args, &file),
        Commands::SetLength(args) => shaftkit::cli::commands::set_length::run(args, &file),
        Commands::SetUnit(args) => shaftkit::cli::commands::set_unit::run(args, &file),
        Commands::Add(cmd) => shaftkit::cli::commands::add::run(cmd, &file),
        Commands::Rm(args) => shaftkit::cli::commands::rm::run(args, &file),
        Commands::List(args) => shaftkit::cli::commands::list::run(args, &file),
        Commands::Resolve(args) => shaftkit::cli::commands::resolve::run(args, &file),
        Commands::Draw(args) => shaftkit::cli::commands::draw::run(args, &file),
        Commands::Export(cmd) => shaftkit::cli::commands::export::run(cmd, &file),
        Commands::Validate(args) => shaftkit::cli::commands::validate::run(args, &file),
        Commands::Completions(args) => shaftkit::cli::commands::completions::run(args),
    }
}
