use clap::{Args, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "cv-extract",
    version,
    about = "Print the plain text of the bundled curriculum vitae PDF"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Args, Debug)]
pub struct GlobalOpts {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Log progress to stderr (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}
