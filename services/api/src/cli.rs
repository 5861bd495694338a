use crate::demo::{
    run_cafeteria_demo, run_hostel_demo, run_onboarding_demo, run_placement_demo,
    CafeteriaDemoArgs, HostelDemoArgs, OnboardingDemoArgs, PlacementDemoArgs,
};
use crate::server;
use campus_policy::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Campus Policy Service",
    about = "Run placement, hostel, cafeteria, and onboarding policies from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run a single workflow end to end and print the result
    Demo {
        #[command(subcommand)]
        command: DemoCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DemoCommand {
    /// Evaluate placement eligibility for the sample student or a roster CSV
    Placement(PlacementDemoArgs),
    /// Quote and book a hostel room with add-ons
    Hostel(HostelDemoArgs),
    /// Check out a cafeteria order
    Cafeteria(CafeteriaDemoArgs),
    /// Register a student from raw `key=value;...` input
    Onboarding(OnboardingDemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo { command } => match command {
            DemoCommand::Placement(args) => run_placement_demo(args),
            DemoCommand::Hostel(args) => run_hostel_demo(args),
            DemoCommand::Cafeteria(args) => run_cafeteria_demo(args),
            DemoCommand::Onboarding(args) => run_onboarding_demo(args),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["campus-policy-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_hostel_demo_add_ons() {
        let cli = Cli::try_parse_from([
            "campus-policy-api",
            "demo",
            "hostel",
            "--room",
            "double",
            "--add-on",
            "laundry",
            "--add-on",
            "mess",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Demo {
                command: DemoCommand::Hostel(args),
            }) => {
                assert_eq!(args.room, "double");
                assert_eq!(args.add_on, vec!["laundry".to_string(), "mess".to_string()]);
            }
            other => panic!("expected hostel demo, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_order_items() {
        let result = Cli::try_parse_from([
            "campus-policy-api",
            "demo",
            "cafeteria",
            "--item",
            "C1:two",
        ]);
        assert!(result.is_err());
    }
}
