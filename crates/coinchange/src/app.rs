//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::{debug, info};

use coinchange_cli::animation::Player;
use coinchange_cli::input::{parse_amount, parse_coins};
use coinchange_cli::output::{write_report, Report};
use coinchange_cli::presenter::CLIResultPresenter;
use coinchange_core::budget::{parse_cell_limit, TableEstimate};
use coinchange_core::progress::CancellationToken;
use coinchange_core::registry::DefaultFactory;
use coinchange_core::solver::CoinError;
use coinchange_orchestration::interfaces::ResultPresenter;
use coinchange_orchestration::orchestrator::{analyze_comparison, execute_solvers};
use coinchange_orchestration::solver_selection::get_solvers_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        coinchange_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

/// Parse the two free-text inputs.
fn read_input(config: &AppConfig) -> Result<(Vec<usize>, usize), CoinError> {
    let (Some(coins), Some(amount)) = (config.coins.as_deref(), config.amount.as_deref()) else {
        return Err(CoinError::InvalidInput(
            "please enter both coin denominations (--coins) and a target amount (--amount)"
                .into(),
        ));
    };
    Ok((parse_coins(coins)?, parse_amount(amount)?))
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let (coins, amount) = read_input(config)?;
    let cadence = config.cadence()?;
    debug!(?coins, amount, algo = %config.algo, "input accepted");

    let factory = DefaultFactory::new();
    let solvers = get_solvers_to_run(&config.algo, &factory)?;

    // The greedy solver never allocates a table.
    if config.algo != "greedy" {
        let limit = parse_cell_limit(&config.max_cells)?;
        TableEstimate::estimate(coins.len(), amount).check(limit)?;
    }

    let results = execute_solvers(&solvers, &coins, amount);
    if let Some(Err(err)) = results
        .first()
        .map(|r| &r.outcome)
        .filter(|_| results.iter().all(|r| r.outcome.is_err()))
    {
        return Err(err.clone().into());
    }
    let comparison = analyze_comparison(&results);

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let static_details = config.details && !config.animate;
    for result in &results {
        presenter.present_result(result, amount, static_details);
    }
    presenter.present_comparison(&comparison, &results);

    if let Some(ref path) = config.output {
        let report = Report::new(&coins, amount, &results, comparison);
        write_report(path, &report)
            .with_context(|| format!("cannot write report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    if config.animate {
        let cancel = CancellationToken::new();
        ctrlc_handler(cancel.clone())?;
        let player = Player::new(cancel, cadence.coin).with_progress(!config.quiet);
        for result in &results {
            presenter.animate(result, &player, cadence)?;
        }
    }

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("cannot install Ctrl+C handler")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        let mut argv = vec!["coinchange"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn read_input_parses_both() {
        let cfg = config(&["--coins", "1, 5, 10", "--amount", "27"]);
        assert_eq!(read_input(&cfg).unwrap(), (vec![1, 5, 10], 27));
    }

    #[test]
    fn read_input_requires_both() {
        let cfg = config(&["--coins", "1, 5"]);
        assert!(matches!(read_input(&cfg), Err(CoinError::InvalidInput(_))));
    }

    #[test]
    fn run_plain() {
        let cfg = config(&["--coins", "1,3,4", "--amount", "6", "-q"]);
        assert!(run(&cfg).is_ok());
    }

    #[test]
    fn run_rejects_oversized_table() {
        let cfg = config(&["--coins", "1,2", "--amount", "100", "--max-cells", "10", "-q"]);
        let err = run(&cfg).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoinError>(),
            Some(CoinError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn greedy_ignores_cell_limit() {
        let cfg = config(&[
            "--coins", "1,2", "--amount", "100", "--max-cells", "10", "--algo", "greedy", "-q",
        ]);
        assert!(run(&cfg).is_ok());
    }

    #[test]
    fn run_unknown_algo() {
        let cfg = config(&["--coins", "1", "--amount", "1", "--algo", "magic"]);
        assert!(run(&cfg).is_err());
    }
}
