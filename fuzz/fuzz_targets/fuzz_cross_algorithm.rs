#![no_main]

use libfuzzer_sys::fuzz_target;

use coinchange_core::solver::{CoinSolver, DpSolver, GreedySolver};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let amount = usize::from(u16::from_le_bytes([data[0], data[1]])) % 2_000;
    // Map bytes into 1..=255 so both solvers accept the input.
    let coins: Vec<usize> = data[2..]
        .iter()
        .take(8)
        .map(|&b| usize::from(b.max(1)))
        .collect();

    let greedy = GreedySolver::new().solve(&coins, amount).unwrap();
    let dp = DpSolver::new().solve(&coins, amount).unwrap();

    let picked: usize = greedy.coins().iter().sum();
    assert!(picked <= amount, "greedy overshot {amount}");
    if greedy.is_exact() {
        assert!(dp.is_exact(), "greedy found {amount} but DP did not");
        assert!(dp.count() <= greedy.count(), "DP worse than greedy at {amount}");
    }
});
