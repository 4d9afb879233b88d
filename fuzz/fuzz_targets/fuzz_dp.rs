#![no_main]

use libfuzzer_sys::fuzz_target;

use coinchange_core::dp::{dp_coin_change, Cell};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First 2 bytes are the amount, capped at 2000; the rest are coins.
    let amount = usize::from(u16::from_le_bytes([data[0], data[1]])) % 2_000;
    let coins: Vec<usize> = data[2..].iter().take(8).map(|&b| usize::from(b)).collect();

    let Ok(result) = dp_coin_change(&coins, amount) else {
        assert!(coins.contains(&0));
        return;
    };

    assert_eq!(result.matrix.rows(), coins.len() + 1);
    assert_eq!(result.matrix.cols(), amount + 1);
    match result.matrix.optimum() {
        Cell::Coins(n) => {
            assert_eq!(result.coins_used.len(), n);
            assert_eq!(result.coins_used.iter().sum::<usize>(), amount);
            assert!(result.coins_used.iter().all(|c| coins.contains(c)));
        }
        Cell::Infinite => assert!(result.coins_used.is_empty()),
    }
});
