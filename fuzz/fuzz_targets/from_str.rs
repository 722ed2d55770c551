#![no_main]
use libfuzzer_sys::fuzz_target;

use flateq::Equation;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mut eq) = s.parse::<Equation<f64>>() {
            let first = eq.solution();
            assert_eq!(eq.operations().len() == 1, first.is_ok());
            let _ = eq.solution();
        }
    }
});
