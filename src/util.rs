/// Removes every whitespace character, not only spaces, from `text`.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
fn assert_float_eq<T: num::Float + std::fmt::Display>(result: T, reference: T, tol: T) {
    if (result - reference).abs() >= tol {
        println!(
            "Floats not almost equal.\nresult:    {}\nreference: {}\n",
            result, reference
        );
        assert!(false);
    }
}
#[cfg(test)]
pub fn assert_float_eq_f32(result: f32, reference: f32) {
    assert_float_eq(result, reference, 1e-5);
}
#[cfg(test)]
pub fn assert_float_eq_f64(result: f64, reference: f64) {
    assert_float_eq(result, reference, 1e-12);
}

#[test]
fn test_strip_whitespace() {
    assert_eq!(strip_whitespace(" 1 +\t2\n* ( 3 )"), "1+2*(3)");
    assert_eq!(strip_whitespace(" \t\r\n"), "");
    assert_eq!(strip_whitespace("1\u{a0}+ 2"), "1+2");
}
