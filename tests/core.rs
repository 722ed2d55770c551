#[cfg(test)]
mod utils;
use flateq::{
    eval, parse_operations, EqError, EqResult, Equation, EvalError, OperationKind,
    ParseErrorKind,
};
use regex::Regex;
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::thread;
use utils::{assert_float_eq_f32, assert_float_eq_f64, init_test_logger};

#[test]
fn test_version() {
    // make sure the version strings in the Cargo.toml and lib.rs coincide
    let file = File::open("src/lib.rs").unwrap();
    let version_line_lib = io::BufReader::new(file)
        .lines()
        .find(|line| line.as_ref().unwrap().contains("html_root_url"))
        .unwrap()
        .unwrap();
    let re_version = Regex::new(r#"[0-9]{1,4}\.[0-9]{1,4}\.[0-9]{1,4}"#).unwrap();
    let match_lib = re_version.find(&version_line_lib).unwrap().as_str();

    let toml_string = fs::read_to_string("Cargo.toml").unwrap();
    let cargo_toml: toml::Value = toml::from_str(&toml_string).unwrap();
    let package = cargo_toml.get("package").unwrap().as_table().unwrap();
    let version = package.get("version").unwrap().as_str().unwrap();
    assert_eq!(match_lib, version);
}

#[test]
fn test_eval() -> EqResult<()> {
    init_test_logger();
    fn test(sut: &str, reference: f64) -> EqResult<()> {
        println!("testing {}...", sut);
        assert_float_eq_f64(eval(sut)?, reference);
        let mut eq = Equation::<f64>::new(sut)?;
        assert_float_eq_f64(eq.solution()?, reference);
        assert_float_eq_f64(eq.solution()?, reference);
        println!("...ok.");
        Ok(())
    }
    test("7", 7.0)?;
    test("-7", -7.0)?;
    test("((((3.25))))", 3.25)?;
    test("2+2", 4.0)?;
    test("4+5+1-2+5*10-9", 49.0)?;
    test("3+5-16/2*4", -24.0)?;
    test("(((1-2)+3)-4)+5", 3.0)?;
    test("1-(2+(3-(4+5)))", 5.0)?;
    test("2**-1", 0.5)?;
    test("48//-3", -16.0)?;
    test("7//2", 3.0)?;
    test("-7//2", -4.0)?;
    test("7.5//2.5", 3.0)?;
    test("2**3**2", 64.0)?;
    test("2*3**2", 18.0)?;
    test("3**2*2", 18.0)?;
    test("2-3*4+1", -9.0)?;
    test("10/4*2", 5.0)?;
    test("10//4*2", 4.0)?;
    test("1-2-3-4", -8.0)?;
    test("(1+2)*(3+4)", 21.0)?;
    test("((1+2)*(3+4))", 21.0)?;
    test("2*(3+4)*5", 70.0)?;
    test("(2*(3+4))**2", 196.0)?;
    test("100/(2*(3+2))", 10.0)?;
    test("1--1", 2.0)?;
    test("2*-3", -6.0)?;
    // a trailing operator has no right operand and is ignored
    test("1+", 1.0)?;
    test("2*", 2.0)?;
    test("(1+2)-", 3.0)?;
    test("1+2*", 3.0)?;
    test(" 1 +\t2 *\n3 ", 7.0)?;
    test("0.1+0.2", 0.30000000000000004)?;
    Ok(())
}

#[test]
fn test_eval_f32() -> EqResult<()> {
    assert_float_eq_f32(eval("1.5*(2-0.5)")?, 2.25);
    assert_float_eq_f32(eval("(2.5+2.5)//2")?, 2.0);
    let mut eq = Equation::<f32>::new("2**0.5")?;
    assert_float_eq_f32(eq.solution()?, std::f32::consts::SQRT_2);
    Ok(())
}

#[test]
fn test_ieee() -> EqResult<()> {
    assert!(eval::<f64>("(0-8)**0.5")?.is_nan());
    assert!(eval::<f64>("10**400")?.is_infinite());
    assert_eq!(eval::<f32>("10**40")?, f32::INFINITY);
    Ok(())
}

#[test]
fn test_parse_errors() {
    fn test(sut: &str, kind: ParseErrorKind, msg: &str) {
        println!("testing {}...", sut);
        let err = Equation::<f64>::new(sut).unwrap_err();
        assert_eq!(err.kind(), kind);
        assert_eq!(err.to_string(), msg);
        match eval::<f64>(sut) {
            Err(EqError::Parse(e)) => assert_eq!(e, err),
            _ => unreachable!(),
        }
    }
    test("", ParseErrorKind::EmptyInput, "Missing Equation");
    test("   ", ParseErrorKind::EmptyInput, "Missing Equation");
    test(
        "2+3-(",
        ParseErrorKind::UnexpectedEndOfInput,
        "Unexpected End of Equation",
    );
    test(
        "1+(",
        ParseErrorKind::UnexpectedEndOfInput,
        "Unexpected End of Equation",
    );
    test(
        "((1+2)-1",
        ParseErrorKind::MismatchedParentheses,
        "Mismatched Parentheses",
    );
    test(
        "(1+2))-1",
        ParseErrorKind::MismatchedParentheses,
        "Mismatched Parentheses",
    );
    test("1 ? 2", ParseErrorKind::InvalidOperator, "Invalid Operation");
    test("3^2", ParseErrorKind::InvalidOperator, "Invalid Operation");
    test("1.5.2", ParseErrorKind::InvalidNumber, "Invalid Number");
    test("2/-", ParseErrorKind::InvalidNumber, "Invalid Number");
    test("a20+5", ParseErrorKind::InvalidNumber, "Invalid Number");
    test("1e5", ParseErrorKind::InvalidOperator, "Invalid Operation");
    test("sin(1)", ParseErrorKind::InvalidNumber, "Invalid Number");
}

#[test]
fn test_divide_by_zero() -> EqResult<()> {
    // reading succeeds, the failure shows up during reduction
    for sut in ["1/0", "1//0", "3*(2+1)/(4-4)", "1/0.0"] {
        let mut eq = Equation::<f64>::new(sut)?;
        assert_eq!(eq.solution(), Err(EvalError::DivideByZero));
        assert_eq!(eq.solution().unwrap_err().to_string(), "Divide by Zero");
        assert_eq!(
            eval::<f64>(sut),
            Err(EqError::Eval(EvalError::DivideByZero))
        );
    }
    assert_eq!(
        eval::<f64>("1/0//"),
        Err(EqError::Eval(EvalError::DivideByZero))
    );
    Ok(())
}

#[test]
fn test_operations() -> EqResult<()> {
    let ops = parse_operations::<f64>("(1+2)**2")?;
    let kinds = ops.iter().map(|op| op.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![OperationKind::Add, OperationKind::Exponent, OperationKind::Add]
    );
    let prios = ops.iter().map(|op| op.priority).collect::<Vec<_>>();
    assert_eq!(prios, vec![1, 0, 0]);

    let mut eq = Equation::<f64>::new("(1+2)**2")?;
    assert_eq!(eq.operations(), ops.as_slice());
    assert_float_eq_f64(eq.solution()?, 9.0);
    assert_eq!(eq.operations().len(), 1);
    Ok(())
}

#[test]
fn test_reparse() -> EqResult<()> {
    let sut = "(1.5+2)*3-4//3+2**0.5";
    let first = eval::<f64>(sut)?;
    for _ in 0..10 {
        assert_eq!(eval::<f64>(sut)?, first);
    }
    let mut eq = Equation::<f64>::new(sut)?;
    let mut reparsed = Equation::<f64>::new(eq.text())?;
    assert_eq!(eq.solution()?, reparsed.solution()?);
    Ok(())
}

#[test]
fn test_threads() {
    let handles = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let text = format!("({}+1)*2-{}", i, i);
                eval::<f64>(&text).unwrap()
            })
        })
        .collect::<Vec<_>>();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_float_eq_f64(handle.join().unwrap(), i as f64 + 2.0);
    }
}
