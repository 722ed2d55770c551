use std::{fmt, marker::PhantomData};

use serde::{de, de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

use crate::{DataType, Equation};

impl<T: DataType> Serialize for Equation<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.text())
    }
}

impl<'de, T: DataType> Deserialize<'de> for Equation<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(EquationVisitor {
            value_dummy: PhantomData,
        })
    }
}

#[derive(Debug)]
struct EquationVisitor<T> {
    value_dummy: PhantomData<T>,
}

impl<'de, T: DataType> Visitor<'de> for EquationVisitor<T> {
    type Value = Equation<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a str that can be parsed into a `flateq` equation")
    }

    fn visit_str<E>(self, unparsed: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Equation::new(unparsed).map_err(|epe| E::custom(format!("Parse error - {}", epe)))
    }
}

#[cfg(test)]
use serde_test::Token;

#[test]
fn test_ser_de() {
    let eq = Equation::<f64>::new("(1 + 2) * 3").unwrap();
    serde_test::assert_ser_tokens(&eq, &[Token::Str("(1+2)*3")]);

    let mut eq: Equation<f64> = serde_json::from_str("\"2 ** 3 // 3\"").unwrap();
    assert_eq!(eq.solution().unwrap(), 2.0);
    assert_eq!(serde_json::to_string(&eq).unwrap(), "\"2**3//3\"");

    let err = serde_json::from_str::<Equation<f64>>("\"((1+2)-1\"").unwrap_err();
    assert!(err.to_string().contains("Parse error - Mismatched Parentheses"));
}
