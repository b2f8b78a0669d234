//! [`Money`]-related definitions.

use std::{fmt, ops, str::FromStr};

use rust_decimal::Decimal;

use crate::Percent;

/// Non-negative amount of money.
///
/// There is a single implicit currency, so only the amount is tracked.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Money(Decimal);

impl Money {
    /// Zero [`Money`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Money`] if the provided `amount` is not negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        if amount.is_zero() {
            return Some(Self::ZERO);
        }
        amount.is_sign_positive().then_some(Self(amount))
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Applies the provided discount [`Percent`] to this [`Money`].
    ///
    /// A 100% discount results in [`Money::ZERO`].
    #[must_use]
    pub fn discounted(self, discount: Percent) -> Self {
        Self(self.0 * (Decimal::ONE - discount.fraction()))
    }
}

impl From<u32> for Money {
    fn from(amount: u32) -> Self {
        Self(amount.into())
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s).map_err(|_| "invalid amount")?;
        Self::new(amount).ok_or("negative amount")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::Decimal;
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::Money;

    impl Serialize for Money {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            Serialize::serialize(&self.0, s)
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let amount = <Decimal as Deserialize>::deserialize(d)?;
            Self::new(amount)
                .ok_or_else(|| D::Error::custom("negative `Money` amount"))
        }
    }

    #[cfg(test)]
    mod spec {
        use serde::{
            de::{value, IntoDeserializer as _},
            Deserialize as _,
        };

        use super::Money;

        fn from<'de, D>(d: D) -> Result<Money, value::Error>
        where
            D: serde::Deserializer<'de, Error = value::Error>,
        {
            Money::deserialize(d)
        }

        #[test]
        fn deserializes_config_values() {
            let expected = Money::from(50_000_u32);

            assert_eq!(from(50_000_u64.into_deserializer()).unwrap(), expected);
            assert_eq!(from("50000".into_deserializer()).unwrap(), expected);
            assert_eq!(
                from("127500.5".into_deserializer()).unwrap().to_string(),
                "127500.5",
            );
            assert!(from((-1_i64).into_deserializer()).is_err());
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Non-negative amount of money, as a decimal string without thousands
    /// separators (e.g. `370000` or `127500.5`).
    #[graphql_scalar(with = Self, parse_token(String))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Money` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use crate::Percent;

    use super::Money;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn percent(v: u8) -> Percent {
        Percent::new(Decimal::from(v)).unwrap()
    }

    #[test]
    fn rejects_negative() {
        assert!(Money::new(decimal("-1")).is_none());
        assert!(Money::new(decimal("-0.01")).is_none());
        assert_eq!(Money::new(decimal("0")), Some(Money::ZERO));
        assert_eq!(Money::new(decimal("-0")), Some(Money::ZERO));
        assert!(Money::new(decimal("150000")).is_some());
    }

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("150000").unwrap(), Money::from(150_000_u32));
        assert_eq!(
            Money::from_str("127500.50").unwrap().amount(),
            decimal("127500.5"),
        );

        assert!(Money::from_str("-5").is_err());
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("150,000").is_err());
        assert!(Money::from_str("150000KRW").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::from(370_000_u32).to_string(), "370000");
        assert_eq!(Money::new(decimal("142500.00")).unwrap().to_string(), "142500");
        assert_eq!(Money::new(decimal("127500.50")).unwrap().to_string(), "127500.5");
        assert_eq!(Money::ZERO.to_string(), "0");
    }

    #[test]
    fn arithmetic() {
        let weekly = Money::from(150_000_u32);

        assert_eq!(weekly * 2, Money::from(300_000_u32));
        assert_eq!(weekly * 0, Money::ZERO);
        assert_eq!(weekly + Money::from(50_000_u32), Money::from(200_000_u32));
        assert_eq!(Money::ZERO + weekly, weekly);
    }

    #[test]
    fn discounted() {
        let weekly = Money::from(150_000_u32);

        assert_eq!(weekly.discounted(percent(0)), weekly);
        assert_eq!(weekly.discounted(percent(5)), Money::from(142_500_u32));
        assert_eq!(weekly.discounted(percent(25)), Money::from(112_500_u32));
        assert_eq!(weekly.discounted(percent(100)), Money::ZERO);
    }
}
