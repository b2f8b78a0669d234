//! [`Percent`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

/// Decimal percentage within `0..=100` range.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(Decimal);

impl Percent {
    /// Zero [`Percent`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Percent`] by checking the provided value is not less
    /// than `0` and not greater than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val.normalize()))
        }
    }

    /// Returns this [`Percent`] as a fraction in `0..=1` range (e.g. `0.25`
    /// for 25%).
    #[must_use]
    pub fn fraction(self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}

impl TryFrom<u8> for Percent {
    type Error = &'static str;

    fn try_from(val: u8) -> Result<Self, Self::Error> {
        Self::new(val.into()).ok_or("percent value exceeds `100`")
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.strip_suffix('%').unwrap_or(s))
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::Decimal;
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::Percent;

    impl Serialize for Percent {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            Serialize::serialize(&self.0, s)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let val = <Decimal as Deserialize>::deserialize(d)?;
            Self::new(val).ok_or_else(|| {
                D::Error::custom("`Percent` must be within `0..=100` range")
            })
        }
    }

    #[cfg(test)]
    mod spec {
        use serde::{
            de::{value, IntoDeserializer as _},
            Deserialize as _,
        };

        use super::Percent;

        fn from<'de, D>(d: D) -> Result<Percent, value::Error>
        where
            D: serde::Deserializer<'de, Error = value::Error>,
        {
            Percent::deserialize(d)
        }

        #[test]
        fn deserializes_numbers_and_strings() {
            let expected = Percent::try_from(25_u8).unwrap();

            assert_eq!(from(25_u64.into_deserializer()).unwrap(), expected);
            assert_eq!(from("25".into_deserializer()).unwrap(), expected);
            assert!(from(101_u64.into_deserializer()).is_err());
            assert!(from("-5".into_deserializer()).is_err());
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Decimal percentage within `0..=100` range (e.g. `25` for 25%).
    #[graphql_scalar(with = Self, parse_token(String))]
    type Percent = super::Percent;

    impl Percent {
        fn to_output<S: ScalarValue>(m: &Percent) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Percent` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Percent` input scalar: {e}")
                    })
                })
        }
    }
}
