use std::fmt::{Debug, Display};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DECIMALS: u8 = 2;

/// Money with two fixed decimal places, stored as minor units in an i64.
/// Addition and subtraction are exact; division by a session count truncates
/// toward zero at minor-unit precision.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub fn int(value: i64) -> Amount {
        Amount(value * 10i64.pow(DECIMALS as u32))
    }

    pub fn zero() -> Amount {
        Amount(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    pub fn min(self, other: Amount) -> Amount {
        Amount(self.0.min(other.0))
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0 as f64 / 10i64.pow(DECIMALS as u32) as f64;
        write!(f, "{:.2}", value)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0 as f64 / 10i64.pow(DECIMALS as u32) as f64;
        write!(f, "{:.2}", value)
    }
}

impl std::ops::Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Amount;

    fn sub(self, other: Amount) -> Amount {
        Amount(self.0 - other.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, other: Amount) {
        self.0 += other.0;
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, other: Amount) {
        self.0 -= other.0;
    }
}

impl std::ops::Mul<u32> for Amount {
    type Output = Amount;

    fn mul(self, count: u32) -> Amount {
        Amount(self.0 * count as i64)
    }
}

/// Truncating division of minor units. The divisor must be non-zero.
impl std::ops::Div<u32> for Amount {
    type Output = Amount;

    fn div(self, count: u32) -> Amount {
        Amount(self.0 / count as i64)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Ok(Amount(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!("2400000.00", format!("{}", Amount::int(2_400_000)));
        assert_eq!("-150.00", format!("{}", Amount::int(-150)));
        assert_eq!("0.00", format!("{}", Amount::zero()));
    }

    #[test]
    fn test_add_sub_exact() {
        let total = Amount::int(2_400_000);
        let earned = Amount::int(1_000_000);
        assert_eq!(total - earned, Amount::int(1_400_000));
        assert_eq!((total - earned) + earned, total);
    }

    #[test]
    fn test_mul_div_by_count() {
        let total = Amount::int(2_400_000);
        let per_session = total / 12;
        assert_eq!(per_session, Amount::int(200_000));
        assert_eq!(per_session * 5, Amount::int(1_000_000));
    }

    #[test]
    fn test_div_truncates() {
        // 100.00 over 3 sessions: 33.33 each, the odd cent stays behind
        let total = Amount::int(100);
        let per_session = total / 3;
        assert_eq!(per_session.inner(), 3333);
        assert_eq!((per_session * 3).inner(), 9999);
    }

    #[test]
    fn test_min() {
        let a = Amount::int(10);
        let b = Amount::int(7);
        assert_eq!(a.min(b), b);
        assert_eq!(b.min(a), b);
    }

    #[test]
    fn test_serde_minor_units() {
        let amount = Amount::int(1_000_000);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "100000000");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
