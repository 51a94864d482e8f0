use bigdecimal::{BigDecimal, Zero};
use serde::{Serialize, Serializer};

use super::customer::CustomerId;

/// Position of a customer when all customers are ordered by valid paid total.
///
/// Ties share a rank and the next rank is skipped (competition ranking), so
/// totals `[300, 200, 200, 100]` rank as `1, 2, 2, 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesRank {
    Ranked(u32),
    /// The customer has no valid paid total.
    Unranked,
}

impl SalesRank {
    pub fn from_position(position: Option<i64>) -> Self {
        match position {
            Some(n) if n >= 1 => SalesRank::Ranked(u32::try_from(n).unwrap_or(u32::MAX)),
            _ => SalesRank::Unranked,
        }
    }

    pub fn position(self) -> Option<u32> {
        match self {
            SalesRank::Ranked(n) => Some(n),
            SalesRank::Unranked => None,
        }
    }
}

impl Serialize for SalesRank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.position().serialize(serializer)
    }
}

/// Rank `customer` against per-customer valid paid totals.
///
/// `totals` holds one entry per customer. A customer missing from it, or with
/// a total that is not positive, is unranked.
pub fn competition_rank(totals: &[(CustomerId, BigDecimal)], customer: CustomerId) -> SalesRank {
    let Some(own) = totals
        .iter()
        .find(|(id, _)| *id == customer)
        .map(|(_, total)| total)
    else {
        return SalesRank::Unranked;
    };

    if *own <= BigDecimal::zero() {
        return SalesRank::Unranked;
    }

    let ahead = totals
        .iter()
        .filter(|(id, total)| *id != customer && total > own)
        .count();

    SalesRank::from_position(i64::try_from(ahead).ok().map(|n| n + 1))
}
