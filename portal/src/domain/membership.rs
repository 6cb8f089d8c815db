//! Membership tiers, reward points and coupons.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

/// A rung on the membership ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipTier {
    pub name: String,
    pub color: String,
    pub points_required: u32,
    pub benefits: Vec<String>,
}

/// A coupon bought with reward points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points_cost: u32,
    pub expiry_date: NaiveDate,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointsEntryKind {
    Earned,
    Redeemed,
}

impl FromStr for PointsEntryKind {
    type Err = MembershipValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earned" => Ok(Self::Earned),
            "redeemed" => Ok(Self::Redeemed),
            _ => Err(MembershipValidationError::UnknownEntryKind {
                input: s.to_owned(),
            }),
        }
    }
}

/// One line of the points ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsEntry {
    pub date: NaiveDate,
    pub description: String,
    /// Signed delta: positive when earned, negative when redeemed.
    pub points: i32,
    pub kind: PointsEntryKind,
}

/// Validation errors raised while building a [`Membership`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipValidationError {
    NoTiers,
    /// The lowest tier must be reachable with zero points.
    LowestTierNotFree { tier: String, points_required: u32 },
    DuplicateThreshold { points_required: u32 },
    UnknownEntryKind { input: String },
}

impl fmt::Display for MembershipValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTiers => f.write_str("membership requires at least one tier"),
            Self::LowestTierNotFree {
                tier,
                points_required,
            } => write!(
                f,
                "lowest tier '{tier}' must require 0 points (requires {points_required})"
            ),
            Self::DuplicateThreshold { points_required } => {
                write!(f, "two tiers share the {points_required}-point threshold")
            }
            Self::UnknownEntryKind { input } => write!(f, "unknown points entry type: {input}"),
        }
    }
}

impl std::error::Error for MembershipValidationError {}

/// Where the customer stands on the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStatus {
    pub balance: u32,
    pub current_tier: String,
    pub next_tier: Option<String>,
    pub points_to_next: Option<u32>,
    /// Whole-percent progress toward the next tier's threshold.
    pub progress_percent: u8,
}

/// The customer's membership: ladder, balance, coupons and ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    tiers: Vec<MembershipTier>,
    balance: u32,
    coupons: Vec<Coupon>,
    history: Vec<PointsEntry>,
}

impl Membership {
    /// Builds a membership, ordering tiers by ascending threshold.
    pub fn new(
        mut tiers: Vec<MembershipTier>,
        balance: u32,
        coupons: Vec<Coupon>,
        history: Vec<PointsEntry>,
    ) -> Result<Self, MembershipValidationError> {
        tiers.sort_by_key(|tier| tier.points_required);
        let Some(lowest) = tiers.first() else {
            return Err(MembershipValidationError::NoTiers);
        };
        if lowest.points_required != 0 {
            return Err(MembershipValidationError::LowestTierNotFree {
                tier: lowest.name.clone(),
                points_required: lowest.points_required,
            });
        }
        if let Some(pair) = tiers
            .windows(2)
            .find(|pair| matches!(pair, [a, b] if a.points_required == b.points_required))
        {
            let points_required = pair.first().map_or(0, |tier| tier.points_required);
            return Err(MembershipValidationError::DuplicateThreshold { points_required });
        }

        Ok(Self {
            tiers,
            balance,
            coupons,
            history,
        })
    }

    pub fn tiers(&self) -> &[MembershipTier] {
        self.tiers.as_slice()
    }
    /// Spendable points.
    pub fn balance(&self) -> u32 {
        self.balance
    }
    pub fn coupons(&self) -> &[Coupon] {
        self.coupons.as_slice()
    }
    /// Points ledger in registry order.
    pub fn history(&self) -> &[PointsEntry] {
        self.history.as_slice()
    }

    /// Highest tier whose threshold the balance meets.
    pub fn current_tier(&self) -> &MembershipTier {
        let reached = self
            .tiers
            .iter()
            .take_while(|tier| tier.points_required <= self.balance)
            .count();
        // The lowest tier is free, so at least one tier is always reached.
        let index = reached.saturating_sub(1);
        &self.tiers[index]
    }

    /// The tier above the current one, if any.
    pub fn next_tier(&self) -> Option<&MembershipTier> {
        self.tiers
            .iter()
            .find(|tier| tier.points_required > self.balance)
    }

    /// Current tier, next tier and progress towards it.
    ///
    /// Progress is capped at 100 once the top tier is reached.
    pub fn status(&self) -> MembershipStatus {
        let next = self.next_tier();
        let progress_percent = next.map_or(100, |tier| {
            let scaled = u64::from(self.balance) * 100;
            let percent = scaled.div_euclid(u64::from(tier.points_required));
            u8::try_from(percent.min(100)).unwrap_or(100)
        });
        MembershipStatus {
            balance: self.balance,
            current_tier: self.current_tier().name.clone(),
            next_tier: next.map(|tier| tier.name.clone()),
            points_to_next: next.map(|tier| tier.points_required - self.balance),
            progress_percent,
        }
    }

    /// Whether the balance covers the coupon's cost.
    pub fn can_redeem(&self, coupon: &Coupon) -> bool {
        self.balance >= coupon.points_cost
    }

    /// Coupons the current balance can pay for.
    pub fn redeemable_coupons(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter().filter(|coupon| self.can_redeem(coupon))
    }

    /// Total points earned across the ledger.
    pub fn lifetime_earned(&self) -> i64 {
        self.history
            .iter()
            .filter(|entry| entry.kind == PointsEntryKind::Earned)
            .map(|entry| i64::from(entry.points))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn tier(name: &str, points_required: u32) -> MembershipTier {
        MembershipTier {
            name: name.to_owned(),
            color: "gray".to_owned(),
            points_required,
            benefits: vec![],
        }
    }

    fn coupon(code: &str, points_cost: u32) -> Coupon {
        Coupon {
            id: code.to_owned(),
            title: code.to_owned(),
            description: String::new(),
            points_cost,
            expiry_date: NaiveDate::from_ymd_opt(2024, 2, 15).expect("valid date"),
            code: code.to_owned(),
        }
    }

    #[fixture]
    fn ladder() -> Vec<MembershipTier> {
        vec![
            tier("Gold", 2500),
            tier("Basic", 0),
            tier("Platinum", 5000),
            tier("Silver", 1000),
        ]
    }

    #[rstest]
    #[case(0, "Basic", Some("Silver"), Some(1000), 0)]
    #[case(999, "Basic", Some("Silver"), Some(1), 99)]
    #[case(1000, "Silver", Some("Gold"), Some(1500), 40)]
    #[case(1247, "Silver", Some("Gold"), Some(1253), 49)]
    #[case(5000, "Platinum", None, None, 100)]
    #[case(9000, "Platinum", None, None, 100)]
    fn status_tracks_the_ladder(
        ladder: Vec<MembershipTier>,
        #[case] balance: u32,
        #[case] current: &str,
        #[case] next: Option<&str>,
        #[case] to_next: Option<u32>,
        #[case] percent: u8,
    ) {
        let membership = Membership::new(ladder, balance, vec![], vec![]).expect("valid ladder");
        let status = membership.status();

        assert_eq!(status.current_tier, current);
        assert_eq!(status.next_tier.as_deref(), next);
        assert_eq!(status.points_to_next, to_next);
        assert_eq!(status.progress_percent, percent);
    }

    #[rstest]
    fn tiers_are_sorted_by_threshold(ladder: Vec<MembershipTier>) {
        let membership = Membership::new(ladder, 0, vec![], vec![]).expect("valid ladder");
        let names: Vec<&str> = membership.tiers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Basic", "Silver", "Gold", "Platinum"]);
    }

    #[rstest]
    fn rejects_empty_ladder() {
        assert_eq!(
            Membership::new(vec![], 0, vec![], vec![]),
            Err(MembershipValidationError::NoTiers)
        );
    }

    #[rstest]
    fn rejects_ladder_without_free_tier() {
        assert_eq!(
            Membership::new(vec![tier("Silver", 1000)], 0, vec![], vec![]),
            Err(MembershipValidationError::LowestTierNotFree {
                tier: "Silver".to_owned(),
                points_required: 1000,
            })
        );
    }

    #[rstest]
    fn rejects_shared_thresholds() {
        let tiers = vec![tier("Basic", 0), tier("Silver", 1000), tier("Steel", 1000)];
        assert_eq!(
            Membership::new(tiers, 0, vec![], vec![]),
            Err(MembershipValidationError::DuplicateThreshold {
                points_required: 1000
            })
        );
    }

    #[rstest]
    fn coupons_redeemable_within_balance(ladder: Vec<MembershipTier>) {
        let coupons = vec![coupon("CLEAN10", 200), coupon("BIG", 2000), coupon("EXACT", 1247)];
        let membership = Membership::new(ladder, 1247, coupons, vec![]).expect("valid ladder");

        let codes: Vec<&str> = membership
            .redeemable_coupons()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, vec!["CLEAN10", "EXACT"]);
    }

    #[rstest]
    fn lifetime_earned_ignores_redemptions(ladder: Vec<MembershipTier>) {
        let day = NaiveDate::from_ymd_opt(2024, 1, 12).expect("valid date");
        let history = vec![
            PointsEntry {
                date: day,
                description: "Pool Cleaning Service".to_owned(),
                points: 85,
                kind: PointsEntryKind::Earned,
            },
            PointsEntry {
                date: day,
                description: "Redeemed".to_owned(),
                points: -200,
                kind: PointsEntryKind::Redeemed,
            },
        ];
        let membership = Membership::new(ladder, 0, vec![], history).expect("valid ladder");
        assert_eq!(membership.lifetime_earned(), 85);
    }
}
