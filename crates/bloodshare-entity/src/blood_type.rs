//! ABO/Rh blood types and the donor compatibility table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight standard ABO/Rh blood types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "blood_group")]
pub enum BloodType {
    /// O negative, the universal donor.
    #[serde(rename = "O-")]
    #[sqlx(rename = "O-")]
    ONeg,
    /// O positive.
    #[serde(rename = "O+")]
    #[sqlx(rename = "O+")]
    OPos,
    /// A negative.
    #[serde(rename = "A-")]
    #[sqlx(rename = "A-")]
    ANeg,
    /// A positive.
    #[serde(rename = "A+")]
    #[sqlx(rename = "A+")]
    APos,
    /// B negative.
    #[serde(rename = "B-")]
    #[sqlx(rename = "B-")]
    BNeg,
    /// B positive.
    #[serde(rename = "B+")]
    #[sqlx(rename = "B+")]
    BPos,
    /// AB negative.
    #[serde(rename = "AB-")]
    #[sqlx(rename = "AB-")]
    AbNeg,
    /// AB positive, the universal recipient.
    #[serde(rename = "AB+")]
    #[sqlx(rename = "AB+")]
    AbPos,
}

use BloodType::{ANeg, APos, AbNeg, AbPos, BNeg, BPos, ONeg, OPos};

impl BloodType {
    /// All eight types, in table order.
    pub const ALL: [BloodType; 8] = [ONeg, OPos, ANeg, APos, BNeg, BPos, AbNeg, AbPos];

    /// Return the canonical notation (`"AB+"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ONeg => "O-",
            OPos => "O+",
            ANeg => "A-",
            APos => "A+",
            BNeg => "B-",
            BPos => "B+",
            AbNeg => "AB-",
            AbPos => "AB+",
        }
    }

    /// Donor types whose blood a recipient of this type may receive.
    pub fn compatible_donors(&self) -> &'static [BloodType] {
        compatible_donor_types(*self)
    }

    /// Whether a donor of this type may give to `recipient`.
    pub fn can_donate_to(&self, recipient: BloodType) -> bool {
        recipient.compatible_donors().contains(self)
    }
}

/// Map a requested (recipient) type to the donor types permitted to give to it.
///
/// Static table, total over all eight types.
pub fn compatible_donor_types(requested: BloodType) -> &'static [BloodType] {
    match requested {
        ONeg => &[ONeg],
        OPos => &[ONeg, OPos],
        ANeg => &[ONeg, ANeg],
        APos => &[ONeg, OPos, ANeg, APos],
        BNeg => &[ONeg, BNeg],
        BPos => &[ONeg, OPos, BNeg, BPos],
        AbNeg => &[ONeg, ANeg, BNeg, AbNeg],
        AbPos => &BloodType::ALL,
    }
}

/// String-level lookup: an unrecognised type resolves to no compatible donors.
pub fn compatible_donor_types_str(raw: &str) -> Vec<BloodType> {
    raw.parse::<BloodType>()
        .map(|bt| compatible_donor_types(bt).to_vec())
        .unwrap_or_default()
}

/// Render a set of types as `"O-, O+, B-, B+"`.
pub fn join_types(types: &[BloodType]) -> String {
    types
        .iter()
        .map(BloodType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = bloodshare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        BloodType::ALL
            .iter()
            .copied()
            .find(|bt| bt.as_str() == normalized)
            .ok_or_else(|| {
                bloodshare_core::AppError::validation(format!(
                    "Invalid blood group: '{s}'. Expected one of: O-, O+, A-, A+, B-, B+, AB-, AB+"
                ))
            })
    }
}
