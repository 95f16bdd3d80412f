//! Mock receipt, report, and community-stat fabricators.
//!
//! Everything here is cosmetic. The receipt identifier looks like a
//! transaction hash and the explorer link interpolates it into a static
//! URL template, but nothing is ever written anywhere and the link
//! resolves to nothing real.

use crate::category::Category;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Length of the hex portion of a fabricated receipt identifier.
pub const RECEIPT_HEX_LEN: usize = 64;

/// Candidate sentences for the fabricated ethics report.
const REPORT_POOL: [&str; 4] = [
    "Reflection reviewed: no conflicts with community guidelines detected.",
    "Contribution aligns with the shared growth principles of the collective.",
    "Entry verified against the ethics charter; all checks passed.",
    "No integrity concerns found; reflection admitted to the community ledger.",
];

/// Produces a fabricated receipt identifier: "0x" followed by 64 random
/// lowercase hex characters.
pub fn receipt_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut id = String::with_capacity(2 + RECEIPT_HEX_LEN);
    id.push_str("0x");
    for _ in 0..RECEIPT_HEX_LEN {
        id.push(HEX[rng.gen_range(0..HEX.len())] as char);
    }
    id
}

/// Picks a fabricated ethics report sentence.
pub fn ethics_report<R: Rng + ?Sized>(rng: &mut R) -> String {
    REPORT_POOL
        .choose(rng)
        .expect("REPORT_POOL is non-empty")
        .to_string()
}

/// Interpolates a receipt identifier into the explorer URL template.
///
/// The template uses `{id}` as the placeholder.
pub fn explorer_url(template: &str, receipt_id: &str) -> String {
    template.replace("{id}", receipt_id)
}

/// Randomized community counters shown on the dashboard.
///
/// These numbers are fabricated each time; they stand in for a community
/// service that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityStats {
    /// Reflections shared across the community today
    pub reflections_today: u32,
    /// Currently active members
    pub active_members: u32,
    /// Percentage share per category, in `Category::ALL` order (sums to 100)
    pub path_shares: [u32; 4],
}

/// Fabricates community statistics within plausible-looking ranges.
pub fn community_stats<R: Rng + ?Sized>(rng: &mut R) -> CommunityStats {
    let mut path_shares = [0u32; 4];
    let mut remaining = 100u32;
    for share in path_shares.iter_mut().take(3) {
        *share = rng.gen_range(10..=remaining.saturating_sub(30).max(10));
        remaining -= *share;
    }
    path_shares[3] = remaining;
    CommunityStats {
        reflections_today: rng.gen_range(120..=900),
        active_members: rng.gen_range(40..=300),
        path_shares,
    }
}

impl CommunityStats {
    /// Returns the share for a specific category.
    pub fn share_for(&self, category: Category) -> u32 {
        let index = Category::ALL
            .iter()
            .position(|c| *c == category)
            .expect("category is one of the four");
        self.path_shares[index]
    }
}
