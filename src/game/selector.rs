//! Stock-weighted gift selection.

use rand::Rng;

use crate::models::Gift;

/// Pick a gift with probability proportional to its remaining stock.
///
/// Gifts with zero stock can never win. Returns `None` when everything is
/// out of stock; callers surface that instead of crashing. The draw is a
/// single decision; redraws are the caller's bug to avoid.
pub fn pick_gift<'a, R: Rng + ?Sized>(gifts: &'a [Gift], rng: &mut R) -> Option<&'a Gift> {
    let total: u32 = gifts.iter().map(|g| g.remaining_stock).sum();
    if total == 0 {
        return None;
    }

    let mut point = rng.random_range(0..total);
    for gift in gifts.iter().filter(|g| g.remaining_stock > 0) {
        if point < gift.remaining_stock {
            return Some(gift);
        }
        point -= gift.remaining_stock;
    }

    // The walk always lands inside a weight band; this is the safe end stop.
    gifts.iter().rev().find(|g| g.remaining_stock > 0)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn gift(id: &str, stock: u32) -> Gift {
        Gift {
            id: id.to_string(),
            name: id.to_uppercase(),
            image: String::new(),
            remaining_stock: stock,
            color: String::new(),
        }
    }

    #[test]
    fn sole_stocked_gift_always_wins() {
        let gifts = vec![gift("g1", 0), gift("g2", 3)];
        for seed in 0..100u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = pick_gift(&gifts, &mut rng).unwrap();
            assert_eq!(picked.id, "g2");
        }
    }

    #[test]
    fn all_stock_zero_yields_none() {
        let gifts = vec![gift("g1", 0), gift("g2", 0)];
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(pick_gift(&gifts, &mut rng).is_none());
        }
    }

    #[test]
    fn empty_inventory_yields_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick_gift(&[], &mut rng).is_none());
    }

    #[test]
    fn zero_stock_is_never_chosen() {
        let gifts = vec![gift("g1", 0), gift("g2", 5), gift("g3", 0), gift("g4", 1)];
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let picked = pick_gift(&gifts, &mut rng).unwrap();
            assert!(picked.remaining_stock > 0);
        }
    }

    #[test]
    fn selection_ratio_tracks_stock() {
        let gifts = vec![gift("big", 90), gift("small", 10)];
        let mut rng = StdRng::seed_from_u64(1234);

        let trials = 10_000;
        let mut big = 0;
        for _ in 0..trials {
            if pick_gift(&gifts, &mut rng).unwrap().id == "big" {
                big += 1;
            }
        }

        // Expect ~9000 of 10000; allow a generous band around the mean.
        assert!(
            (8700..=9300).contains(&big),
            "big gift won {} of {} draws",
            big,
            trials
        );
    }
}
