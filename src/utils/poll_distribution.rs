use rand::Rng;

/// Every option gets at least this share
pub const MIN_SHARE: u8 = 5;
pub const TOTAL_SHARE: u8 = 100;
/// `MAX_OPTIONS * MIN_SHARE` must fit in `TOTAL_SHARE`
pub const MAX_OPTIONS: usize = (TOTAL_SHARE / MIN_SHARE) as usize;

/// Generates a synthetic result: percentages per option summing to exactly
/// 100, each at least `MIN_SHARE`.
///
/// Options are filled greedily in order. Each draw leaves `MIN_SHARE` for
/// every option still to come and the last option takes the remainder.
/// Returns `None` for zero options or more than `MAX_OPTIONS`.
pub fn generate_distribution<R: Rng>(rng: &mut R, option_count: usize) -> Option<Vec<u8>> {
    if option_count == 0 || option_count > MAX_OPTIONS {
        return None;
    }

    let mut shares = Vec::with_capacity(option_count);
    let mut allocated: u8 = 0;

    for index in 0..option_count - 1 {
        let remaining_after = (option_count - 1 - index) as u8;
        let max = TOTAL_SHARE - allocated - MIN_SHARE * remaining_after;
        let share = rng.gen_range(MIN_SHARE..=max);
        shares.push(share);
        allocated += share;
    }
    shares.push(TOTAL_SHARE - allocated);

    Some(shares)
}
