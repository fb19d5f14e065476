/// Rows shown in the homepage table snapshot.
pub const TABLE_WINDOW_SIZE: usize = 3;

/// Picks the contiguous block of at most three rows around the team of
/// interest, which lands in the middle whenever it is neither first nor
/// last. Without a match the top of the table is returned.
pub fn window<T, F>(rows: &[T], is_team_of_interest: F) -> &[T]
where
    F: Fn(&T) -> bool,
{
    let Some(supported_index) = rows.iter().position(is_team_of_interest) else {
        return &rows[..rows.len().min(TABLE_WINDOW_SIZE)];
    };

    let mut start = supported_index.saturating_sub(1);
    let mut end = start + TABLE_WINDOW_SIZE;
    if end > rows.len() {
        end = rows.len();
        start = end.saturating_sub(TABLE_WINDOW_SIZE);
    }

    &rows[start..end]
}
