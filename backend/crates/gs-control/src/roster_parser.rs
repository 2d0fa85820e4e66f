use gs_core::Player;

/// Parse the query tool's `players` output.
///
/// The first non-blank line is a header. Every following line carries one
/// bullet character before the name; the bullet is dropped, the rest trimmed,
/// and blank names skipped.
pub fn parse_roster(output: &str) -> Vec<Player> {
    output
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .skip(1)
        .filter_map(|line| {
            let mut chars = line.chars();
            chars.next()?;
            Player::new(chars.as_str()).ok()
        })
        .collect()
}
