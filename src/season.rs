use chrono::Datelike;

// July and August have no regular season or playoff games.
const OFF_SEASON_MONTHS: [u32; 2] = [7, 8];

/// Whether `date` falls inside the NHL season (anything but July and August).
pub fn is_in_season(date: impl Datelike) -> bool {
    !OFF_SEASON_MONTHS.contains(&date.month())
}

/// [`is_in_season`] for the current local date.
pub fn check_season() -> bool {
    is_in_season(chrono::Local::now())
}
