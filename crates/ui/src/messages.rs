//! Text shown to the user through the host's alert primitive.

pub const LOAD_FAILED: &str = "Could not load a profile. Please try again.";
pub const NO_PROFILE: &str = "No profile loaded";
pub const SUBMIT_FAILED: &str = "Could not submit the rating. Please try again.";
pub const MY_PROFILE_MISSING: &str = "Profile not found. Create a profile through the bot.";
pub const MY_PROFILE_FAILED: &str = "Could not load your profile.";
pub const TOP_FAILED: &str = "Could not load the top 5.";
pub const TOP_EMPTY: &str = "No users in the top yet";

#[must_use]
pub fn submit_success(score: f64) -> String {
    format!("✅ Rating {score:.1} submitted!")
}

#[must_use]
pub fn my_profile_summary(average_label: &str, total_ratings: u64) -> String {
    format!("Your rating: {average_label}\nTotal ratings: {total_ratings}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_shows_one_decimal() {
        assert_eq!(submit_success(10.0), "✅ Rating 10.0 submitted!");
        assert_eq!(submit_success(9.5), "✅ Rating 9.5 submitted!");
    }

    #[test]
    fn summary_has_two_lines() {
        assert_eq!(
            my_profile_summary("8.4", 17),
            "Your rating: 8.4\nTotal ratings: 17"
        );
    }
}
