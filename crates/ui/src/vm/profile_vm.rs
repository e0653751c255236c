use rate_core::model::{Profile, ProfileId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileCardVm {
    pub id: ProfileId,
    pub name: String,
    pub photo_url: String,
    pub average_label: String,
}

#[must_use]
pub fn map_profile_card(profile: &Profile) -> ProfileCardVm {
    ProfileCardVm {
        id: profile.id().clone(),
        name: profile.name().to_string(),
        photo_url: profile.photo_url().to_string(),
        average_label: format_average(profile.average_rating()),
    }
}

/// Unrated profiles show `0.0`.
#[must_use]
pub fn format_average(rating: Option<f64>) -> String {
    match rating {
        Some(value) if value > 0.0 => format!("{value:.1}"),
        _ => "0.0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_shows_zero() {
        let profile = Profile::new(ProfileId::new("P1").unwrap(), "Alice", "a.jpg");
        let card = map_profile_card(&profile);
        assert_eq!(card.average_label, "0.0");
        assert_eq!(card.name, "Alice");

        assert_eq!(format_average(Some(0.0)), "0.0");
    }

    #[test]
    fn rated_profile_shows_one_decimal() {
        assert_eq!(format_average(Some(8.0)), "8.0");
        assert_eq!(format_average(Some(9.76)), "9.8");
    }
}
