use rate_core::model::{Profile, ProfileId, ProfileIdError};
use services::InMemoryRatingApi;

const PEOPLE: [(&str, &str, Option<f64>, u64); 6] = [
    ("demo-1", "Alice", Some(8.7), 23),
    ("demo-2", "Boris", Some(7.9), 11),
    ("demo-3", "Chen", None, 0),
    ("demo-4", "Dana", Some(9.4), 40),
    ("demo-5", "Emil", Some(6.2), 5),
    ("demo-6", "Fatima", Some(9.1), 17),
];

/// Offline backend with a handful of profiles, for trying the flow locally.
pub fn seeded_api() -> Result<InMemoryRatingApi, ProfileIdError> {
    let profiles = PEOPLE
        .iter()
        .map(|(id, name, rating, total)| -> Result<Profile, ProfileIdError> {
            Ok(Profile::new(
                ProfileId::new(*id)?,
                *name,
                format!("https://picsum.photos/seed/{id}/400"),
            )
            .with_ratings(*rating, *total))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut top: Vec<Profile> = profiles
        .iter()
        .filter(|p| p.average_rating().is_some())
        .cloned()
        .collect();
    top.sort_by(|a, b| {
        b.average_rating()
            .partial_cmp(&a.average_rating())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let me = Profile::new(ProfileId::new("demo-me")?, "You", "").with_ratings(Some(7.4), 9);

    Ok(InMemoryRatingApi::new()
        .with_profiles(profiles)
        .with_top(top)
        .with_my_profile(me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::RatingApi;

    #[tokio::test]
    async fn top_is_sorted_best_first() {
        let api = seeded_api().unwrap();
        let top = api.top_five().await.unwrap();

        assert_eq!(top.len(), 5);
        assert_eq!(top[0].name(), "Dana");
        assert!(top.windows(2).all(|w| w[0].average_rating() >= w[1].average_rating()));
    }
}
