use crate::domain::Match;

/// Selects the matches in which `team` played at home or away, preserving their order.
pub fn select_matches<'a>(matches: &'a [Match], team: &str) -> Vec<&'a Match> {
    matches.iter().filter(|m| m.involves(team)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture;

    #[test]
    fn home_or_away() {
        let matches = vec![
            fixture(1, "Leicester City", "Sunderland"),
            fixture(2, "Arsenal", "Liverpool"),
            fixture(3, "West Ham United", "Leicester City"),
            fixture(4, "Chelsea", "Everton"),
        ];
        let selected = select_matches(&matches, "Leicester City");
        assert_eq!(
            vec![1, 3],
            selected.iter().map(|m| m.id).collect::<Vec<_>>()
        );
        for m in &matches {
            let is_selected = selected.iter().any(|s| s.id == m.id);
            assert_eq!(
                m.home_team == "Leicester City" || m.away_team == "Leicester City",
                is_selected
            );
        }
    }

    #[test]
    fn exact_name_only() {
        let matches = vec![fixture(1, "Leicester City", "Sunderland")];
        assert!(select_matches(&matches, "Leicester").is_empty());
        assert!(select_matches(&matches, "leicester city").is_empty());
    }

    #[test]
    fn empty() {
        assert!(select_matches(&[], "Leicester City").is_empty());
    }
}
