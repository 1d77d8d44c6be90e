use shared::domain::Breed;

/// Returns the subsequence of `breeds` whose name contains `term` as a
/// case-insensitive substring. The empty term matches everything, so the
/// input comes back unchanged in order.
pub fn filter_breeds(breeds: &[Breed], term: &str) -> Vec<Breed> {
    if term.is_empty() {
        return breeds.to_vec();
    }
    let needle = term.to_lowercase();
    breeds
        .iter()
        .filter(|breed| breed.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use shared::domain::{BreedId, Measurement};

    use super::*;

    fn breed(id: i64, name: &str) -> Breed {
        Breed {
            id: BreedId(id),
            name: name.to_string(),
            height: Measurement::default(),
            weight: Measurement::default(),
            life_span: String::new(),
            image: None,
            bred_for: String::new(),
            breed_group: String::new(),
            temperament: String::new(),
        }
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let input = vec![breed(1, "Boxer"), breed(2, "Akita")];
        assert_eq!(filter_breeds(&input, ""), input);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let input = vec![
            breed(1, "Labrador Retriever"),
            breed(2, "Boxer"),
            breed(3, "Curly-Coated Retriever"),
        ];
        let matched = filter_breeds(&input, "LAB");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Labrador Retriever");

        let retrievers = filter_breeds(&input, "retriever");
        let ids: Vec<i64> = retrievers.iter().map(|b| b.id.0).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn no_match_yields_empty() {
        let input = vec![breed(1, "Boxer")];
        assert!(filter_breeds(&input, "poodle").is_empty());
    }
}
