/// Next sequential record id: one past the largest numeric id present.
///
/// Non-numeric ids are ignored, so a collection with only foreign ids
/// starts over at "1".
pub fn next_id<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = ids
        .into_iter()
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    (max + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_starts_at_one() {
        assert_eq!(next_id(std::iter::empty()), "1");
    }

    #[test]
    fn test_gap_after_delete_does_not_reuse() {
        // "2" was deleted; a length-based id would hand out "3" again
        assert_eq!(next_id(["1", "3"]), "4");
    }

    #[test]
    fn test_ignores_non_numeric() {
        assert_eq!(next_id(["abc", "7", "1700000000000x"]), "8");
    }
}
