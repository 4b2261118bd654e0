/// How many candidates to offer when there is no exact match.
pub const DEFAULT_SIMILAR_LIMIT: usize = 10;

/// Case-insensitive exact match; returns the catalog's spelling.
pub fn find_exact<'a>(products: &'a [String], query: &str) -> Option<&'a str> {
    let query = query.to_lowercase();
    products
        .iter()
        .find(|p| p.to_lowercase() == query)
        .map(String::as_str)
}

/// Products containing `query` (case-insensitive), sorted, at most `limit`.
pub fn find_similar(products: &[String], query: &str, limit: usize) -> Vec<String> {
    let query = query.to_lowercase();
    let mut results: Vec<String> = products
        .iter()
        .filter(|p| p.to_lowercase().contains(&query))
        .cloned()
        .collect();

    results.sort();
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_exact() {
        let products = products(&["python", "Python3", "nodejs", "go", "rust"]);

        assert_eq!(find_exact(&products, "python"), Some("python"));
        assert_eq!(find_exact(&products, "PYTHON"), Some("python"));
        assert_eq!(find_exact(&products, "python3"), Some("Python3"));
        assert_eq!(find_exact(&products, "java"), None);
        assert_eq!(find_exact(&products, "pyth"), None);
        assert_eq!(find_exact(&products, ""), None);
    }

    #[test]
    fn test_find_similar_substring_sorted() {
        let products = products(&[
            "python",
            "python2",
            "python3",
            "postgres",
            "postgresql",
            "go",
            "golang",
        ]);

        assert_eq!(
            find_similar(&products, "python", 10),
            vec!["python", "python2", "python3"]
        );
        assert_eq!(
            find_similar(&products, "post", 10),
            vec!["postgres", "postgresql"]
        );
        assert_eq!(find_similar(&products, "GO", 10), vec!["go", "golang"]);
        assert!(find_similar(&products, "java", 10).is_empty());
    }

    #[test]
    fn test_find_similar_respects_limit() {
        let products = products(&["python3", "python", "python2"]);
        assert_eq!(find_similar(&products, "py", 2), vec!["python", "python2"]);
    }
}
