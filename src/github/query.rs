//! Search query construction for automatic project selection.
//!
//! Pure string building, no I/O. The query uses GitHub's search qualifier
//! syntax with literal `+` separators, interpolated into the URL as-is.

use crate::config::AutomaticSettings;

/// Builds the search query for the automatic strategy.
///
/// Shape: `user:{username}+fork:{include}` followed by one `+-repo:{name}`
/// clause per excluded repository. The fork qualifier is the negation of
/// the configured exclude flag.
#[must_use]
pub fn build_search_query(username: &str, automatic: &AutomaticSettings) -> String {
    let exclusions: String = automatic
        .exclude_projects
        .iter()
        .map(|name| format!("+-repo:{name}"))
        .collect();

    format!(
        "user:{}+fork:{}{}",
        username, !automatic.exclude_forks, exclusions
    )
}

/// Builds the full repository-search URL against the given API base.
#[must_use]
pub fn build_search_url(base_url: &str, username: &str, automatic: &AutomaticSettings) -> String {
    format!(
        "{}/search/repositories?q={}&sort={}&per_page={}&type=Repositories",
        base_url,
        build_search_query(username, automatic),
        automatic.sort_by.as_query_param(),
        automatic.limit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortBy;

    fn settings(exclude_forks: bool, exclude_projects: &[&str]) -> AutomaticSettings {
        AutomaticSettings {
            sort_by: SortBy::Stars,
            limit: 8,
            exclude_forks,
            exclude_projects: exclude_projects.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_query_without_exclusions() {
        let q = build_search_query("octocat", &settings(false, &[]));
        assert_eq!(q, "user:octocat+fork:true");
    }

    #[test]
    fn test_fork_flag_is_negation_of_exclude() {
        let q = build_search_query("octocat", &settings(true, &[]));
        assert_eq!(q, "user:octocat+fork:false");
    }

    #[test]
    fn test_one_clause_per_exclusion() {
        let q = build_search_query(
            "octocat",
            &settings(true, &["octocat/ignored", "octocat/other"]),
        );
        assert_eq!(
            q,
            "user:octocat+fork:false+-repo:octocat/ignored+-repo:octocat/other"
        );
        assert_eq!(q.matches("-repo:").count(), 2);
    }

    #[test]
    fn test_full_url() {
        let mut s = settings(true, &["octocat/ignored"]);
        s.sort_by = SortBy::Updated;
        s.limit = 4;
        let url = build_search_url("https://api.github.com", "octocat", &s);
        assert_eq!(
            url,
            "https://api.github.com/search/repositories?q=user:octocat+fork:false+-repo:octocat/ignored&sort=updated&per_page=4&type=Repositories"
        );
    }
}
