// Catalogue of selectable news outlets.

/// A NewsAPI source the CLI lets users pick by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outlet {
    pub name: &'static str,
    pub id: &'static str,
}

pub const OUTLETS: &[Outlet] = &[
    Outlet { name: "ABC News", id: "abc-news" },
    Outlet { name: "Associated Press", id: "associated-press" },
    Outlet { name: "CNN", id: "cnn" },
    Outlet { name: "Fox News", id: "fox-news" },
    Outlet { name: "Politico", id: "politico" },
    Outlet { name: "The Wall Street Journal", id: "the-wall-street-journal" },
    Outlet { name: "WSJ", id: "the-wall-street-journal" },
    Outlet { name: "The Washington Post", id: "the-washington-post" },
    Outlet { name: "BBC News", id: "bbc-news" },
    Outlet { name: "Reuters", id: "reuters" },
    Outlet { name: "The Times of India", id: "the-times-of-india" },
];

/// Resolve a display name (case-insensitive) or source id to an outlet.
pub fn resolve_source(query: &str) -> Option<&'static Outlet> {
    let query = query.trim();
    OUTLETS
        .iter()
        .find(|o| o.name.eq_ignore_ascii_case(query))
        .or_else(|| OUTLETS.iter().find(|o| o.id == query.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_name() {
        assert_eq!(resolve_source("fox news").unwrap().id, "fox-news");
        assert_eq!(resolve_source("  Reuters ").unwrap().id, "reuters");
    }

    #[test]
    fn test_resolve_alias() {
        assert_eq!(resolve_source("WSJ").unwrap().id, "the-wall-street-journal");
    }

    #[test]
    fn test_resolve_by_id() {
        assert_eq!(resolve_source("bbc-news").unwrap().name, "BBC News");
        assert_eq!(
            resolve_source("the-wall-street-journal").unwrap().name,
            "The Wall Street Journal"
        );
    }

    #[test]
    fn test_unknown_source() {
        assert!(resolve_source("The Onion").is_none());
    }
}
