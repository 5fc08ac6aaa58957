use std::collections::BTreeMap;

/// Maps a raw country name to its ISO 3166-1 alpha-2 code.
///
/// The lookup is case-insensitive against the configured alias table (code to
/// lowercased alias names). Returns the empty string when no alias matches,
/// which the consumer mapper emits verbatim. New countries are added through
/// configuration without touching any caller.
pub fn country_to_code<'a>(country: &str, aliases: &'a BTreeMap<String, Vec<String>>) -> &'a str {
    let needle = country.to_lowercase();

    for (code, names) in aliases {
        if names.iter().any(|name| *name == needle) {
            return code;
        }
    }

    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brazil_aliases() -> BTreeMap<String, Vec<String>> {
        BTreeMap::from([(
            "BR".to_string(),
            vec!["brasil".to_string(), "brazil".to_string()],
        )])
    }

    #[test]
    fn known_aliases_map_to_code_case_insensitively() {
        let aliases = brazil_aliases();

        assert_eq!(country_to_code("Brasil", &aliases), "BR");
        assert_eq!(country_to_code("BRAZIL", &aliases), "BR");
        assert_eq!(country_to_code("brazil", &aliases), "BR");
    }

    #[test]
    fn unknown_countries_map_to_empty_string() {
        let aliases = brazil_aliases();

        assert_eq!(country_to_code("Argentina", &aliases), "");
        assert_eq!(country_to_code("", &aliases), "");
    }

    #[test]
    fn extending_the_alias_table_adds_countries() {
        let mut aliases = brazil_aliases();
        aliases.insert(
            "NL".to_string(),
            vec!["netherlands".to_string(), "nederland".to_string()],
        );

        assert_eq!(country_to_code("Nederland", &aliases), "NL");
        assert_eq!(country_to_code("Brasil", &aliases), "BR");
    }
}
