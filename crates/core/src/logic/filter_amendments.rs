use crate::prelude::*;

/// Ids of every enabled amendment, in the order the network reported them.
///
/// Duplicates pass through untouched; the network is trusted not to repeat
/// itself.
pub fn enabled_amendment_ids(amendments: &[Amendment]) -> Vec<String> {
    amendments
        .iter()
        .filter(|a| a.enabled)
        .map(|a| a.index.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amendment(index: &str, enabled: bool) -> Amendment {
        Amendment {
            name: format!("feature-{index}"),
            index: index.to_owned(),
            enabled,
            obsolete: false,
        }
    }

    #[test]
    fn empty_input() {
        assert!(enabled_amendment_ids(&[]).is_empty());
    }

    #[test]
    fn all_disabled() {
        let amendments = [amendment("AA", false), amendment("BB", false)];
        assert!(enabled_amendment_ids(&amendments).is_empty());
    }

    #[test]
    fn preserves_reported_order() {
        let amendments = [
            amendment("CC", true),
            amendment("AA", false),
            amendment("BB", true),
            amendment("DD", true),
        ];
        assert_eq!(enabled_amendment_ids(&amendments), ["CC", "BB", "DD"]);
    }

    #[test]
    fn duplicates_pass_through() {
        let amendments = [amendment("AA", true), amendment("AA", true)];
        assert_eq!(enabled_amendment_ids(&amendments), ["AA", "AA"]);
    }
}
