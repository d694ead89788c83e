//! Free-text location resolution against an ordered gazetteer.
//!
//! Resolution is substring containment, walked in declared order: the first
//! keyword found anywhere in the lower-cased query wins. A query naming both
//! a broad city and a specific neighbourhood therefore resolves to whichever
//! appears first in the table, not to the more specific one. ZIP codes sit
//! ahead of every place name, so "City, ST 77036" resolves to the ZIP.
//! Queries that match nothing resolve to the gazetteer's default coordinate.

use nearbite_geo::Coordinate;
use once_cell::sync::Lazy;
use std::borrow::Cow;

/// Houston city centre; the fallback for unmatched queries.
pub const DEFAULT_LOCATION: Coordinate = Coordinate::new(29.7604, -95.3698);

/// Built-in keyword table, in match order.
pub const HOUSTON_GAZETTEER: &[(&str, Coordinate)] = &[
    // ZIP codes, ascending, ahead of all place names
    ("77002", Coordinate::new(29.7589, -95.3677)),
    ("77004", Coordinate::new(29.7244, -95.3592)),
    ("77006", Coordinate::new(29.7425, -95.3889)),
    ("77019", Coordinate::new(29.7481, -95.4194)),
    ("77027", Coordinate::new(29.7508, -95.4617)),
    ("77036", Coordinate::new(29.7119, -95.5136)),
    ("77057", Coordinate::new(29.7389, -95.4619)),
    ("77063", Coordinate::new(29.7419, -95.5203)),
    ("77074", Coordinate::new(29.6964, -95.5294)),
    ("77081", Coordinate::new(29.7028, -95.4983)),
    ("77098", Coordinate::new(29.7344, -95.4161)),
    ("77099", Coordinate::new(29.6619, -95.6075)),
    ("94102", Coordinate::new(37.7813, -122.4167)),
    ("94103", Coordinate::new(37.7726, -122.4119)),
    // Houston areas
    ("houston", Coordinate::new(29.7604, -95.3698)),
    ("downtown", Coordinate::new(29.7589, -95.3677)),
    ("midtown", Coordinate::new(29.7425, -95.3889)),
    ("uptown", Coordinate::new(29.7508, -95.4617)),
    ("galleria", Coordinate::new(29.7389, -95.4619)),
    ("rice village", Coordinate::new(29.7181, -95.4212)),
    ("montrose", Coordinate::new(29.7396, -95.3929)),
    ("heights", Coordinate::new(29.7997, -95.4056)),
    ("memorial", Coordinate::new(29.7628, -95.5342)),
    ("bellaire", Coordinate::new(29.7058, -95.4672)),
    ("chinatown", Coordinate::new(29.7067, -95.5067)),
    ("hillcroft", Coordinate::new(29.7119, -95.5136)),
    ("westheimer", Coordinate::new(29.7386, -95.4617)),
    ("san francisco", Coordinate::new(37.7749, -122.4194)),
];

static BUILTIN: Lazy<Gazetteer> = Lazy::new(Gazetteer::houston);

/// Resolves `text` against the built-in Houston gazetteer.
///
/// Never fails; unknown text yields [`DEFAULT_LOCATION`].
///
/// ```
/// use nearbite_search::{resolve_location, DEFAULT_LOCATION};
///
/// let galleria = resolve_location("Galleria mall");
/// assert_eq!(galleria.latitude, 29.7389);
/// assert_eq!(resolve_location("unknown place xyz"), DEFAULT_LOCATION);
/// ```
pub fn resolve_location(text: &str) -> Coordinate {
    BUILTIN.resolve(text)
}

/// The built-in gazetteer, shared.
pub fn builtin() -> &'static Gazetteer {
    &BUILTIN
}

/// Outcome of a resolution, including which keyword (if any) matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub coordinate: Coordinate,
    /// `None` when the default coordinate was used
    pub keyword: Option<&'a str>,
}

impl Resolution<'_> {
    /// True if no keyword matched.
    pub fn is_fallback(&self) -> bool {
        self.keyword.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    keyword: Cow<'static, str>,
    coordinate: Coordinate,
}

/// An ordered keyword → coordinate table with a fallback coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Gazetteer {
    entries: Vec<Entry>,
    default: Coordinate,
}

impl Gazetteer {
    /// The built-in Houston table with [`DEFAULT_LOCATION`] as fallback.
    pub fn houston() -> Self {
        HOUSTON_GAZETTEER
            .iter()
            .fold(Self::empty(DEFAULT_LOCATION), |g, &(keyword, coordinate)| {
                g.with_entry(keyword, coordinate)
            })
    }

    /// A table with no keywords; every query resolves to `default`.
    pub fn empty(default: Coordinate) -> Self {
        Self { entries: Vec::new(), default }
    }

    /// Builds a table from `(keyword, coordinate)` pairs, keeping their order.
    pub fn new<K>(entries: impl IntoIterator<Item = (K, Coordinate)>, default: Coordinate) -> Self
    where
        K: Into<Cow<'static, str>>,
    {
        entries
            .into_iter()
            .fold(Self::empty(default), |g, (keyword, coordinate)| g.with_entry(keyword, coordinate))
    }

    /// Appends a keyword after all existing ones.
    ///
    /// Keywords are stored lower-cased. Blank keywords are ignored since they
    /// would match every query and shadow everything after them.
    pub fn with_entry(mut self, keyword: impl Into<Cow<'static, str>>, coordinate: Coordinate) -> Self {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            tracing::warn!("Ignoring blank gazetteer keyword");
            return self;
        }
        let keyword = if keyword.chars().any(char::is_uppercase) {
            Cow::Owned(keyword.to_lowercase())
        } else {
            keyword
        };
        self.entries.push(Entry { keyword, coordinate });
        self
    }

    /// Replaces the fallback coordinate.
    pub fn with_default(mut self, default: Coordinate) -> Self {
        self.default = default;
        self
    }

    /// The fallback coordinate.
    pub fn default_location(&self) -> Coordinate {
        self.default
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords in match order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_ref())
    }

    /// Resolves `query` to a coordinate. Never fails.
    pub fn resolve(&self, query: &str) -> Coordinate {
        self.resolve_match(query).coordinate
    }

    /// Resolves `query`, reporting the matched keyword.
    pub fn resolve_match(&self, query: &str) -> Resolution<'_> {
        let query = query.to_lowercase();

        match self.entries.iter().find(|e| query.contains(e.keyword.as_ref())) {
            Some(entry) => {
                tracing::debug!(keyword = %entry.keyword, coordinate = %entry.coordinate, "Gazetteer match");
                Resolution {
                    coordinate: entry.coordinate,
                    keyword: Some(entry.keyword.as_ref()),
                }
            }
            None => {
                tracing::debug!(query = %query, "No gazetteer match, using default location");
                Resolution {
                    coordinate: self.default,
                    keyword: None,
                }
            }
        }
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::houston()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_houston() {
        assert_eq!(resolve_location("Houston"), Coordinate::new(29.7604, -95.3698));
    }

    #[test]
    fn test_resolve_san_francisco() {
        assert_eq!(resolve_location("San Francisco"), Coordinate::new(37.7749, -122.4194));
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        let resolution = builtin().resolve_match("unknown place xyz");
        assert_eq!(resolution.coordinate, DEFAULT_LOCATION);
        assert!(resolution.is_fallback());
        assert_eq!(resolve_location(""), DEFAULT_LOCATION);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(resolve_location("DOWNTOWN"), resolve_location("downtown"));
        assert_eq!(resolve_location("DOWNTOWN"), Coordinate::new(29.7589, -95.3677));
    }

    #[test]
    fn test_zip_codes() {
        assert_eq!(resolve_location("77036"), Coordinate::new(29.7119, -95.5136));
        assert_eq!(resolve_location("TX 77036"), Coordinate::new(29.7119, -95.5136));
    }

    #[test]
    fn test_zip_beats_city_name() {
        let resolution = builtin().resolve_match("Houston, TX 77036");
        assert_eq!(resolution.keyword, Some("77036"));
        assert_eq!(resolution.coordinate, Coordinate::new(29.7119, -95.5136));

        let resolution = builtin().resolve_match("San Francisco, CA 94103");
        assert_eq!(resolution.keyword, Some("94103"));
        assert_eq!(resolution.coordinate, Coordinate::new(37.7726, -122.4119));

        assert_eq!(builtin().resolve_match("Montrose 77006").keyword, Some("77006"));
    }

    #[test]
    fn test_neighbourhoods() {
        assert_eq!(resolve_location("Hillcroft"), Coordinate::new(29.7119, -95.5136));
        assert_eq!(resolve_location("Galleria"), Coordinate::new(29.7389, -95.4619));
    }

    #[test]
    fn test_substring_not_token_match() {
        // "heights" is contained in "Heightsville"
        assert_eq!(resolve_location("Heightsville"), Coordinate::new(29.7997, -95.4056));
    }

    #[test]
    fn test_first_declared_keyword_wins() {
        // Both "galleria" and "houston" appear; "houston" is declared first.
        let resolution = builtin().resolve_match("Galleria, Houston");
        assert_eq!(resolution.keyword, Some("houston"));
        assert_eq!(resolution.coordinate, DEFAULT_LOCATION);

        // Specificity does not matter either: "montrose" precedes "westheimer".
        assert_eq!(builtin().resolve_match("Westheimer Rd, Montrose").keyword, Some("montrose"));
    }

    #[test]
    fn test_custom_gazetteer_keeps_order_and_lowercases() {
        let home = Coordinate::new(1.0, 1.0);
        let gazetteer = Gazetteer::new(
            [
                ("Old Town", Coordinate::new(2.0, 2.0)),
                ("Town", Coordinate::new(3.0, 3.0)),
            ],
            home,
        );
        assert_eq!(gazetteer.keywords().collect::<Vec<_>>(), ["old town", "town"]);
        assert_eq!(gazetteer.resolve("OLD TOWN square"), Coordinate::new(2.0, 2.0));
        assert_eq!(gazetteer.resolve("new town"), Coordinate::new(3.0, 3.0));
        assert_eq!(gazetteer.resolve("village"), home);
    }

    #[test]
    fn test_blank_keywords_ignored() {
        let gazetteer = Gazetteer::empty(DEFAULT_LOCATION)
            .with_entry("", Coordinate::new(0.0, 0.0))
            .with_entry("   ", Coordinate::new(0.0, 0.0));
        assert!(gazetteer.is_empty());
        assert_eq!(gazetteer.resolve("anywhere"), DEFAULT_LOCATION);
    }

    #[test]
    fn test_with_default() {
        let sf = Coordinate::new(37.7749, -122.4194);
        let gazetteer = Gazetteer::houston().with_default(sf);
        assert_eq!(gazetteer.resolve("nowhere"), sf);
        assert_eq!(gazetteer.len(), HOUSTON_GAZETTEER.len());
    }
}
