//! Field masks for partial update requests
//!
//! A field mask names which nested fields of a payload were explicitly set,
//! so the consuming API applies exactly those and leaves the rest untouched.
//! Internally it is an ordered, deduplicated list of dotted paths; on the
//! wire it renders as the service's grouped form, e.g.
//! `userEnteredFormat(backgroundColor,textFormat(bold,fontSize))`.

use std::fmt;

/// An ordered set of dotted field paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    paths: Vec<String>,
}

impl FieldMask {
    /// Create an empty mask
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dotted path, ignoring duplicates
    ///
    /// Insertion order is preserved and determines render order.
    pub fn push<S: Into<String>>(&mut self, path: S) {
        let path = path.into();
        if !self.paths.iter().any(|p| *p == path) {
            self.paths.push(path);
        }
    }

    /// The raw dotted paths, in insertion order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Check if no fields were set
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Return a copy of this mask with every path nested under `prefix`
    ///
    /// Used to scope a format-level mask under the request field that
    /// carries it, e.g. `userEnteredFormat`.
    pub fn with_prefix(&self, prefix: &str) -> FieldMask {
        FieldMask {
            paths: self
                .paths
                .iter()
                .map(|p| format!("{}.{}", prefix, p))
                .collect(),
        }
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let split: Vec<Vec<&str>> = self.paths.iter().map(|p| p.split('.').collect()).collect();
        write!(f, "{}", render_level(&split).join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for FieldMask {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut mask = FieldMask::new();
        for path in iter {
            mask.push(path);
        }
        mask
    }
}

/// Render one level of the path tree as sibling strings
///
/// Siblings sharing a head segment are grouped; a segment with a single
/// descendant chain stays dotted (`a.b`), one with several children gets
/// parentheses (`a(b,c)`). A path that names a whole field subsumes any
/// of its children in the mask, so `a` plus `a.b` renders as just `a`.
fn render_level(paths: &[Vec<&str>]) -> Vec<String> {
    let mut heads: Vec<(&str, bool, Vec<Vec<&str>>)> = Vec::new();

    for path in paths {
        let (&head, rest) = match path.split_first() {
            Some(split) => split,
            None => continue,
        };
        let slot = match heads.iter().position(|(h, _, _)| *h == head) {
            Some(i) => i,
            None => {
                heads.push((head, false, Vec::new()));
                heads.len() - 1
            }
        };
        if rest.is_empty() {
            heads[slot].1 = true;
        } else {
            heads[slot].2.push(rest.to_vec());
        }
    }

    heads
        .into_iter()
        .map(|(head, whole, subs)| {
            if whole || subs.is_empty() {
                head.to_string()
            } else {
                let children = render_level(&subs);
                if children.len() == 1 {
                    format!("{}.{}", head, children[0])
                } else {
                    format!("{}({})", head, children.join(","))
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_paths() {
        let mask: FieldMask = ["backgroundColor", "horizontalAlignment"].into_iter().collect();
        assert_eq!(mask.to_string(), "backgroundColor,horizontalAlignment");
    }

    #[test]
    fn test_single_chain_stays_dotted() {
        let mask: FieldMask = ["userEnteredFormat.numberFormat"].into_iter().collect();
        assert_eq!(mask.to_string(), "userEnteredFormat.numberFormat");
    }

    #[test]
    fn test_grouping() {
        let mask: FieldMask = [
            "userEnteredFormat.backgroundColor",
            "userEnteredFormat.textFormat.bold",
            "userEnteredFormat.textFormat.fontSize",
        ]
        .into_iter()
        .collect();
        assert_eq!(
            mask.to_string(),
            "userEnteredFormat(backgroundColor,textFormat(bold,fontSize))"
        );
    }

    #[test]
    fn test_with_prefix() {
        let mask: FieldMask = ["backgroundColor", "textFormat.bold"].into_iter().collect();
        assert_eq!(
            mask.with_prefix("userEnteredFormat").to_string(),
            "userEnteredFormat(backgroundColor,textFormat.bold)"
        );
    }

    #[test]
    fn test_parent_path_subsumes_children() {
        let mask: FieldMask = ["textFormat", "textFormat.bold"].into_iter().collect();
        assert_eq!(mask.to_string(), "textFormat");

        // Order of insertion does not matter
        let mask: FieldMask = ["textFormat.bold", "textFormat"].into_iter().collect();
        assert_eq!(mask.to_string(), "textFormat");

        // Unrelated siblings are unaffected
        let mask: FieldMask = ["textFormat", "textFormat.bold", "backgroundColor"]
            .into_iter()
            .collect();
        assert_eq!(mask.to_string(), "textFormat,backgroundColor");
    }

    #[test]
    fn test_dedup_and_order_stability() {
        let mut mask = FieldMask::new();
        mask.push("textFormat.bold");
        mask.push("backgroundColor");
        mask.push("textFormat.bold");
        assert_eq!(mask.paths(), ["textFormat.bold", "backgroundColor"]);
        assert_eq!(mask.to_string(), "textFormat.bold,backgroundColor");
    }

    #[test]
    fn test_empty() {
        let mask = FieldMask::new();
        assert!(mask.is_empty());
        assert_eq!(mask.to_string(), "");
    }
}
