//! Per-call allow/deny lists for serialized trees.
//!
//! A `Projection` names the attributes and edges a caller wants using dotted paths
//! relative to the entity being serialized: `"name"` addresses an attribute,
//! `"signups"` an edge, and `"signups.activity"` the `activity` edge of every signup
//! reached through `signups`.
//!
//! - `only` is an allow list. When set, a field is rendered only if it is listed or a
//!   listed path passes through it. Listing a bare edge allows that whole sub-tree.
//! - `exclude` is a deny list and always wins over `only`.
//!
//! Descending along an edge strips the edge prefix from both lists, so a deny entry like
//! `"signups.camper"` reaches exactly the signups of the entity it was declared on and no
//! other edge at the same depth.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    only: Option<BTreeSet<String>>,
    exclude: BTreeSet<String>,
}

impl Projection {
    /// Allows every attribute and edge not denied by entity rules.
    pub fn all() -> Self {
        Self::default()
    }

    /// Allows only the listed paths.
    pub fn only<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            only: Some(paths.into_iter().map(Into::into).collect()),
            exclude: BTreeSet::new(),
        }
    }

    /// Adds paths to the deny list.
    pub fn excluding<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Whether `field` at the current level is rendered.
    pub fn includes(&self, field: &str) -> bool {
        if self.exclude.contains(field) {
            return false;
        }

        match &self.only {
            None => true,
            Some(only) => only.iter().any(|path| {
                path == field
                    || path
                        .strip_prefix(field)
                        .is_some_and(|rest| rest.starts_with('.'))
            }),
        }
    }

    /// Projection to apply to entities reached through `edge`.
    pub fn descend(&self, edge: &str) -> Projection {
        let only = self.only.as_ref().and_then(|only| {
            if only.contains(edge) {
                None
            } else {
                Some(strip_edge(only, edge))
            }
        });

        Projection {
            only,
            exclude: strip_edge(&self.exclude, edge),
        }
    }
}

fn strip_edge(paths: &BTreeSet<String>, edge: &str) -> BTreeSet<String> {
    paths
        .iter()
        .filter_map(|path| path.strip_prefix(edge)?.strip_prefix('.'))
        .map(str::to_owned)
        .collect()
}
