//! Client-side filters over already-fetched collections.
//!
//! Filters never mutate or reorder their input and never drop duplicates;
//! `apply` returns a lazy iterator over borrowed items.

use crate::types::{freight_pricing, freight_rates, geo, Area, Country, VesselClass, VesselType};

/// Case-insensitive substring predicate.
///
/// An absent or empty pattern matches everything. A present pattern matches a
/// target when the lower-cased pattern is a substring of the lower-cased
/// target; a record without the target field only matches the absent pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameLike {
    pattern: Option<String>,
}

impl NameLike {
    pub fn new(pattern: Option<&str>) -> Self {
        Self {
            pattern: pattern
                .filter(|p| !p.is_empty())
                .map(|p| p.to_lowercase()),
        }
    }

    pub fn matches(&self, target: Option<&str>) -> bool {
        match (&self.pattern, target) {
            (None, _) => true,
            (Some(pattern), Some(target)) => target.to_lowercase().contains(pattern.as_str()),
            (Some(_), None) => false,
        }
    }
}

/// Records that expose a display name to filter on.
pub trait Named {
    fn name(&self) -> Option<&str>;
}

impl Named for geo::Port {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Named for freight_pricing::Port {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Named for freight_rates::Port {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Named for VesselType {
    fn name(&self) -> Option<&str> {
        Some(self.name)
    }
}

impl Named for VesselClass {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Named for Area {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Named for Country {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

macro_rules! name_filter {
    ($(#[$meta:meta])* $filter:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $filter {
            pub name_like: Option<String>,
        }

        impl $filter {
            pub fn new(name_like: Option<&str>) -> Self {
                Self {
                    name_like: name_like.map(str::to_string),
                }
            }

            /// Yields the items whose name contains `name_like`, ignoring case.
            pub fn apply<'a, T: Named + 'a>(&self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
                let predicate = NameLike::new(self.name_like.as_deref());
                items.iter().filter(move |item| predicate.matches(item.name()))
            }
        }
    };
}

name_filter!(
    /// Filters ports by name. Works for every port flavour the APIs return.
    PortFilter
);
name_filter!(
    /// Filters the fixed vessel type catalog by name.
    VesselTypeFilter
);
name_filter!(VesselClassFilter);
name_filter!(AreaFilter);
name_filter!(CountryFilter);
