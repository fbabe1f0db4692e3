//! The closed set of applets and the two visibility tables that name them.
//!
//! Applets are identified by the sealed [`Applet`] enum; the tables only map
//! command names to identifiers.  Which code runs for an identifier is the
//! business of the [`Host`](crate::host::Host).
use std::ffi::OsStr;
use std::fmt;

/// Every applet this binary can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Applet {
    /// The umbrella command itself.
    Magisk,
    /// Privilege-elevation client.
    Su,
    /// Runtime-property editor.
    Resetprop,
    /// Process-injection applet, private only.
    Zygisk,
}

impl Applet {
    /// Every applet, umbrella first.
    pub const ALL: [Self; 4] = [Self::Magisk, Self::Su, Self::Resetprop, Self::Zygisk];

    /// Canonical command name of the applet.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Magisk => "magisk",
            Self::Su => "su",
            Self::Resetprop => "resetprop",
            Self::Zygisk => "zygisk",
        }
    }
}

impl fmt::Display for Applet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `(name, applet)` pair as stored in an [`AppletTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppletDescriptor {
    /// Command name matched against the resolved invocation name.
    pub name: &'static str,
    /// Applet invoked on a match.
    pub applet: Applet,
}

impl AppletDescriptor {
    const fn of(applet: Applet) -> Self {
        Self {
            name: applet.name(),
            applet,
        }
    }
}

/// An ordered, build-time-fixed lookup table.
///
/// Lookup is a linear, case-sensitive, exact-match scan.  Names are expected
/// to be unique; if one is ever duplicated the earliest entry wins.
#[derive(Debug, Clone, Copy)]
pub struct AppletTable(&'static [AppletDescriptor]);

impl AppletTable {
    /// Build a table over a static descriptor list.
    #[must_use]
    pub const fn new(entries: &'static [AppletDescriptor]) -> Self {
        Self(entries)
    }

    /// Return the first applet whose name equals `name` exactly.
    #[must_use]
    pub fn lookup(self, name: &OsStr) -> Option<Applet> {
        self.0
            .iter()
            .find(|d| name == OsStr::new(d.name))
            .map(|d| d.applet)
    }

    /// Iterate over the descriptors in table order.
    pub fn iter(self) -> impl Iterator<Item = &'static AppletDescriptor> {
        self.0.iter()
    }

    /// Iterate over the applet names in table order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        self.0.iter().map(|d| d.name)
    }
}

const PUBLIC_ENTRIES: &[AppletDescriptor] = &[
    AppletDescriptor::of(Applet::Su),
    AppletDescriptor::of(Applet::Resetprop),
];

const PRIVATE_ENTRIES: &[AppletDescriptor] = &[AppletDescriptor::of(Applet::Zygisk)];

/// Applets reachable by invoking the binary under their own name.
pub const PUBLIC_APPLETS: AppletTable = AppletTable::new(PUBLIC_ENTRIES);

/// Applets reachable only through the empty-argv0 convention.
pub const PRIVATE_APPLETS: AppletTable = AppletTable::new(PRIVATE_ENTRIES);

/// Names under which the binary acts as the umbrella command.
pub const UMBRELLA_ALIASES: &[&str] = &["magisk", "magisk32", "magisk64"];

/// Return `true` if `name` is one of the [`UMBRELLA_ALIASES`].
#[must_use]
pub fn is_umbrella_alias(name: &OsStr) -> bool {
    UMBRELLA_ALIASES.iter().any(|alias| name == OsStr::new(alias))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn public_lookup_exact_match() {
        assert_eq!(PUBLIC_APPLETS.lookup(OsStr::new("su")), Some(Applet::Su));
        assert_eq!(
            PUBLIC_APPLETS.lookup(OsStr::new("resetprop")),
            Some(Applet::Resetprop)
        );
    }

    #[test]
    fn lookup_is_case_sensitive_and_not_prefix() {
        assert_eq!(PUBLIC_APPLETS.lookup(OsStr::new("SU")), None);
        assert_eq!(PUBLIC_APPLETS.lookup(OsStr::new("reset")), None);
        assert_eq!(PUBLIC_APPLETS.lookup(OsStr::new("resetprop2")), None);
        assert_eq!(PUBLIC_APPLETS.lookup(OsStr::new("")), None);
    }

    #[test]
    fn tables_are_disjoint() {
        assert_eq!(PUBLIC_APPLETS.lookup(OsStr::new("zygisk")), None);
        assert_eq!(PRIVATE_APPLETS.lookup(OsStr::new("su")), None);
        assert_eq!(PRIVATE_APPLETS.lookup(OsStr::new("magisk")), None);
    }

    #[test]
    fn umbrella_is_not_a_table_entry() {
        assert_eq!(PUBLIC_APPLETS.lookup(OsStr::new("magisk")), None);
        assert!(is_umbrella_alias(OsStr::new("magisk")));
        assert!(is_umbrella_alias(OsStr::new("magisk32")));
        assert!(is_umbrella_alias(OsStr::new("magisk64")));
        assert!(!is_umbrella_alias(OsStr::new("magisk16")));
    }

    #[test]
    fn duplicate_names_first_match_wins() {
        static DUPLICATED: &[AppletDescriptor] = &[
            AppletDescriptor {
                name: "tool",
                applet: Applet::Resetprop,
            },
            AppletDescriptor {
                name: "tool",
                applet: Applet::Su,
            },
        ];
        let table = AppletTable::new(DUPLICATED);
        assert_eq!(table.lookup(OsStr::new("tool")), Some(Applet::Resetprop));
    }

    #[test]
    fn table_names_are_unique() {
        for table in [PUBLIC_APPLETS, PRIVATE_APPLETS] {
            let names: Vec<&str> = table.names().collect();
            let unique: HashSet<&str> = names.iter().copied().collect();
            assert_eq!(names.len(), unique.len(), "duplicate names: {names:?}");
        }
    }

    #[test]
    fn descriptor_names_match_applet_names() {
        for d in PUBLIC_APPLETS.iter().chain(PRIVATE_APPLETS.iter()) {
            assert_eq!(d.name, d.applet.name());
            assert_eq!(d.applet.to_string(), d.name);
        }
    }
}
