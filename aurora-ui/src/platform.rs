//! Platform families with distinct interaction conventions.
//!
//! ## Usage
//!
//! Pick component behavior that follows the native conventions of the
//! running platform, or force a family in tests and previews.

/// Mobile platform family a component should imitate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    /// Android conventions. Also used for every non-iOS target.
    Android,
    /// iOS conventions.
    Ios,
}

impl PlatformFamily {
    /// Returns the family of the compile target.
    ///
    /// Only `target_os = "ios"` maps to [`PlatformFamily::Ios`]; desktop and
    /// web targets follow Android conventions.
    pub const fn current() -> Self {
        if cfg!(target_os = "ios") {
            PlatformFamily::Ios
        } else {
            PlatformFamily::Android
        }
    }

    /// Returns a lowercase identifier, matching the platform's OS name.
    pub const fn as_str(self) -> &'static str {
        match self {
            PlatformFamily::Android => "android",
            PlatformFamily::Ios => "ios",
        }
    }
}

impl Default for PlatformFamily {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::PlatformFamily;

    #[cfg(not(target_os = "ios"))]
    #[test]
    fn non_ios_targets_follow_android() {
        assert_eq!(PlatformFamily::current(), PlatformFamily::Android);
        assert_eq!(PlatformFamily::default(), PlatformFamily::current());
    }

    #[test]
    fn identifiers_are_lowercase_os_names() {
        assert_eq!(PlatformFamily::Android.as_str(), "android");
        assert_eq!(PlatformFamily::Ios.as_str(), "ios");
    }
}
