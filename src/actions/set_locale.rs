//! Set-locale action

use crate::actions::ActionResult;
use crate::bridge::{Locale, SystemBridge};
use crate::error::{BridgeError, Result};
use crate::resolver::{self, LogicalAction};
use tracing::debug;

/// An ordered, non-empty locale-preference list. The first entry becomes the
/// device default; the rest are fallback preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSpec {
    locales: Vec<Locale>,
}

impl LocaleSpec {
    /// Parse command-line tags in preference order. Zero tags is a
    /// precondition failure, raised before any privileged call is made.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Result<Self> {
        if tags.is_empty() {
            return Err(BridgeError::NoLocales);
        }

        let mut locales = Vec::with_capacity(tags.len());
        for tag in tags {
            locales.push(tag.as_ref().parse()?);
        }
        Ok(Self { locales })
    }

    pub fn primary(&self) -> &Locale {
        // Invariant: the list is never empty.
        &self.locales[0]
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn language_tags(&self) -> String {
        self.locales
            .iter()
            .map(Locale::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Replace the persisted locale-preference list.
///
/// Fetch, mutate, and persist are one atomic unit from the caller's
/// perspective: any failure along the way fails the whole run. There is no
/// partial-success notion here, unlike task clearing.
pub fn set_device_locale(bridge: &dyn SystemBridge, locales: &LocaleSpec) -> ActionResult {
    match apply(bridge, locales) {
        Ok(tags) => {
            ActionResult::success(locales.locales().len(), format!("Locale set to {}", tags))
        }
        Err(e) => {
            debug!(error = ?e, "set-locale run failed");
            ActionResult::failure(e.to_string())
        }
    }
}

fn apply(bridge: &dyn SystemBridge, locales: &LocaleSpec) -> Result<String> {
    let get_specs = resolver::supported_candidates(bridge, LogicalAction::GetConfiguration)?;
    let mut config = resolver::try_each(LogicalAction::GetConfiguration, &get_specs, |_| {
        bridge.get_configuration()
    })?;

    config.set_locales(locales.locales().to_vec());

    let update_specs = resolver::supported_candidates(bridge, LogicalAction::UpdateConfiguration)?;
    resolver::try_each(LogicalAction::UpdateConfiguration, &update_specs, |_| {
        bridge.update_persistent_configuration(&config)
    })
    .map_err(|e| BridgeError::Persistence(e.to_string()))?;

    Ok(config.language_tags())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::mock::MockBridge;
    use crate::bridge::DeviceConfig;

    fn tags(input: &[&str]) -> LocaleSpec {
        LocaleSpec::from_tags(input).unwrap()
    }

    #[test]
    fn zero_tags_is_a_precondition_failure() {
        let err = LocaleSpec::from_tags::<&str>(&[]).unwrap_err();
        assert!(matches!(err, BridgeError::NoLocales));
        assert_eq!(err.to_string(), "at least one locale required");
    }

    #[test]
    fn one_bad_tag_rejects_the_whole_spec() {
        let err = LocaleSpec::from_tags(&["ja-JP", ""]).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidLocaleTag(_)));
    }

    #[test]
    fn primary_is_the_first_tag() {
        let spec = tags(&["ja-JP", "ko-KR"]);
        assert_eq!(spec.primary().to_string(), "ja-JP");
    }

    #[test]
    fn persisted_order_matches_input_order() {
        let bridge = MockBridge::default();
        let spec = tags(&["ja-JP", "ko-KR", "en-US"]);

        let result = set_device_locale(&bridge, &spec);
        assert_eq!(
            result,
            ActionResult::success(3, "Locale set to ja-JP,ko-KR,en-US")
        );

        let persisted = bridge.persisted.borrow().clone().unwrap();
        let order: Vec<String> = persisted.locales.iter().map(|l| l.to_string()).collect();
        assert_eq!(order, vec!["ja-JP", "ko-KR", "en-US"]);
    }

    #[test]
    fn existing_locale_list_is_replaced_not_merged() {
        let mut bridge = MockBridge::default();
        bridge.config = DeviceConfig {
            locales: vec!["de-DE".parse().unwrap()],
        };

        set_device_locale(&bridge, &tags(&["en"]));
        let persisted = bridge.persisted.borrow().clone().unwrap();
        assert_eq!(persisted.language_tags(), "en");
    }

    #[test]
    fn persist_failure_fails_the_whole_run() {
        let mut bridge = MockBridge::default();
        bridge.fail_persist = true;

        let result = set_device_locale(&bridge, &tags(&["ja-JP"]));
        assert!(!result.is_success());
        assert!(bridge.persisted.borrow().is_none());
        match result {
            ActionResult::Failure { reason } => {
                assert!(reason.starts_with("configuration update failed"), "{}", reason);
            }
            ActionResult::Success { .. } => unreachable!(),
        }
    }
}
