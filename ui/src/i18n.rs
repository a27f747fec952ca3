//! Fluent translations for the dashboard chrome.
//!
//! Messages live in `i18n/<locale>/tcpstats_ui.ftl` and are embedded at
//! compile time. Chart titles and axis labels are not translated; they come
//! from the metric table in [`crate::stats`].

use std::collections::BTreeSet;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

#[doc(hidden)]
pub use i18n_embed_fl::fl;

/// Looks up a message in the active locale.
///
/// ```ignore
/// t!("party-receiver", address = ip)
/// ```
#[macro_export]
macro_rules! t {
    ($id:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $id)
    };
    ($id:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $id, $( $arg = $value ),+ )
    };
}

pub const FALLBACK_LOCALE: &str = "en-US";

/// `fl!` derives the file name from the package name with `-` mapped to `_`.
const DOMAIN: &str = "tcpstats_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Messages;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .expect("fallback locale is a valid identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static SELECTED: Once = Once::new();

/// Picks the best embedded locale for the OS or browser preferences. Runs once.
pub fn init() {
    SELECTED.call_once(|| {
        let preferred = preferred_locales();
        match i18n_embed::select(&*LOADER, &Messages, &preferred) {
            Ok(chosen) => debug!(?chosen, "locale selected"),
            Err(err) => warn!("locale selection failed, staying on {FALLBACK_LOCALE}: {err}"),
        }
    });
}

/// Switches to `tag`. Tags that don't parse leave the current locale in place.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let Ok(locale) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparseable locale tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Messages, &[locale]).map(drop)
}

/// Tag of the locale messages currently resolve against.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Locales with an embedded message file, sorted.
pub fn available_languages() -> Vec<String> {
    let locales: BTreeSet<String> = Messages::iter()
        .filter_map(|path| path.split_once('/').map(|(locale, _)| locale.to_string()))
        .collect();
    locales.into_iter().collect()
}

fn preferred_locales() -> Vec<LanguageIdentifier> {
    #[cfg(target_arch = "wasm32")]
    {
        i18n_embed::WebLanguageRequester::requested_languages()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        i18n_embed::DesktopLanguageRequester::requested_languages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        assert_eq!(available_languages(), vec!["cs-CZ", "en-US"]);
    }

    #[test]
    fn message_files_are_named_after_the_domain() {
        let expected = format!("/{DOMAIN}.ftl");
        for path in Messages::iter() {
            assert!(path.ends_with(&expected), "{path} won't be found by the loader");
        }
    }

    #[test]
    fn unparseable_tag_keeps_current_locale() {
        init();
        let before = crate::t!("party-both");
        let locale = current_language();
        assert!(set_language("not a locale!").is_ok());
        assert_eq!(crate::t!("party-both"), before);
        assert_eq!(current_language(), locale);
    }
}
