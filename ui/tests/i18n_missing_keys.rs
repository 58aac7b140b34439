use std::collections::BTreeSet;

/// Translation completeness check.
///
/// Every shipped locale must define at least the message ids present in the
/// fallback bundle (`en-US/agribiofuels-ui.ftl`), and no bundle may define
/// the same id twice. Keys are read with a line-level scan rather than a
/// full Fluent parse: comment, blank, attribute, and continuation lines are
/// skipped, and anything of the form `key =` on its own line counts as a
/// message definition.
///
/// Adding a locale: drop `ui/i18n/<locale>/agribiofuels-ui.ftl` with every
/// key from the fallback translated, then register it in `LOCALES` below.
const FALLBACK: (&str, &str) = (
    "en-US",
    include_str!("../i18n/en-US/agribiofuels-ui.ftl"),
);

const LOCALES: &[(&str, &str)] = &[
    ("hi-IN", include_str!("../i18n/hi-IN/agribiofuels-ui.ftl")),
    ("ta-IN", include_str!("../i18n/ta-IN/agribiofuels-ui.ftl")),
];

#[test]
fn every_locale_covers_the_fallback_keys() {
    let fallback_keys = message_ids(FALLBACK.1, FALLBACK.0);
    assert!(
        !fallback_keys.is_empty(),
        "fallback bundle {} defines no messages",
        FALLBACK.0
    );

    let mut report = String::new();
    for &(locale, source) in LOCALES {
        let keys = message_ids(source, locale);
        let missing: Vec<&String> = fallback_keys.difference(&keys).collect();
        if !missing.is_empty() {
            report.push_str(&format!(
                "{locale} is missing {} key(s): {:?}\n",
                missing.len(),
                missing
            ));
        }
    }

    assert!(
        report.is_empty(),
        "untranslated message ids (copy them from {} and translate):\n{report}",
        FALLBACK.0
    );
}

#[test]
fn locales_define_no_extra_keys() {
    // An id that only exists in a translation is dead weight: the fallback
    // is the reference surface and `fl!` lookups are checked against it.
    let fallback_keys = message_ids(FALLBACK.1, FALLBACK.0);
    for &(locale, source) in LOCALES {
        let keys = message_ids(source, locale);
        let extra: Vec<&String> = keys.difference(&fallback_keys).collect();
        assert!(
            extra.is_empty(),
            "{locale} defines ids absent from the fallback: {extra:?}"
        );
    }
}

/// Message ids defined in one FTL source. Panics on duplicate definitions,
/// which Fluent would otherwise resolve silently (last one wins).
fn message_ids(source: &str, locale: &str) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for line in source.lines() {
        let Some(id) = leading_message_id(line) else {
            continue;
        };
        assert!(
            ids.insert(id.to_string()),
            "{locale} defines `{id}` more than once"
        );
    }
    ids
}

/// The message id when `line` opens a message definition, `None` for
/// comments, blank lines, attributes, and continuation lines.
fn leading_message_id(line: &str) -> Option<&str> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('.') {
        return None;
    }
    let (id, _value) = trimmed.split_once('=')?;
    let id = id.trim();
    let well_formed = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    well_formed.then_some(id)
}

#[test]
fn scanner_reads_definitions_and_skips_structure() {
    let source = "# comment\nnav-home = Home\n    .title = attr\nnav-about = About\n";
    let ids = message_ids(source, "test");
    assert_eq!(
        ids.into_iter().collect::<Vec<_>>(),
        vec!["nav-about".to_string(), "nav-home".to_string()]
    );
}
