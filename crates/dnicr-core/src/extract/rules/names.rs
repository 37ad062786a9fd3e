//! Given-name token normalization.
//!
//! Recognition often fuses the two given names into one token
//! ("JUANCARLOS"). A curated vocabulary of common given names drives the
//! split. Order is significant: earlier entries shadow later ones on
//! overlapping prefixes.

use tracing::debug;

/// Priority-ordered vocabulary of common given names.
pub const GIVEN_NAME_VOCABULARY: &[&str] = &[
    "MARIA", "MONICA", "JUAN", "JOSE", "LUIS", "CARLOS", "ISABEL", "ROSA", "ANA", "CARMEN",
    "JORGE", "PEDRO", "MIGUEL", "MANUEL", "VICTOR", "CESAR", "OSCAR", "JULIO", "PABLO", "DIEGO",
    "ELENA", "PATRICIA", "TERESA", "GLADYS",
];

/// Split a fused given-name token on a known leading name.
///
/// Walks the vocabulary in order; the first entry that prefixes the token
/// with a plausible remainder (a vocabulary member, or at least 3
/// characters) wins. A token with no such prefix comes back unchanged, as
/// does anything already containing a separator.
pub fn split_concatenated(token: &str) -> String {
    if token.contains(' ') {
        return token.to_string();
    }

    for entry in GIVEN_NAME_VOCABULARY {
        let Some(rest) = token.strip_prefix(entry) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }
        if GIVEN_NAME_VOCABULARY.contains(&rest) || rest.chars().count() >= 3 {
            debug!(head = %entry, tail = %rest, "split fused given names");
            return format!("{entry} {rest}");
        }
    }

    token.to_string()
}
