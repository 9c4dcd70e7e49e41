//! Optional language detection for evaluation reports.
//!
//! Detection is a collaborator, not a metric: the evaluator works without a
//! detector and simply reports `None`. [`StopwordDetector`] is a small
//! built-in heuristic; anything smarter can be plugged in through
//! [`LanguageDetector`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// ISO 639-1 style language code (`"en"`, `"de"`, `"uk"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Best-effort language identification.
pub trait LanguageDetector: Send + Sync {
    /// Returns `None` when the language cannot be determined.
    fn detect(&self, text: &str) -> Option<LanguageTag>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Cyrillic,
    Greek,
    Arabic,
    Han,
    Kana,
    Hangul,
}

impl Script {
    fn of(c: char) -> Option<Self> {
        match c {
            'a'..='z' | 'A'..='Z' | '\u{00C0}'..='\u{024F}' => Some(Script::Latin),
            '\u{0370}'..='\u{03FF}' => Some(Script::Greek),
            '\u{0400}'..='\u{04FF}' => Some(Script::Cyrillic),
            '\u{0600}'..='\u{06FF}' => Some(Script::Arabic),
            '\u{3040}'..='\u{30FF}' => Some(Script::Kana),
            '\u{1100}'..='\u{11FF}' | '\u{AC00}'..='\u{D7AF}' => Some(Script::Hangul),
            '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' => Some(Script::Han),
            _ => None,
        }
    }
}

const SCRIPTS: [Script; 7] = [
    Script::Latin,
    Script::Cyrillic,
    Script::Greek,
    Script::Arabic,
    Script::Han,
    Script::Kana,
    Script::Hangul,
];

struct Profile {
    code: &'static str,
    stopwords: &'static [&'static str],
}

const LATIN_PROFILES: &[Profile] = &[
    Profile {
        code: "en",
        stopwords: &[
            "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "is", "this",
            "for", "with", "an", "are", "was", "on", "not", "you",
        ],
    },
    Profile {
        code: "de",
        stopwords: &[
            "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "zu", "mit", "den",
            "von", "ich", "sie", "es", "auf", "dem", "auch", "sich", "wir",
        ],
    },
    Profile {
        code: "fr",
        stopwords: &[
            "le", "la", "les", "et", "est", "un", "une", "des", "du", "que", "qui", "dans",
            "pour", "pas", "ne", "sur", "ce", "il", "je", "avec",
        ],
    },
    Profile {
        code: "es",
        stopwords: &[
            "el", "los", "las", "y", "es", "una", "que", "en", "por", "con", "para", "no",
            "se", "del", "lo", "su", "al", "como", "pero", "muy",
        ],
    },
    Profile {
        code: "it",
        stopwords: &[
            "il", "lo", "gli", "e", "è", "che", "di", "per", "non", "sono", "della", "nel",
            "questo", "ho", "una", "anche", "come", "ma", "alla", "molto",
        ],
    },
];

const CYRILLIC_PROFILES: &[Profile] = &[
    Profile {
        code: "ru",
        stopwords: &[
            "и", "в", "не", "на", "я", "что", "он", "с", "это", "как", "по", "но", "они",
            "мы", "вы", "она", "был", "все", "так", "его",
        ],
    },
    Profile {
        code: "uk",
        stopwords: &[
            "і", "й", "у", "що", "він", "з", "це", "як", "та", "але", "вони", "ми", "ви",
            "вона", "був", "до", "його", "є", "ще", "від",
        ],
    },
];

/// Script detection followed by stopword profiles for Latin and Cyrillic text.
///
/// Recognizes en, de, fr, es, it, ru and uk by their most frequent function
/// words, plus ja, ko, zh, ar and el from the script alone. Returns `None`
/// for text with no letters or with no recognizable stopwords.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordDetector;

impl StopwordDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for StopwordDetector {
    fn detect(&self, text: &str) -> Option<LanguageTag> {
        let mut counts = [0usize; SCRIPTS.len()];
        for c in text.chars() {
            if let Some(script) = Script::of(c) {
                if let Some(slot) = SCRIPTS.iter().position(|s| *s == script) {
                    counts[slot] += 1;
                }
            }
        }

        let kana = counts[5];
        let hangul = counts[6];
        let (slot, &best) = counts
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))?;
        if best == 0 {
            return None;
        }

        let detected = match SCRIPTS[slot] {
            Script::Latin => best_profile(text, LATIN_PROFILES),
            Script::Cyrillic => best_profile(text, CYRILLIC_PROFILES),
            Script::Greek => Some("el"),
            Script::Arabic => Some("ar"),
            Script::Kana => Some("ja"),
            Script::Hangul => Some("ko"),
            Script::Han if kana > 0 => Some("ja"),
            Script::Han if hangul > 0 => Some("ko"),
            Script::Han => Some("zh"),
        };
        debug!(script = ?SCRIPTS[slot], language = ?detected, "language detection");
        detected.map(LanguageTag::new)
    }
}

fn best_profile(text: &str, profiles: &[Profile]) -> Option<&'static str> {
    let words: Vec<String> = canonical::lowercase_tokens(text)
        .iter()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()).to_owned())
        .filter(|word| !word.is_empty())
        .collect();

    let mut best: Option<(&'static str, usize)> = None;
    for profile in profiles {
        let hits = words
            .iter()
            .filter(|word| profile.stopwords.contains(&word.as_str()))
            .count();
        if hits > 0 && best.is_none_or(|(_, top)| hits > top) {
            best = Some((profile.code, hits));
        }
    }
    best.map(|(code, _)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<String> {
        StopwordDetector.detect(text).map(|tag| tag.as_str().to_owned())
    }

    #[test]
    fn detects_latin_languages() {
        assert_eq!(detect("This is an English sentence.").as_deref(), Some("en"));
        assert_eq!(
            detect("Das ist ein deutscher Satz und nicht englisch.").as_deref(),
            Some("de")
        );
        assert_eq!(
            detect("Je pense que le chat est dans la maison.").as_deref(),
            Some("fr")
        );
    }

    #[test]
    fn separates_russian_and_ukrainian() {
        assert_eq!(detect("Это не просто тест, и он работает.").as_deref(), Some("ru"));
        assert_eq!(
            detect("Це речення написане українською мовою, і воно працює.").as_deref(),
            Some("uk")
        );
    }

    #[test]
    fn detects_by_script() {
        assert_eq!(detect("これは日本語の文です。").as_deref(), Some("ja"));
        assert_eq!(detect("这是一个中文句子").as_deref(), Some("zh"));
        assert_eq!(detect("이것은 한국어 문장입니다").as_deref(), Some("ko"));
        assert_eq!(detect("Αυτή είναι μια πρόταση").as_deref(), Some("el"));
    }

    #[test]
    fn undetectable_text_is_none() {
        assert_eq!(detect(""), None);
        assert_eq!(detect("12345 !!! ..."), None);
        assert_eq!(detect("Xyzzy plugh"), None);
    }

    #[test]
    fn tag_serializes_as_plain_string() {
        let tag = LanguageTag::new("en");
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"en\"");
        assert_eq!(tag, "en");
        assert_eq!(tag.to_string(), "en");
    }
}
