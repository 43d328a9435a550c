//! Voice languages offered for reading replies aloud.
//!
//! A static list, not an i18n framework: these are the language codes
//! forwarded to the speech synthesizer, nothing more.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechLanguage {
    /// Code handed to the speech synthesizer (e.g. `es`).
    pub code: &'static str,
    /// Display name shown in the status line.
    pub name: &'static str,
}

pub const SPEECH_LANGUAGES: [SpeechLanguage; 6] = [
    SpeechLanguage {
        code: "es",
        name: "Spanish",
    },
    SpeechLanguage {
        code: "en",
        name: "English",
    },
    SpeechLanguage {
        code: "fr",
        name: "French",
    },
    SpeechLanguage {
        code: "pt",
        name: "Portuguese",
    },
    SpeechLanguage {
        code: "zh",
        name: "Chinese",
    },
    SpeechLanguage {
        code: "ru",
        name: "Russian",
    },
];

/// Looks a language up by its code.
pub fn language_by_code(code: &str) -> Option<SpeechLanguage> {
    SPEECH_LANGUAGES.iter().copied().find(|l| l.code == code)
}

/// Returns the language following `code` in the list, wrapping at the
/// end. Unknown codes restart the cycle at the first entry.
pub fn next_language(code: &str) -> SpeechLanguage {
    let position = SPEECH_LANGUAGES.iter().position(|l| l.code == code);
    match position {
        Some(index) => SPEECH_LANGUAGES[(index + 1) % SPEECH_LANGUAGES.len()],
        None => SPEECH_LANGUAGES[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_known_codes() {
        assert_eq!(language_by_code("fr").map(|l| l.name), Some("French"));
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(language_by_code("xx"), None);
    }

    #[test]
    fn cycles_through_the_list_in_order() {
        let mut code = "es";
        let mut seen = Vec::new();
        for _ in 0..SPEECH_LANGUAGES.len() {
            let next = next_language(code);
            seen.push(next.code);
            code = next.code;
        }

        assert_eq!(seen, vec!["en", "fr", "pt", "zh", "ru", "es"]);
    }

    #[test]
    fn unknown_code_restarts_the_cycle() {
        assert_eq!(next_language("??").code, "es");
    }
}
