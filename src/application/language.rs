#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserLanguage {
    Ru,
    En,
}

impl UserLanguage {
    /// Picks the language from an `Accept-Language` style value. Russian unless
    /// the first preference is English.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let candidate = raw
            .unwrap_or("ru")
            .split(',')
            .next()
            .unwrap_or("ru")
            .split(['-', '_', ';'])
            .next()
            .unwrap_or("ru")
            .trim()
            .to_lowercase();
        match candidate.as_str() {
            "en" => UserLanguage::En,
            _ => UserLanguage::Ru,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserLanguage::Ru => "ru",
            UserLanguage::En => "en",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_russian() {
        assert_eq!(UserLanguage::from_raw(None), UserLanguage::Ru);
        assert_eq!(UserLanguage::from_raw(Some("de-DE,de;q=0.9")), UserLanguage::Ru);
        assert_eq!(UserLanguage::from_raw(Some("")), UserLanguage::Ru);
    }

    #[test]
    fn picks_english_from_first_preference() {
        assert_eq!(UserLanguage::from_raw(Some("en-US,en;q=0.9")), UserLanguage::En);
        assert_eq!(UserLanguage::from_raw(Some("EN")), UserLanguage::En);
        assert_eq!(UserLanguage::from_raw(Some("en;q=0.8")), UserLanguage::En);
        assert_eq!(UserLanguage::from_raw(Some("ru-RU,en;q=0.5")), UserLanguage::Ru);
    }
}
