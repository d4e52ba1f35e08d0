use serde::Serialize;

/// Languages the advisor answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Language {
    #[serde(rename = "es")]
    Spanish,
    #[default]
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Picks a language from an explicit `lang` value first, then from an
    /// `Accept-Language` header. Defaults to English.
    pub fn detect(lang: Option<&str>, accept_language: Option<&str>) -> Self {
        if let Some(lang) = lang {
            return Self::from_code(lang);
        }

        match accept_language {
            Some(header) if header.contains("en") => Self::English,
            Some(header) if header.contains("es") => Self::Spanish,
            _ => Self::default(),
        }
    }

    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("es") {
            Self::Spanish
        } else {
            Self::English
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::English => "en",
        }
    }

    pub fn greeting(self, hour: u32) -> &'static str {
        match (self, hour) {
            (Self::Spanish, 6..=11) => "¡Buenos dias! Soy tu asesor de Hera's Nails & Lashes 👋",
            (Self::Spanish, 12..=17) => "¡Buenas tardes! Soy tu asesor de Hera's Nails & Lashes 👋",
            (Self::Spanish, _) => "¡Buenas noches! Soy tu asesor de Hera's Nails & Lashes 👋",
            (Self::English, 6..=11) => "Good morning! I'm your Hera's Nails & Lashes advisor 👋",
            (Self::English, 12..=17) => "Good afternoon! I'm your Hera's Nails & Lashes advisor 👋",
            (Self::English, _) => "Good evening! I'm your Hera's Nails & Lashes advisor 👋",
        }
    }

    pub fn status_message(self, is_open: bool) -> &'static str {
        match (self, is_open) {
            (Self::Spanish, true) => "Abierto ahora",
            (Self::Spanish, false) => "Cerrado ahora",
            (Self::English, true) => "Open now",
            (Self::English, false) => "Closed now",
        }
    }

    pub fn closed_today(self) -> &'static str {
        match self {
            Self::Spanish => "Cerrado hoy",
            Self::English => "Closed today",
        }
    }

    pub fn hours_summary(self) -> &'static str {
        match self {
            Self::Spanish => "Abierto de lunes a viernes de 10:00 a 18:00. Cerrado sábados y domingos.",
            Self::English => "Open Monday to Friday from 10:00 to 18:00. Closed Saturdays and Sundays.",
        }
    }
}
