use crate::clock::Clock;
use crate::language::Language;
use crate::schedule;
use chrono::Timelike;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "Eres el asistente virtual de Hera's Nails & Lashes, especializado en productos de belleza.
Tu funcion es proporcionar asesoramiento experto sobre productos de belleza.

ESTILO DE CONVERSACION:
• Usa frases cortas y directas
• Maximo 2-3 frases por respuesta
• Se natural y conversacional
• Evita textos largos y formales
• Responde como un amigo experto

HORARIOS DE ATENCION:
{business_hours}

SOBRE NOSOTROS:
• Somos Hera's Nails & Lashes, centro de belleza especializado en manicuras, pedicuras, cejas, pestañas y tratamientos faciales en Valencia. Ubicados en Calle Santos Justo y Pastor, cerca de La Salud.
• Proporcionamos asesoramiento experto

TU FUNCION:
1. Proporcionar asesoramiento experto sobre productos
2. Ayudar a encontrar productos adecuados
3. Explicar caracteristicas y beneficios
4. Informar sobre horarios cuando pregunten
5. NO realizamos ventas directas

INSTRUCCIONES:
1. Si es la primera vez, saluda brevemente
2. Para servicios especificos, usa getRelatedProducts
3. Para informacion general, usa showcaseStoreOptions
4. Para servicios del salon, usa showcaseStoreServices
5. Para horarios, usa getBusinessHours
6. Para ubicacion y parking, usa getLocationInfo
7. Para conversacion normal, usa no_tool_needed
8. NUNCA ofrezcas ventas directas
9. Se amable y profesional
10. Responde en espanol principalmente
11. Usa frases cortas y naturales
12. Si estan fuera del horario, menciona cuando abren";

pub const WELCOME_MESSAGE: &str = "¡Hola! Soy tu asesor de Hera's Nails & Lashes \n\n\
Te ayudo con información sobre nuestros servicios:\n\
• 💅 Manicuras y pedicuras profesionales\n\
• ✂️ Cejas y depilación\n\
• 👁️ Pestañas\n\
• 💎 Tratamientos faciales\n\n\
Horario: Lunes a Viernes 09:30-20:30, Sábado 09:30-14:30\n\
Ubicación: Calle Santos Justo y Pastor, Valencia\n\n\
¿Qué servicio te interesa?";

pub const ERROR_MESSAGE: &str =
    "Lo siento, hubo un error procesando tu mensaje. Por favor, intenta de nuevo.";

pub fn system_prompt(business_hours: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE.replace("{business_hours}", business_hours)
}

/// Prompt texts handed to the conversational agent. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptBundle {
    pub system_prompt: String,
    pub welcome_message: String,
    pub error_message: String,
}

impl PromptBundle {
    pub fn new(business_hours: &str) -> Self {
        Self {
            system_prompt: system_prompt(business_hours),
            welcome_message: WELCOME_MESSAGE.to_string(),
            error_message: ERROR_MESSAGE.to_string(),
        }
    }
}

/// Greeting, schedule and open-state lookups against one schedule file.
#[derive(Clone)]
pub struct PromptProvider {
    schedule_path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl PromptProvider {
    pub fn new(schedule_path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            schedule_path: schedule_path.into(),
            clock,
        }
    }

    pub fn schedule_path(&self) -> &Path {
        &self.schedule_path
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn time_based_greeting(&self) -> &'static str {
        Language::Spanish.greeting(self.clock.now().hour())
    }

    pub fn business_hours_info(&self) -> String {
        schedule::business_hours_info(&self.schedule_path)
    }

    pub fn is_business_hours(&self) -> bool {
        schedule::is_business_hours(&self.schedule_path, &self.clock.now())
    }

    /// Snapshot of the prompt texts with the current hours baked in.
    pub fn bundle(&self) -> PromptBundle {
        PromptBundle::new(&self.business_hours_info())
    }

    pub fn welcome_card(&self, language: Language) -> WelcomeCard {
        WelcomeCard::new(language, self.clock.now().hour())
    }
}

/// Structured welcome used by the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeCard {
    pub language: &'static str,
    pub greeting: &'static str,
    pub message: &'static str,
    pub services: [&'static str; 4],
    pub hours: &'static str,
    pub location: &'static str,
    pub question: &'static str,
}

impl WelcomeCard {
    pub fn new(language: Language, hour: u32) -> Self {
        let greeting = language.greeting(hour);
        match language {
            Language::Spanish => Self {
                language: language.code(),
                greeting,
                message: "Te ayudo con información sobre nuestros servicios:",
                services: [
                    "👁️ Extensiones de pestañas (Pelo a pelo, Volumen ruso)",
                    "💅 Manicura y pedicura profesional",
                    "✂️ Cejas (tinte, depilación, laminado)",
                    "💎 Packs especiales desde 49€",
                ],
                hours: "Horario: Lunes a Viernes 10:00-18:00",
                location: "Ubicación: Campanar, Valencia",
                question: "¿Qué servicio te interesa?",
            },
            Language::English => Self {
                language: language.code(),
                greeting,
                message: "I can help you with information about our services:",
                services: [
                    "👁️ Eyelash extensions (Lash by lash, Russian volume)",
                    "💅 Professional manicure and pedicure",
                    "✂️ Eyebrows (tinting, waxing, lamination)",
                    "💎 Special packages from €49",
                ],
                hours: "Hours: Monday to Friday 10:00-18:00",
                location: "Location: Campanar, Valencia",
                question: "What service interests you?",
            },
        }
    }
}
