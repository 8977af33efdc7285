//! Mock plant identification
//!
//! There is no recognition model. Any non-empty image resolves, after a fixed
//! delay, to the same Ficus Elastica profile in the current language.

use std::time::Duration;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::Language;
use crate::services::deferred::{Deferred, ViewScope};

/// Simulated analysis time
pub const IDENTIFY_DELAY: Duration = Duration::from_millis(2000);

const SIMILAR_PLANTS: [&str; 3] = ["Ficus Lyrata", "Ficus Benjamina", "Monstera Deliciosa"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfo {
    pub name: &'static str,
    pub family: &'static str,
    pub water_needs: &'static str,
    pub sunlight: &'static str,
    pub toxicity: &'static str,
    pub ecological_benefits: &'static str,
    pub similar_plants: Vec<&'static str>,
}

/// What the identification view receives: the card plus a chat summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub info: PlantInfo,
    pub chat_summary: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PlantService {
    language: Language,
}

impl PlantService {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Start identifying `image`. Fails right away on an empty image.
    pub fn identify(&self, scope: &ViewScope, image: &[u8]) -> Result<Deferred<Identification>> {
        if image.is_empty() {
            return Err(Error::validation("image is empty"));
        }
        let language = self.language;
        Ok(scope.defer(IDENTIFY_DELAY, move || Identification {
            info: plant_info(language),
            chat_summary: chat_summary(language),
        }))
    }
}

fn plant_info(lang: Language) -> PlantInfo {
    let similar_plants = SIMILAR_PLANTS.to_vec();
    match lang {
        Language::Az => PlantInfo {
            name: "Ficus Elastica (Kauçuk Ağacı)",
            family: "Moraceae",
            water_needs: "Orta - həftədə 1-2 dəfə",
            sunlight: "Parlaq, dolayı işıq",
            toxicity: "Ev heyvanları üçün zəhərli",
            ecological_benefits: "Havanı təmizləyir, formaldehid və digər toksinləri absorbə edir. CO2 udur və oksigen istehsal edir.",
            similar_plants,
        },
        Language::En => PlantInfo {
            name: "Ficus Elastica (Rubber Plant)",
            family: "Moraceae",
            water_needs: "Medium - 1-2 times per week",
            sunlight: "Bright, indirect light",
            toxicity: "Toxic to pets",
            ecological_benefits: "Cleans the air, absorbs formaldehyde and other toxins. Absorbs CO2 and produces oxygen.",
            similar_plants,
        },
        Language::Ru => PlantInfo {
            name: "Ficus Elastica (Каучуковое дерево)",
            family: "Moraceae",
            water_needs: "Средний - 1-2 раза в неделю",
            sunlight: "Яркий, рассеянный свет",
            toxicity: "Токсичен для домашних животных",
            ecological_benefits: "Очищает воздух, поглощает формальдегид и другие токсины. Поглощает CO2 и производит кислород.",
            similar_plants,
        },
    }
}

fn chat_summary(lang: Language) -> &'static str {
    match lang {
        Language::Az => "✅ Bitkini tanıdım!\n\n🌿 Ad: Ficus Elastica (Kauçuk Ağacı)\n🧬 Ailə: Moraceae\n💧 Su: həftədə 1-2 dəfə\n☀️ İşıq: parlaq, dolayı\n⚠️ Ev heyvanları üçün zəhərli\n\nƏtraflı məlumat səhifədə göstərilir!",
        Language::En => "✅ Plant identified!\n\n🌿 Name: Ficus Elastica (Rubber Plant)\n🧬 Family: Moraceae\n💧 Water: 1-2 times per week\n☀️ Light: bright, indirect\n⚠️ Toxic to pets\n\nDetailed information is shown on the page!",
        Language::Ru => "✅ Растение идентифицировано!\n\n🌿 Название: Ficus Elastica (Каучуковое дерево)\n🧬 Семейство: Moraceae\n💧 Вода: 1-2 раза в неделю\n☀️ Свет: яркий, рассеянный\n⚠️ Токсичен для домашних животных\n\nПодробная информация показана на странице!",
    }
}
