//! Plant-care chat with canned answers
//!
//! Not a language model: the lower-cased message is checked against an
//! ordered list of topics and the first topic with a matching substring
//! answers. Patterns are plain substrings in all three languages, so short
//! ones can fire inside longer words ("su" inside "sun" answers as water).

use std::time::Duration;

use crate::domain::Language;
use crate::locale::t;
use crate::services::deferred::{Deferred, ViewScope};

/// Time the bot "thinks" before answering
pub const REPLY_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTopic {
    Water,
    Light,
    Soil,
    Fertilizer,
    Disease,
    Transplant,
    Propagation,
    Beginner,
    Tips,
    Toxicity,
    Humidity,
    Temperature,
    Default,
}

impl ChatTopic {
    /// Matching order. `Default` is not listed; it answers when nothing else does.
    pub const ORDERED: [ChatTopic; 12] = [
        ChatTopic::Water,
        ChatTopic::Light,
        ChatTopic::Soil,
        ChatTopic::Fertilizer,
        ChatTopic::Disease,
        ChatTopic::Transplant,
        ChatTopic::Propagation,
        ChatTopic::Beginner,
        ChatTopic::Tips,
        ChatTopic::Toxicity,
        ChatTopic::Humidity,
        ChatTopic::Temperature,
    ];

    /// Substrings that select this topic, in any site language
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            ChatTopic::Water => &["su", "sulama", "nə qədər", "water", "watering", "вод", "полив"],
            ChatTopic::Light => &[
                "işıq", "günəş", "kölgə", "light", "sun", "shade", "свет", "солн", "тень",
            ],
            ChatTopic::Soil => &[
                "torpaq", "substrat", "drenaj", "soil", "substrate", "drainage", "почв", "субстрат",
                "дренаж",
            ],
            ChatTopic::Fertilizer => &[
                "gübrə", "qidalandır", "yem", "fertiliz", "feed", "удобр", "подкорм",
            ],
            ChatTopic::Disease => &[
                "xəstə", "sarı", "zərərverici", "bit", "disease", "yellow", "pest", "bug", "болезн",
                "желт", "вредит",
            ],
            ChatTopic::Transplant => &["köçür", "transplant", "пересад"],
            ChatTopic::Propagation => &[
                "çoxalt", "kəsik", "toxum", "propagat", "cutting", "seed", "размнож", "черенк",
                "семен",
            ],
            ChatTopic::Beginner => &[
                "başlanğıc", "yeni", "sadə", "beginner", "new", "easy", "начин", "нов", "прост",
            ],
            ChatTopic::Tips => &[
                "məsləhət", "yardım", "necə", "tip", "help", "how", "совет", "помощ", "как",
            ],
            ChatTopic::Toxicity => &[
                "zəhər", "təhlükə", "heyvan", "uşaq", "toxic", "poison", "pet", "child", "токсич",
                "яд", "животн", "ребен",
            ],
            ChatTopic::Humidity => &[
                "rütubət", "quru", "nəm", "humidity", "moist", "влажн", "сух",
            ],
            ChatTopic::Temperature => &[
                "temperatur", "isti", "soyuq", "temperature", "hot", "cold", "температур", "тепл",
                "холод",
            ],
            ChatTopic::Default => &[],
        }
    }

    /// First topic whose pattern occurs in `message`, case-insensitively
    pub fn classify(message: &str) -> ChatTopic {
        let lower = message.to_lowercase();
        Self::ORDERED
            .into_iter()
            .find(|topic| topic.patterns().iter().any(|p| lower.contains(p)))
            .unwrap_or(ChatTopic::Default)
    }

    pub fn response(self, lang: Language) -> &'static str {
        match lang {
            Language::Az => response_az(self),
            Language::En => response_en(self),
            Language::Ru => response_ru(self),
        }
    }
}

/// Answers chat messages in one language
#[derive(Debug, Clone, Copy)]
pub struct ChatService {
    language: Language,
}

impl ChatService {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// First bot message of a fresh conversation
    pub fn welcome(&self) -> &'static str {
        t("chatWelcomeMessage", self.language)
    }

    /// Immediate answer; `None` for a blank message
    pub fn reply(&self, message: &str) -> Option<&'static str> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }
        Some(ChatTopic::classify(message).response(self.language))
    }

    /// Answer after [`REPLY_DELAY`], dropped if `scope` goes away first
    pub fn reply_after(&self, scope: &ViewScope, message: &str) -> Option<Deferred<&'static str>> {
        let answer = self.reply(message)?;
        Some(scope.defer(REPLY_DELAY, move || answer))
    }
}

fn response_en(topic: ChatTopic) -> &'static str {
    match topic {
        ChatTopic::Water => "💧 Plant water requirements vary by species:\n\n• Cacti: 1-2 times per month\n• Tropical plants: 2-3 times per week\n• Herbaceous plants: 1-2 times per week\n\nWater when soil is dry and check drainage.",
        ChatTopic::Light => "☀️ Plant light requirements:\n\n• Bright light: cacti, succulents\n• Medium light: ficus, monstera\n• Low light: zamioculcas, pothos\n\nPlace your plant in the right spot and gradually acclimate it to new light.",
        ChatTopic::Soil => "🌱 Soil and drainage:\n\n• Good drainage is essential\n• Each plant has its own soil mix\n• For succulents: sandy soil\n• For tropical plants: peat + perlite\n\nChange soil 1-2 times per year.",
        ChatTopic::Fertilizer => "🌿 Fertilization tips:\n\n• Spring-summer: twice a month\n• Fall-winter: once a month or not at all\n• Liquid fertilizers are more effective\n• Always follow manufacturer instructions\n\nExcess fertilizer damages plants!",
        ChatTopic::Disease => "🔍 Diseases and problems:\n\n• Yellow leaves: too much water or low light\n• Brown tips: low humidity\n• White spots: fungus or pests\n• Falling leaves: stress or adaptation\n\nIdentify and treat problems early.",
        ChatTopic::Transplant => "🪴 Transplanting guidelines:\n\n• First sign: roots coming out of pot\n• Best time: spring\n• New pot should be 2-3 cm larger\n• Gently remove old soil\n• Water 1-2 days later\n\nPlant may be stressed during adaptation.",
        ChatTopic::Propagation => "🌱 Plant propagation methods:\n\n• Cuttings: monstera, pothos\n• Leaf: succulents, zamioculcas\n• Seeds: herbs\n• Division: daisies, sansevierya\n\nRooting takes 2-4 weeks.",
        ChatTopic::Beginner => "🌿 Plants for beginners:\n\n• Pothos: very hardy\n• Sansevierya: low maintenance\n• Zamioculcas: survives even when forgotten\n• Monstera: large and beautiful\n\nThese plants are ideal for newcomers!",
        ChatTopic::Tips => "✨ Basic care tips:\n\n• Learn each plant individually\n• Check regularly\n• Avoid over-care\n• Be patient - growth takes time\n• Upload a photo to identify plants!\n\nAsk if you have questions! 🌱",
        ChatTopic::Toxicity => "⚠️ Toxicity and safety:\n\n• Some plants are toxic to pets\n• Keep away from small children\n• Toxic plants: ficus, monstera, dieffenbachia\n• Safe: spider plant, parlor palm\n\nResearch before buying plants!",
        ChatTopic::Humidity => "💦 Humidity management:\n\n• Tropical plants need high humidity (60-80%)\n• Use a spray bottle\n• Group plants together\n• Use a humidifier\n• Place water trays\n\nDry air causes leaf browning.",
        ChatTopic::Temperature => "🌡️ Temperature requirements:\n\n• Most houseplants: 18-24°C\n• Tropical plants: 20-26°C\n• Cacti: 15-25°C\n• Keep away from cold drafts\n• Keep away from air conditioning\n\nTemperature changes cause stress.",
        ChatTopic::Default => "🌿 Your question should be about plants. I can help you with:\n\n• Watering and care\n• Light and placement\n• Soil and fertilization\n• Diseases and problems\n• Transplanting and propagation\n• Plant identification (upload photo)\n\nAsk a more specific question! 🌱",
    }
}

fn response_ru(topic: ChatTopic) -> &'static str {
    match topic {
        ChatTopic::Water => "💧 Потребности растений в воде различаются в зависимости от вида:\n\n• Кактусы: 1-2 раза в месяц\n• Тропические растения: 2-3 раза в неделю\n• Травянистые растения: 1-2 раза в неделю\n\nПоливайте, когда почва сухая, и проверяйте дренаж.",
        ChatTopic::Light => "☀️ Световые требования растений:\n\n• Яркий свет: кактусы, суккуленты\n• Средний свет: фикус, монстера\n• Низкая освещенность: замиокулькас, потос\n\nРазместите растение в правильном месте и постепенно приучите его к новому освещению.",
        ChatTopic::Soil => "🌱 Почва и дренаж:\n\n• Хороший дренаж необходим\n• У каждого растения своя почвенная смесь\n• Для суккулентов: песчаная почва\n• Для тропических растений: торф + перлит\n\nМеняйте почву 1-2 раза в год.",
        ChatTopic::Fertilizer => "🌿 Советы по удобрению:\n\n• Весна-лето: два раза в месяц\n• Осень-зима: один раз в месяц или вообще\n• Жидкие удобрения более эффективны\n• Всегда следуйте инструкциям производителя\n\nИзбыток удобрений вредит растениям!",
        ChatTopic::Disease => "🔍 Болезни и проблемы:\n\n• Желтые листья: слишком много воды или мало света\n• Коричневые кончики: низкая влажность\n• Белые пятна: грибок или вредители\n• Опадающие листья: стресс или адаптация\n\nВыявляйте и лечите проблемы рано.",
        ChatTopic::Transplant => "🪴 Правила пересадки:\n\n• Первый признак: корни выходят из горшка\n• Лучшее время: весна\n• Новый горшок должен быть на 2-3 см больше\n• Аккуратно удалите старую почву\n• Полейте через 1-2 дня\n\nРастение может испытывать стресс во время адаптации.",
        ChatTopic::Propagation => "🌱 Методы размножения растений:\n\n• Черенки: монстера, потос\n• Лист: суккуленты, замиокулькас\n• Семена: травы\n• Деление: ромашки, сансевиерия\n\nУкоренение занимает 2-4 недели.",
        ChatTopic::Beginner => "🌿 Растения для начинающих:\n\n• Потос: очень выносливый\n• Сансевиерия: низкий уход\n• Замиокулькас: выживает даже когда забыт\n• Монстера: большой и красивый\n\nЭти растения идеальны для новичков!",
        ChatTopic::Tips => "✨ Основные советы по уходу:\n\n• Изучайте каждое растение индивидуально\n• Регулярно проверяйте\n• Избегайте чрезмерного ухода\n• Будьте терпеливы - рост требует времени\n• Загрузите фото для идентификации растений!\n\nЗадавайте вопросы, если есть! 🌱",
        ChatTopic::Toxicity => "⚠️ Токсичность и безопасность:\n\n• Некоторые растения токсичны для домашних животных\n• Держите подальше от маленьких детей\n• Токсичные растения: фикус, монстера, диффенбахия\n• Безопасные: паучье растение, комнатная пальма\n\nИсследуйте перед покупкой растений!",
        ChatTopic::Humidity => "💦 Управление влажностью:\n\n• Тропические растения нуждаются в высокой влажности (60-80%)\n• Используйте распылитель\n• Группируйте растения вместе\n• Используйте увлажнитель\n• Размещайте подносы с водой\n\nСухой воздух вызывает потемнение листьев.",
        ChatTopic::Temperature => "🌡️ Температурные требования:\n\n• Большинство комнатных растений: 18-24°C\n• Тропические растения: 20-26°C\n• Кактусы: 15-25°C\n• Держите подальше от холодных сквозняков\n• Держите подальше от кондиционера\n\nИзменения температуры вызывают стресс.",
        ChatTopic::Default => "🌿 Ваш вопрос должен быть о растениях. Я могу помочь вам с:\n\n• Полив и уход\n• Свет и размещение\n• Почва и удобрение\n• Болезни и проблемы\n• Пересадка и размножение\n• Идентификация растений (загрузить фото)\n\nЗадайте более конкретный вопрос! 🌱",
    }
}

fn response_az(topic: ChatTopic) -> &'static str {
    match topic {
        ChatTopic::Water => "💧 Bitkilərin su ehtiyacı növdən asılıdır:\n\n• Kaktuslar: ayda 1-2 dəfə\n• Tropik bitkilər: həftədə 2-3 dəfə\n• Otsu bitkilər: həftədə 1-2 dəfə\n\nTorpaq quruduqda sulayın və drenajı yoxlayın.",
        ChatTopic::Light => "☀️ Bitkilərin işıq ehtiyacı:\n\n• Parlaq işıq: kaktuslar, sukulentlər\n• Orta işıq: ficus, monstera\n• Az işıq: zamioculcas, pothos\n\nBitkinizi düzgün yerə qoyun və onu tədricən yeni işığa adətləndirin.",
        ChatTopic::Soil => "🌱 Torpaq və drenaj:\n\n• Yaxşı drenaj vacibdir\n• Hər bitkinin öz torpaq qarışığı var\n• Sukulentlər üçün: qumlu torpaq\n• Tropik bitkilər üçün: torf + perlit\n\nİldə 1-2 dəfə torpaq dəyişdirin.",
        ChatTopic::Fertilizer => "🌿 Gübrələmə məsləhətləri:\n\n• Yaz-yay: ayda 2 dəfə\n• Payız-qış: ayda 1 dəfə və ya heç\n• Maye gübrələr daha effektivdir\n• Həmişə istehsalçının təlimatına əməl edin\n\nArtıq gübrə bitkiyə zərər verər!",
        ChatTopic::Disease => "🔍 Xəstəlik və problemlər:\n\n• Sarı yarpaqlar: çox su və ya az işıq\n• Qəhvəyi uçlar: az rütubət\n• Ağ ləkələr: kif və ya zərərvericilər\n• Düşən yarpaqlar: stress və ya adaptasiya\n\nProblemi erkən müəyyənləşdirin və müalicə edin.",
        ChatTopic::Transplant => "🪴 Köçürmə qaydaları:\n\n• İlk əlamət: kök qabdan çıxır\n• Ən yaxşı vaxt: yaz\n• Yeni qab 2-3 sm böyük olmalı\n• Köhnə torpağı yumşaq silin\n• 1-2 gün sonra sulayın\n\nBitki adaptasiya dövründə stresslənə bilər.",
        ChatTopic::Propagation => "🌱 Bitki çoxaltma üsulları:\n\n• Kəsiklər: monstera, pothos\n• Yarpaq: sukulentlər, zamioculcas\n• Toxum: baharatlıq bitkilər\n• Bölmə: papatyalar, sansevierya\n\nKök atması üçün 2-4 həftə lazımdır.",
        ChatTopic::Beginner => "🌿 Başlanğıc üçün bitkilər:\n\n• Pothos: çox davamlı\n• Sansevierya: az qulluq\n• Zamioculcas: unudulduqda belə yaşayır\n• Monstera: böyük və gözəl\n\nBu bitkilər yeni başlayanlar üçün idealdır!",
        ChatTopic::Tips => "✨ Əsas qulluq məsləhətləri:\n\n• Hər bitkini fərdi olaraq öyrənin\n• Mütəmadi yoxlayın\n• Artıq qulluqdan çəkinin\n• Səbr edin - artım vaxt tələb edir\n• Şəkil yükləyərək bitkini tanıya bilərsiniz!\n\nSualınız varsa, soruşun! 🌱",
        ChatTopic::Toxicity => "⚠️ Zəhərlilik və təhlükəsizlik:\n\n• Bəzi bitkilər ev heyvanları üçün zəhərlidir\n• Kiçik uşaqlardan uzaq saxlayın\n• Zəhərli bitkilər: ficus, monstera, dieffenbachia\n• Təhlükəsiz: spider plant, parlor palm\n\nBitki almazdan əvvəl araşdırın!",
        ChatTopic::Humidity => "💦 Rütubət idarəetməsi:\n\n• Tropik bitkilər yüksək rütubət istəyir (60-80%)\n• Püskürtmə şüşəsi istifadə edin\n• Bitkiləri qrupda yerləşdirin\n• Rütubətləndirici istifadə edin\n• Su qabları qoyun\n\nQuru hava yarpaqların qəhvəyiləşməsinə səbəb olur.",
        ChatTopic::Temperature => "🌡️ Temperatur tələbləri:\n\n• Əksər ev bitkiləri: 18-24°C\n• Tropik bitkilər: 20-26°C\n• Kaktuslar: 15-25°C\n• Soyuq cərəyandan uzaq saxlayın\n• Kondisionerdən uzaq yerləşdirin\n\nTemperatur dəyişiklikləri stres yaradır.",
        ChatTopic::Default => "🌿 Sualınız bitkiçiliklə bağlı olmalıdır. Mən sizə aşağıdakı mövzularda kömək edə bilərəm:\n\n• Sulama və qulluq\n• İşıq və yerləşdirmə\n• Torpaq və gübrələmə\n• Xəstəlik və problemlər\n• Köçürmə və çoxaltma\n• Bitki tanıma (şəkil yükləyin)\n\nDaha spesifik sual verin! 🌱",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_keyword() {
        assert_eq!(ChatTopic::classify("How often should I WATER it?"), ChatTopic::Water);
        assert_eq!(ChatTopic::classify("какая почва нужна"), ChatTopic::Soil);
        assert_eq!(ChatTopic::classify("gübrə lazımdır?"), ChatTopic::Fertilizer);
        assert_eq!(ChatTopic::classify("should I transplant"), ChatTopic::Transplant);
        assert_eq!(ChatTopic::classify("what is the ideal humidity"), ChatTopic::Humidity);
    }

    #[test]
    fn test_first_match_wins() {
        // "sun" contains "su", and water is checked before light
        assert_eq!(ChatTopic::classify("does it like sun"), ChatTopic::Water);
        // "yellow" (disease) comes before "pet" (toxicity)
        assert_eq!(ChatTopic::classify("yellow spots, is it safe for my pet"), ChatTopic::Disease);
    }

    #[test]
    fn test_unmatched_falls_back_to_default() {
        assert_eq!(ChatTopic::classify("qwerty"), ChatTopic::Default);
        let chat = ChatService::new(Language::En);
        assert!(chat.reply("qwerty").unwrap().starts_with("🌿 Your question should be about plants"));
    }

    #[test]
    fn test_blank_message_gets_no_reply() {
        let chat = ChatService::new(Language::Az);
        assert_eq!(chat.reply(""), None);
        assert_eq!(chat.reply("   \n"), None);
    }

    #[test]
    fn test_reply_is_localized() {
        for (lang, prefix) in [
            (Language::Az, "🌡️ Temperatur"),
            (Language::En, "🌡️ Temperature"),
            (Language::Ru, "🌡️ Температурные"),
        ] {
            let reply = ChatService::new(lang).reply("cold").unwrap();
            assert!(reply.starts_with(prefix), "{}: {}", lang, reply);
        }
    }

    #[test]
    fn test_welcome_message() {
        assert!(ChatService::new(Language::En).welcome().starts_with("Hi!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_after_delay() {
        let scope = ViewScope::new();
        let chat = ChatService::new(Language::En);
        let start = tokio::time::Instant::now();

        let reply = chat.reply_after(&scope, "how do I propagate").unwrap().wait().await;

        // "how" (tips) is checked after propagation, so propagation answers
        assert_eq!(reply, Some(ChatTopic::Propagation.response(Language::En)));
        assert!(start.elapsed() >= REPLY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_dropped_with_view() {
        let scope = ViewScope::new();
        let pending = ChatService::new(Language::En).reply_after(&scope, "water").unwrap();
        drop(scope);
        assert_eq!(pending.wait().await, None);
    }
}
