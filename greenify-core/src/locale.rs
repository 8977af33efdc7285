//! Static string tables for the three site languages
//!
//! `t(key, lang)` returns the display string for a key. Strings that carry a
//! number go through the `format_*` helpers. Unknown keys come back as the key
//! itself so a missing entry is visible rather than silently blank.

use crate::domain::{Language, Page};

/// Return the localized static string for `key`
pub fn t<'a>(key: &'a str, lang: Language) -> &'a str {
    use Language::*;

    match key {
        // --- Navigation ---
        "home" => match lang {
            Az => "Ana səhifə",
            En => "Home",
            Ru => "Главная",
        },
        "welcome" => match lang {
            Az => "Xoş gəlmisiniz",
            En => "Welcome",
            Ru => "Добро пожаловать",
        },
        "about" => match lang {
            Az => "Haqqımızda",
            En => "About",
            Ru => "О нас",
        },
        "plantRecognition" => match lang {
            Az => "Bitki tanıma",
            En => "Plant recognition",
            Ru => "Распознавание растений",
        },
        "tasks" => match lang {
            Az => "Tapşırıqlar",
            En => "Tasks",
            Ru => "Задания",
        },
        "educationalGames" => match lang {
            Az => "Təhsil oyunları",
            En => "Educational games",
            Ru => "Обучающие игры",
        },
        "questions" => match lang {
            Az => "Suallar",
            En => "Questions",
            Ru => "Вопросы",
        },
        "interactiveGames" => match lang {
            Az => "İnteraktiv oyunlar",
            En => "Interactive games",
            Ru => "Интерактивные игры",
        },
        "map" => match lang {
            Az => "Xəritə",
            En => "Map",
            Ru => "Карта",
        },
        "contact" => match lang {
            Az => "Əlaqə",
            En => "Contact",
            Ru => "Контакты",
        },
        "profile" => match lang {
            Az => "Profil",
            En => "Profile",
            Ru => "Профиль",
        },
        "login" => match lang {
            Az => "Daxil ol",
            En => "Log in",
            Ru => "Войти",
        },
        "register" => match lang {
            Az => "Qeydiyyat",
            En => "Register",
            Ru => "Регистрация",
        },
        "logout" => match lang {
            Az => "Çıxış",
            En => "Log out",
            Ru => "Выйти",
        },

        // --- Forms ---
        "name" => match lang {
            Az => "Ad",
            En => "Name",
            Ru => "Имя",
        },
        "email" => match lang {
            Az => "E-poçt",
            En => "Email",
            Ru => "Эл. почта",
        },
        "password" => match lang {
            Az => "Şifrə",
            En => "Password",
            Ru => "Пароль",
        },
        "confirmPassword" => match lang {
            Az => "Şifrəni təsdiqləyin",
            En => "Confirm password",
            Ru => "Подтвердите пароль",
        },
        "loading" => match lang {
            Az => "Yüklənir...",
            En => "Loading...",
            Ru => "Загрузка...",
        },
        "passwordsMismatch" => match lang {
            Az => "Şifrələr uyğun gəlmir",
            En => "Passwords do not match",
            Ru => "Пароли не совпадают",
        },
        "passwordTooShort" => match lang {
            Az => "Şifrə ən azı 6 simvol olmalıdır",
            En => "Password must be at least 6 characters",
            Ru => "Пароль должен содержать не менее 6 символов",
        },
        "registeredOk" => match lang {
            Az => "Uğurla qeydiyyatdan keçdi!",
            En => "Successfully registered!",
            Ru => "Успешно зарегистрирован!",
        },
        "serverError" => match lang {
            Az => "Server xətası",
            En => "Server error",
            Ru => "Ошибка сервера",
        },
        "genericError" => match lang {
            Az => "Xəta baş verdi",
            En => "An error occurred",
            Ru => "Произошла ошибка",
        },

        // --- Progress ---
        "points" => match lang {
            Az => "Xal",
            En => "Points",
            Ru => "Баллы",
        },
        "tasksCompleted" => match lang {
            Az => "Tamamlanmış tapşırıqlar",
            En => "Tasks completed",
            Ru => "Выполненные задания",
        },
        "pointsAdded" => match lang {
            Az => "Bal profilinizə əlavə edildi",
            En => "Points added to your profile",
            Ru => "Баллы добавлены в ваш профиль",
        },

        // --- Preferences ---
        "darkMode" => match lang {
            Az => "Qaranlıq rejim",
            En => "Dark mode",
            Ru => "Тёмная тема",
        },
        "lightMode" => match lang {
            Az => "İşıqlı rejim",
            En => "Light mode",
            Ru => "Светлая тема",
        },

        // --- Plant chat ---
        "chatWelcomeMessage" => match lang {
            Az => "Salam! 🌿 Mən bitki qulluğu köməkçisiyəm. Sulama, işıq, torpaq və ya xəstəliklər barədə soruşun, yaxud bitkinin şəklini yükləyin!",
            En => "Hi! 🌿 I'm your plant care assistant. Ask about watering, light, soil or diseases, or upload a photo of your plant!",
            Ru => "Привет! 🌿 Я помощник по уходу за растениями. Спросите о поливе, свете, почве или болезнях, либо загрузите фото растения!",
        },

        _ => key,
    }
}

/// Title of a page in the navigation bar
pub fn page_title(page: Page, lang: Language) -> &'static str {
    let key = match page {
        Page::Home => "home",
        Page::Welcome => "welcome",
        Page::Login => "login",
        Page::Register => "register",
        Page::Map => "map",
        Page::Plant => "plantRecognition",
        Page::Profile => "profile",
        Page::About => "about",
        Page::Contact => "contact",
        Page::Tasks => "tasks",
        Page::Games => "educationalGames",
        Page::GamesQuestions => "questions",
        Page::GamesInteractive => "interactiveGames",
    };
    t(key, lang)
}

/// Toast title after earning points
pub fn format_points_earned(points: u32, lang: Language) -> String {
    match lang {
        Language::Az => format!("🎉 Təbriklər! +{} xal qazandınız!", points),
        Language::En => format!("🎉 Congratulations! You earned +{} points!", points),
        Language::Ru => format!("🎉 Поздравляем! Вы заработали +{} баллов!", points),
    }
}

/// Toast description after completing tasks
pub fn format_tasks_completed(tasks: u32, lang: Language) -> String {
    match lang {
        Language::Az => format!("{} tapşırıq tamamlandı", tasks),
        Language::En => format!("{} tasks completed", tasks),
        Language::Ru => format!("Выполнено заданий: {}", tasks),
    }
}

/// Greeting on the welcome page
pub fn format_greeting(name: &str, lang: Language) -> String {
    match lang {
        Language::Az => format!("Xoş gəlmisiniz, {}! 🌱", name),
        Language::En => format!("Welcome, {}! 🌱", name),
        Language::Ru => format!("Добро пожаловать, {}! 🌱", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_navigation_titles() {
        for lang in Language::ALL {
            for page in Page::ALL {
                let title = page_title(page, lang);
                assert!(!title.is_empty());
                assert!(
                    title.chars().next().map_or(false, char::is_uppercase),
                    "missing title for {} in {}",
                    page,
                    lang
                );
            }
        }
    }

    #[test]
    fn test_translations_differ_per_language() {
        assert_eq!(t("login", Language::Az), "Daxil ol");
        assert_eq!(t("login", Language::En), "Log in");
        assert_eq!(t("login", Language::Ru), "Войти");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t("noSuchKey", Language::En), "noSuchKey");
    }

    #[test]
    fn test_points_toast() {
        assert_eq!(
            format_points_earned(10, Language::Az),
            "🎉 Təbriklər! +10 xal qazandınız!"
        );
        assert_eq!(format_tasks_completed(2, Language::En), "2 tasks completed");
    }
}
