//! Fixed clinical text attached to each triage tier.
//!
//! The strings are display text rendered as-is by the frontend and must stay
//! byte-for-byte stable.

use triage_core::models::triage::TriageLevel;

pub fn immediate_actions(level: TriageLevel) -> &'static [&'static str] {
    match level {
        TriageLevel::Resuscitation => &[
            "Немедленная помощь реаниматолога",
            "Обеспечить проходимость дыхательных путей",
            "Подача высокопоточного кислорода",
            "Венозный доступ и инфузионная терапия",
            "Мониторинг витальных функций",
        ],
        TriageLevel::Emergency => &[
            "Немедленный осмотр врача (в течение 10 минут)",
            "Подача кислорода при SpO2 < 94%",
            "Венозный доступ",
            "Мониторинг витальных функций каждые 15 минут",
        ],
        TriageLevel::Urgent => &[
            "Осмотр врача в течение 30 минут",
            "Контроль витальных функций каждые 30 минут",
            "Обеспечить комфорт пациента",
        ],
        TriageLevel::SemiUrgent => &[
            "Осмотр врача в течение 60 минут",
            "Измерение витальных функций каждый час",
        ],
        TriageLevel::NonUrgent => &[
            "Плановый осмотр в течение 120 минут",
            "Регистрация данных",
        ],
    }
}

pub fn investigations(level: TriageLevel) -> &'static [&'static str] {
    match level {
        TriageLevel::Resuscitation => &[
            "ЭКГ",
            "КТ головы (при травме/неврологии)",
            "Общий анализ крови, биохимия",
            "Коагулограмма",
            "Газы крови",
        ],
        TriageLevel::Emergency => &[
            "ЭКГ (при боли в груди)",
            "Общий анализ крови",
            "Биохимия крови",
            "Рентген грудной клетки (при одышке)",
        ],
        TriageLevel::Urgent => &[
            "Общий анализ крови",
            "Общий анализ мочи",
            "Рентгенография при необходимости",
        ],
        TriageLevel::SemiUrgent => &["Базовые анализы по показаниям"],
        TriageLevel::NonUrgent => &[],
    }
}

pub fn monitoring_plan(level: TriageLevel) -> &'static [&'static str] {
    match level {
        TriageLevel::Resuscitation => &[
            "Непрерывный мониторинг ЭКГ, SpO2, АД",
            "Контроль сознания каждые 5 минут",
            "Учёт диуреза",
        ],
        TriageLevel::Emergency => &[
            "Мониторинг витальных функций каждые 15 минут",
            "Оценка динамики состояния каждые 30 минут",
        ],
        TriageLevel::Urgent => &[
            "Контроль витальных функций каждые 30 минут",
            "Переоценка через 1 час",
        ],
        TriageLevel::SemiUrgent => &[
            "Контроль витальных функций каждый час",
            "Переоценка через 2 часа",
        ],
        TriageLevel::NonUrgent => &[
            "Базовый мониторинг",
            "Переоценка при изменении состояния",
        ],
    }
}
