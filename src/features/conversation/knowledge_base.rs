//! Canned answers for common phrases
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

enum Answer {
    Fixed(&'static str),
    /// Mentions the user's current default city
    DefaultCity,
}

/// Checked in order; the first phrase contained in the question wins
const KNOWLEDGE_BASE: &[(&str, Answer)] = &[
    (
        "sen kimsin",
        Answer::Fixed("Ben günlük işlerinize yardımcı olan kişisel yapay zeka asistanınızım 🤖"),
    ),
    (
        "ne yapabilirsin",
        Answer::Fixed("Size hava durumu bilgisi verebilir, hatırlatıcı oluşturabilir, saat ve tarih söyleyebilirim. Ayrıca basit sorularınızı yanıtlayabilirim."),
    ),
    (
        "nasılsın",
        Answer::Fixed("Ben bir programım ama sizin için her zaman hazırım! 😊"),
    ),
    (
        "teşekkür",
        Answer::Fixed("Rica ederim! Başka nasıl yardımcı olabilirim? 💙"),
    ),
    (
        "merhaba",
        Answer::Fixed("Merhaba! Size nasıl yardımcı olabilirim? 😊"),
    ),
    ("varsayılan şehir", Answer::DefaultCity),
];

pub const GREETING: &str = "Merhaba! Size nasıl yardımcı olabilirim? 😊";

pub fn lookup(question: &str, default_city: &str) -> Option<String> {
    KNOWLEDGE_BASE
        .iter()
        .find(|(phrase, _)| question.contains(phrase))
        .map(|(_, answer)| match answer {
            Answer::Fixed(text) => text.to_string(),
            Answer::DefaultCity => format!(
                "Şu anki varsayılan şehir: {default_city}. Değiştirmek için 'varsayılan şehir İstanbul' gibi bir komut kullanabilirsiniz."
            ),
        })
}
