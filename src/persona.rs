//! Tutor personas and prompt composition
//!
//! Each persona is a fixed instructional preamble framing the assistant
//! as one kind of tutor. The set is closed: unknown selector keys map to
//! the general tutor instead of failing, so a stale or mistyped key from
//! the presentation layer can never break a chat.

/// Closing directive appended to every composed prompt
const CLOSING_DIRECTIVE: &str = "قدم إجابة تعليمية واضحة ومفيدة ومفصلة باللغة العربية:";

const MATH_INSTRUCTION: &str = "أنت معلم رياضيات خبير ومتميز. مهمتك هي:
- شرح المفاهيم الرياضية بطريقة واضحة ومبسطة
- استخدام أمثلة عملية من الحياة اليومية
- تقديم حلول مفصلة خطوة بخطوة
- تشجيع الطالب على فهم المنطق وراء العمليات الحسابية";

const SCIENCE_INSTRUCTION: &str = "أنت معلم علوم متميز وشغوف. تهدف إلى:
- شرح الظواهر العلمية والتجارب بطريقة شيقة ومفهومة
- ربط العلم بالحياة العملية والتطبيقات الحديثة
- تحفيز حب الاستطلاع والتفكير العلمي
- تبسيط المفاهيم المعقدة بأمثلة واضحة";

const LANGUAGE_INSTRUCTION: &str = "أنت معلم لغة عربية محترف ومتخصص. رسالتك هي:
- تعليم قواعد النحو والصرف والإملاء بوضوح
- تقديم أمثلة من الأدب والشعر العربي الأصيل
- تصحيح الأخطاء بطريقة بناءة ومشجعة
- إثراء المفردات وتحسين التعبير";

const ENGLISH_INSTRUCTION: &str = "أنت معلم لغة إنجليزية ماهر ومتمكن. هدفك هو:
- تعليم قواعد اللغة الإنجليزية بطريقة تفاعلية
- تحسين مهارات المحادثة والكتابة
- تقديم نصائح عملية لتطوير اللغة
- شرح الاختلافات الثقافية واللغوية";

const HISTORY_INSTRUCTION: &str = "أنت معلم تاريخ شغوف ومطلع. مهمتك هي:
- سرد الأحداث التاريخية بطريقة مشوقة وممتعة
- ربط التاريخ بالواقع المعاصر والدروس المستفادة
- تحليل أسباب ونتائج الأحداث التاريخية
- تقديم منظور متوازن وموضوعي للأحداث";

const GENERAL_INSTRUCTION: &str = "أنت معلم متعدد التخصصات ومتميز، تساعد الطلاب في مختلف المواضيع التعليمية.
- تتكيف مع موضوع السؤال وتقدم إجابات شاملة
- تستخدم طرق تعليمية متنوعة حسب الحاجة
- تشجع على التفكير النقدي والتعلم المستمر
- تقدم مصادر إضافية للتوسع في المعرفة";

/// The kind of tutor answering the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Math,
    Science,
    Language,
    English,
    History,
    General,
}

impl Persona {
    pub const ALL: [Persona; 6] = [
        Persona::Math,
        Persona::Science,
        Persona::Language,
        Persona::English,
        Persona::History,
        Persona::General,
    ];

    /// Map a selector key to a persona. Unknown keys fall back to the
    /// general tutor; this is deliberately not an error.
    pub fn from_key(key: &str) -> Self {
        match key {
            "math" => Persona::Math,
            "science" => Persona::Science,
            "language" => Persona::Language,
            "english" => Persona::English,
            "history" => Persona::History,
            _ => Persona::General,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Persona::Math => "math",
            Persona::Science => "science",
            Persona::Language => "language",
            Persona::English => "english",
            Persona::History => "history",
            Persona::General => "general",
        }
    }

    /// Arabic label for the persona selector
    pub fn display_name(self) -> &'static str {
        match self {
            Persona::Math => "رياضيات 🔢",
            Persona::Science => "علوم 🔬",
            Persona::Language => "لغة عربية 📖",
            Persona::English => "لغة إنجليزية 🇺🇸",
            Persona::History => "تاريخ 🏛️",
            Persona::General => "عام 📚",
        }
    }

    /// The fixed instruction block framing this tutor
    pub fn instruction(self) -> &'static str {
        match self {
            Persona::Math => MATH_INSTRUCTION,
            Persona::Science => SCIENCE_INSTRUCTION,
            Persona::Language => LANGUAGE_INSTRUCTION,
            Persona::English => ENGLISH_INSTRUCTION,
            Persona::History => HISTORY_INSTRUCTION,
            Persona::General => GENERAL_INSTRUCTION,
        }
    }
}

/// Compose the final prompt for one question: instruction block, the
/// verbatim student message, and the closing directive.
pub fn compose(persona: Persona, user_message: &str) -> String {
    format!(
        "{}\n\nالطالب يسأل: {}\n\n{}",
        persona.instruction(),
        user_message,
        CLOSING_DIRECTIVE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_contains_message_verbatim() {
        let prompt = compose(Persona::Math, "ما هو ناتج ٢+٢؟");
        assert!(prompt.contains("ما هو ناتج ٢+٢؟"));
        assert!(prompt.contains(Persona::Math.instruction()));
        assert!(prompt.contains(CLOSING_DIRECTIVE));
    }

    #[test]
    fn test_compose_shape() {
        let prompt = compose(Persona::Science, "لماذا السماء زرقاء؟");
        assert!(prompt.starts_with(Persona::Science.instruction()));
        assert!(prompt.contains("الطالب يسأل: لماذا السماء زرقاء؟"));
        assert!(prompt.ends_with(CLOSING_DIRECTIVE));
    }

    #[test]
    fn test_unknown_key_falls_back_to_general() {
        assert_eq!(Persona::from_key("philosophy"), Persona::General);
        assert_eq!(Persona::from_key(""), Persona::General);
        assert_eq!(
            compose(Persona::from_key("philosophy"), "سؤال"),
            compose(Persona::General, "سؤال")
        );
    }

    #[test]
    fn test_known_keys_round_trip() {
        for persona in Persona::ALL {
            assert_eq!(Persona::from_key(persona.key()), persona);
        }
    }

    #[test]
    fn test_instructions_are_distinct() {
        for a in Persona::ALL {
            for b in Persona::ALL {
                if a != b {
                    assert_ne!(a.instruction(), b.instruction());
                }
            }
        }
    }

    #[test]
    fn test_serializes_as_key() {
        let json = serde_json::to_string(&Persona::English).unwrap();
        assert_eq!(json, "\"english\"");
    }
}
