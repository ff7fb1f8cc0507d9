use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Sample {
    #[strum(serialize = "AI sample")]
    Ai,
    #[strum(serialize = "Human sample")]
    Human,
}

impl Sample {
    pub fn text(self) -> &'static str {
        match self {
            Sample::Ai => {
                "It is important to note that artificial intelligence has become increasingly prevalent in modern society. Furthermore, machine learning algorithms have demonstrated remarkable capabilities across various domains. Consequently, the implications of these technological advancements warrant careful consideration. Moreover, the ethical dimensions of AI deployment require thorough examination."
            }
            Sample::Human => {
                "I've been thinking about AI lately. Like, it's everywhere now, you know? My phone has it, my car has it, even my fridge apparently has some kind of AI. It's pretty wild when you think about it. I'm not sure if it's all good though. What happens when these systems make mistakes?"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_text;
    use strum::IntoEnumIterator;

    #[test]
    fn test_samples_are_submittable() {
        for sample in Sample::iter() {
            assert!(validate_text(sample.text()).is_ok(), "{sample}");
        }
    }
}
