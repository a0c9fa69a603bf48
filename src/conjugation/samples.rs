use crate::core::{
    VerbEntry,
    VowelHarmony,
};

/// Starter collection covering two verbs per harmony class.
pub fn sample_verbs() -> Vec<VerbEntry> {
    vec![
        VerbEntry::new("tanulni", "tanul", "to learn", VowelHarmony::Back)
            .with_sample("Minden nap tanulok magyarul. (I study Hungarian every day.)"),
        VerbEntry::new("olvasni", "olvas", "to read", VowelHarmony::Back)
            .with_sample("Te sok könyvet olvasol. (You read many books.)"),
        VerbEntry::new("írni", "ír", "to write", VowelHarmony::Front)
            .with_sample("Ő levelet ír. (He/She writes a letter.)"),
        VerbEntry::new("fizetni", "fizet", "to pay", VowelHarmony::Front)
            .with_sample("Mi ritkán fizetünk készpénzben. (We rarely pay in cash.)"),
        VerbEntry::new("fürödni", "füröd", "to bathe", VowelHarmony::Mixed)
            .with_sample("Ti este fürödtök. (You bathe in the evening.)"),
        VerbEntry::new("törni", "tör", "to break", VowelHarmony::Mixed)
            .with_sample("Ők néha szabályt törnek. (They sometimes break a rule.)"),
    ]
}
