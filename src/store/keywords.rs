use crate::store::KeywordRecord;

// Onboarding-issue phrases with 2024-2026 mention counts. The tag-cloud
// layout is tuned for exactly this many entries.
const KEYWORDS: &[(&str, u32)] = &[
    ("Thrown into the deep end", 48),
    ("Tribal knowledge hoarding", 45),
    ("Lack of structured training", 42),
    ("Zero guidance for new joiners", 40),
    ("Outdated documentation", 38),
    ("No feedback loop", 35),
    ("Office politics over skill", 32),
    ("Figure it out yourself", 30),
    ("Overwhelmed by context switching", 28),
    ("Lack of technical context", 25),
    ("Fake politeness culture", 22),
    ("Trial by fire onboarding", 20),
    ("No dedicated mentorship", 18),
    ("Chaotic onboarding process", 15),
    ("Generic / Irrelevant training", 12),
];

pub fn seed_keywords() -> Vec<KeywordRecord> {
    KEYWORDS
        .iter()
        .map(|&(phrase, mention_count)| KeywordRecord {
            phrase,
            mention_count,
        })
        .collect()
}
