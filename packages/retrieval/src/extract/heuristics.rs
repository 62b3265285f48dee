//! Free-text heuristics: seniority, work model, skills, salary.
//!
//! All functions here are total; unrecognized input yields `None` or an
//! empty collection, never an error.

use crate::extract::lexicons::{SENIORITY_KEYWORDS, SOFT_SKILLS, TECH_SKILLS};
use crate::types::Salary;

/// Caps applied at extraction time (the normalizer caps again later).
pub const MAX_TECH_STACK: usize = 15;
pub const MAX_HARD_SKILLS: usize = 20;
pub const MAX_SOFT_SKILLS: usize = 10;

/// Derive seniority from a job title via the fixed-priority keyword sets.
pub fn seniority_from_title(title: &str) -> Option<&'static str> {
    let title = title.to_lowercase();
    for (level, keywords) in SENIORITY_KEYWORDS {
        if keywords.iter().any(|kw| title.contains(kw)) {
            return Some(level);
        }
    }
    None
}

/// Derive the work model from description text.
///
/// "remote" together with "office" reads as hybrid; remote markers alone
/// as remote; office markers alone as on-site; anything else stays unset.
pub fn work_model_from_text(text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    let mentions_remote =
        text.contains("remote") || text.contains("wfh") || text.contains("work from home");
    let mentions_office = text.contains("on-site") || text.contains("onsite") || text.contains("office");

    match (mentions_remote, mentions_office) {
        (true, true) => Some("hybrid"),
        (true, false) => Some("remote"),
        (false, true) => Some("on-site"),
        (false, false) => None,
    }
}

/// Scan page text for known skills (case-insensitive substring match),
/// returning canonical lexicon entries in lexicon order.
pub fn scan_skills(text: &str, lexicon: &[&'static str], cap: usize) -> Vec<String> {
    let haystack = text.to_lowercase();
    lexicon
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .take(cap)
        .map(|skill| skill.to_string())
        .collect()
}

/// Convenience wrappers over [`scan_skills`] with the fixed lexicons.
pub fn scan_tech_stack(text: &str) -> Vec<String> {
    scan_skills(text, TECH_SKILLS, MAX_TECH_STACK)
}

pub fn scan_soft_skills(text: &str) -> Vec<String> {
    scan_skills(text, SOFT_SKILLS, MAX_SOFT_SKILLS)
}

/// Capture skill candidates from "experience with X" style phrases.
///
/// The text is split on the trigger phrases first, so one sentence
/// carrying several triggers ("experience with Kafka and knowledge of
/// Terraform") yields candidates for each of them.
pub fn skill_phrases(text: &str) -> Vec<String> {
    let trigger = regex::Regex::new(
        r"(?i)(?:experience with|experience in|knowledge of|proficien(?:t|cy) in|familiarity with|expertise in)\s+",
    )
    .unwrap();

    let mut skills = Vec::new();
    for segment in trigger.split(text).skip(1) {
        // Each segment runs from a trigger to the next one; stop at the
        // sentence boundary and keep it short.
        let phrase = segment
            .split(&['.', ';', ':', '!', '?', '\n', '('][..])
            .next()
            .unwrap_or_default();
        let phrase: String = phrase.chars().take(80).collect();

        for candidate in phrase.split(&[',', '/'][..]) {
            for candidate in candidate.split(" and ") {
                let candidate = candidate.trim();
                let plausible = (2..=40).contains(&candidate.len())
                    && candidate
                        .chars()
                        .all(|c| c.is_alphanumeric() || " +#.&-".contains(c));
                if plausible
                    && !skills
                        .iter()
                        .any(|s: &String| s.eq_ignore_ascii_case(candidate))
                {
                    skills.push(candidate.to_string());
                }
            }
        }
        if skills.len() >= MAX_HARD_SKILLS {
            break;
        }
    }
    skills.truncate(MAX_HARD_SKILLS);
    skills
}

/// Parse a salary mention out of free text.
///
/// Handles currency-first (`$90,000 - $120,000 per year`) and
/// currency-last (`90.000 - 120.000 EUR`) orderings, `k` suffixes, and
/// single values with an explicit period.
pub fn parse_salary(text: &str) -> Option<Salary> {
    const CURRENCY: &str = r"\$|€|£|usd|eur|gbp|chf|cad|aud";
    const AMOUNT: &str = r"\d{1,3}(?:[,.]\d{3})*(?:\.\d+)?";
    const PERIOD: &str = r"year|annum|yr|month|mo|week|wk|day|hour|hr";

    let currency_first = regex::Regex::new(&format!(
        r"(?i)({CURRENCY})\s*({AMOUNT})\s*(k)?\s*(?:-|–|—|to)\s*(?:{CURRENCY})?\s*({AMOUNT})\s*(k)?(?:\s*(?:per|/|a[n]?)\s*({PERIOD}))?"
    ))
    .unwrap();
    let currency_last = regex::Regex::new(&format!(
        r"(?i)({AMOUNT})\s*(k)?\s*(?:-|–|—|to)\s*({AMOUNT})\s*(k)?\s*({CURRENCY})(?:\s*(?:per|/|a[n]?)\s*({PERIOD}))?"
    ))
    .unwrap();
    let single = regex::Regex::new(&format!(
        r"(?i)({CURRENCY})\s*({AMOUNT})\s*(k)?\s*(?:per|/|a[n]?)\s*({PERIOD})"
    ))
    .unwrap();

    if let Some(cap) = currency_first.captures(text) {
        return Some(Salary {
            min: parse_amount(cap.get(2)?.as_str(), cap.get(3).is_some()),
            max: parse_amount(cap.get(4)?.as_str(), cap.get(5).is_some()),
            currency: cap.get(1)?.as_str().to_string(),
            period: cap.get(6).map(|m| m.as_str().to_string()).unwrap_or_default(),
        });
    }

    if let Some(cap) = currency_last.captures(text) {
        return Some(Salary {
            min: parse_amount(cap.get(1)?.as_str(), cap.get(2).is_some()),
            max: parse_amount(cap.get(3)?.as_str(), cap.get(4).is_some()),
            currency: cap.get(5)?.as_str().to_string(),
            period: cap.get(6).map(|m| m.as_str().to_string()).unwrap_or_default(),
        });
    }

    if let Some(cap) = single.captures(text) {
        let amount = parse_amount(cap.get(2)?.as_str(), cap.get(3).is_some());
        return Some(Salary {
            min: amount,
            max: amount,
            currency: cap.get(1)?.as_str().to_string(),
            period: cap.get(4).map(|m| m.as_str().to_string()).unwrap_or_default(),
        });
    }

    None
}

fn parse_amount(raw: &str, thousands_suffix: bool) -> Option<f64> {
    // "90,000" and "90.000" are both thousands-separated integers; a
    // trailing ".5" style fraction only appears together with `k`.
    let cleaned = raw.replace([',', '.'], "");
    let mut value: f64 = cleaned.parse().ok()?;
    if thousands_suffix {
        // Re-parse to keep a "1.5k" fraction
        if let Ok(fractional) = raw.replace(',', "").parse::<f64>() {
            value = fractional;
        }
        value *= 1000.0;
    }
    Some(value)
}
