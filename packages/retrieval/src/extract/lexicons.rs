//! Fixed keyword lexicons used by the extraction heuristics.
//!
//! Kept as plain data tables rather than scattered conditionals so they
//! are independently unit-testable and extensible without touching
//! control flow.

/// Technical skills scanned for in page text (case-insensitive substring
/// match). Entries are the canonical display forms.
pub const TECH_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "Kotlin",
    "Swift",
    "Rust",
    "Go",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Scala",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Django",
    "Flask",
    "Spring",
    "Rails",
    ".NET",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "Kafka",
    "GraphQL",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Jenkins",
    "AWS",
    "Azure",
    "GCP",
    "Linux",
    "Git",
    "CI/CD",
];

/// Soft skills scanned for in page text.
pub const SOFT_SKILLS: &[&str] = &[
    "Communication",
    "Teamwork",
    "Leadership",
    "Problem solving",
    "Critical thinking",
    "Adaptability",
    "Time management",
    "Collaboration",
    "Creativity",
    "Attention to detail",
    "Mentoring",
    "Stakeholder management",
    "Ownership",
    "Empathy",
];

/// Seniority keyword sets, checked in this exact order; first match wins.
///
/// The fixed priority is a documented heuristic limitation: a title like
/// "Senior Intern" resolves to the internship set because that set is
/// checked first.
pub const SENIORITY_KEYWORDS: &[(&str, &[&str])] = &[
    ("internship", &["intern", "trainee", "apprentice", "working student"]),
    ("junior", &["junior", "jr.", "entry level", "entry-level", "graduate"]),
    ("mid-level", &["mid-level", "mid level", "intermediate"]),
    ("senior", &["senior", "sr.", "sr "]),
    ("lead", &["lead", "team lead", "tech lead"]),
    ("principal", &["principal", "staff engineer", "staff "]),
    ("director", &["director", "head of", "vp ", "vice president"]),
    (
        "executive",
        &["chief ", "cto", "ceo", "cfo", "coo", "founder", "executive officer"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_priority_order_is_fixed() {
        let levels: Vec<&str> = SENIORITY_KEYWORDS.iter().map(|(level, _)| *level).collect();
        assert_eq!(
            levels,
            vec![
                "internship",
                "junior",
                "mid-level",
                "senior",
                "lead",
                "principal",
                "director",
                "executive",
            ]
        );
    }

    #[test]
    fn test_lexicons_nonempty_and_distinct() {
        assert!(TECH_SKILLS.len() >= 35);
        let mut seen = std::collections::HashSet::new();
        for skill in TECH_SKILLS {
            assert!(seen.insert(skill.to_lowercase()), "duplicate: {skill}");
        }
    }
}
