//! Fixed lookup tables for canonicalization.
//!
//! All lookups are lowercase-keyed; callers lowercase their input first.

/// Country names and aliases to ISO-2 codes.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("usa", "US"),
    ("u.s.a.", "US"),
    ("u.s.", "US"),
    ("us", "US"),
    ("united states", "US"),
    ("united states of america", "US"),
    ("america", "US"),
    ("uk", "GB"),
    ("u.k.", "GB"),
    ("united kingdom", "GB"),
    ("great britain", "GB"),
    ("england", "GB"),
    ("scotland", "GB"),
    ("wales", "GB"),
    ("germany", "DE"),
    ("deutschland", "DE"),
    ("france", "FR"),
    ("spain", "ES"),
    ("españa", "ES"),
    ("italy", "IT"),
    ("italia", "IT"),
    ("portugal", "PT"),
    ("netherlands", "NL"),
    ("the netherlands", "NL"),
    ("holland", "NL"),
    ("belgium", "BE"),
    ("switzerland", "CH"),
    ("austria", "AT"),
    ("poland", "PL"),
    ("czech republic", "CZ"),
    ("czechia", "CZ"),
    ("slovakia", "SK"),
    ("hungary", "HU"),
    ("romania", "RO"),
    ("bulgaria", "BG"),
    ("greece", "GR"),
    ("sweden", "SE"),
    ("norway", "NO"),
    ("denmark", "DK"),
    ("finland", "FI"),
    ("iceland", "IS"),
    ("ireland", "IE"),
    ("estonia", "EE"),
    ("latvia", "LV"),
    ("lithuania", "LT"),
    ("ukraine", "UA"),
    ("croatia", "HR"),
    ("serbia", "RS"),
    ("slovenia", "SI"),
    ("luxembourg", "LU"),
    ("canada", "CA"),
    ("mexico", "MX"),
    ("méxico", "MX"),
    ("brazil", "BR"),
    ("brasil", "BR"),
    ("argentina", "AR"),
    ("chile", "CL"),
    ("colombia", "CO"),
    ("peru", "PE"),
    ("uruguay", "UY"),
    ("australia", "AU"),
    ("new zealand", "NZ"),
    ("japan", "JP"),
    ("china", "CN"),
    ("south korea", "KR"),
    ("korea", "KR"),
    ("india", "IN"),
    ("singapore", "SG"),
    ("hong kong", "HK"),
    ("taiwan", "TW"),
    ("thailand", "TH"),
    ("vietnam", "VN"),
    ("philippines", "PH"),
    ("indonesia", "ID"),
    ("malaysia", "MY"),
    ("israel", "IL"),
    ("turkey", "TR"),
    ("türkiye", "TR"),
    ("united arab emirates", "AE"),
    ("uae", "AE"),
    ("saudi arabia", "SA"),
    ("south africa", "ZA"),
    ("nigeria", "NG"),
    ("kenya", "KE"),
    ("egypt", "EG"),
    ("russia", "RU"),
];

/// Currency symbols and words to ISO-4217 codes.
pub const CURRENCIES: &[(&str, &str)] = &[
    ("$", "USD"),
    ("us$", "USD"),
    ("usd", "USD"),
    ("dollar", "USD"),
    ("dollars", "USD"),
    ("€", "EUR"),
    ("eur", "EUR"),
    ("euro", "EUR"),
    ("euros", "EUR"),
    ("£", "GBP"),
    ("gbp", "GBP"),
    ("pound", "GBP"),
    ("pounds", "GBP"),
    ("sterling", "GBP"),
    ("¥", "JPY"),
    ("jpy", "JPY"),
    ("yen", "JPY"),
    ("chf", "CHF"),
    ("franc", "CHF"),
    ("francs", "CHF"),
    ("cad", "CAD"),
    ("c$", "CAD"),
    ("ca$", "CAD"),
    ("aud", "AUD"),
    ("a$", "AUD"),
    ("au$", "AUD"),
    ("nzd", "NZD"),
    ("nz$", "NZD"),
    ("sek", "SEK"),
    ("kr", "SEK"),
    ("nok", "NOK"),
    ("dkk", "DKK"),
    ("pln", "PLN"),
    ("zł", "PLN"),
    ("czk", "CZK"),
    ("kč", "CZK"),
    ("huf", "HUF"),
    ("ron", "RON"),
    ("inr", "INR"),
    ("₹", "INR"),
    ("rupee", "INR"),
    ("rupees", "INR"),
    ("cny", "CNY"),
    ("rmb", "CNY"),
    ("yuan", "CNY"),
    ("krw", "KRW"),
    ("₩", "KRW"),
    ("sgd", "SGD"),
    ("s$", "SGD"),
    ("hkd", "HKD"),
    ("hk$", "HKD"),
    ("brl", "BRL"),
    ("r$", "BRL"),
    ("mxn", "MXN"),
    ("ils", "ILS"),
    ("₪", "ILS"),
    ("aed", "AED"),
    ("zar", "ZAR"),
    ("try", "TRY"),
    ("₺", "TRY"),
];

/// Pay-period words to the canonical {year, month, week, day, hour}.
pub const PERIODS: &[(&str, &str)] = &[
    ("year", "year"),
    ("yearly", "year"),
    ("annual", "year"),
    ("annually", "year"),
    ("annum", "year"),
    ("yr", "year"),
    ("pa", "year"),
    ("p.a.", "year"),
    ("month", "month"),
    ("monthly", "month"),
    ("mo", "month"),
    ("week", "week"),
    ("weekly", "week"),
    ("wk", "week"),
    ("day", "day"),
    ("daily", "day"),
    ("per diem", "day"),
    ("hour", "hour"),
    ("hourly", "hour"),
    ("hr", "hour"),
];

/// Contract-type substrings, checked in order; first match wins. The
/// bare "contract" entry comes last so "fixed-term contract" style text
/// gets a chance at the more specific entries first.
pub const CONTRACT_TYPES: &[(&str, &str)] = &[
    ("full-time", "full-time"),
    ("full time", "full-time"),
    ("fulltime", "full-time"),
    ("part-time", "part-time"),
    ("part time", "part-time"),
    ("parttime", "part-time"),
    ("intern", "internship"),
    ("working student", "internship"),
    ("freelance", "freelance"),
    ("self-employed", "freelance"),
    ("temporary", "temporary"),
    ("temp", "temporary"),
    ("seasonal", "temporary"),
    ("permanent", "permanent"),
    ("unlimited", "permanent"),
    ("contractor", "contract"),
    ("contract", "contract"),
];

/// Work-model substrings; hybrid is checked before remote so "hybrid
/// remote" resolves to hybrid.
pub const WORK_MODELS: &[(&str, &str)] = &[
    ("hybrid", "hybrid"),
    ("remote", "remote"),
    ("wfh", "remote"),
    ("work from home", "remote"),
    ("telecommute", "remote"),
    ("distributed", "remote"),
    ("on-site", "on-site"),
    ("onsite", "on-site"),
    ("on site", "on-site"),
    ("in-office", "on-site"),
    ("in office", "on-site"),
];

/// Seniority substrings to the canonical ladder.
pub const SENIORITIES: &[(&str, &str)] = &[
    ("internship", "internship"),
    ("intern", "internship"),
    ("trainee", "internship"),
    ("junior", "junior"),
    ("entry", "junior"),
    ("graduate", "junior"),
    ("mid-level", "mid-level"),
    ("mid level", "mid-level"),
    ("mid", "mid-level"),
    ("intermediate", "mid-level"),
    ("senior", "senior"),
    ("lead", "lead"),
    ("principal", "principal"),
    ("staff", "principal"),
    ("director", "director"),
    ("head of", "director"),
    ("executive", "executive"),
    ("c-level", "executive"),
    ("chief", "executive"),
];

/// Canonical capitalization for well-known technologies. Keys are
/// lowercase; lookup is exact (not substring).
pub const SKILL_CAPS: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("js", "JavaScript"),
    ("typescript", "TypeScript"),
    ("ts", "TypeScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("kotlin", "Kotlin"),
    ("swift", "Swift"),
    ("rust", "Rust"),
    ("golang", "Go"),
    ("go", "Go"),
    ("ruby", "Ruby"),
    ("php", "PHP"),
    ("c++", "C++"),
    ("cpp", "C++"),
    ("c#", "C#"),
    ("csharp", "C#"),
    ("scala", "Scala"),
    ("react", "React"),
    ("reactjs", "React"),
    ("angular", "Angular"),
    ("vue", "Vue.js"),
    ("vuejs", "Vue.js"),
    ("vue.js", "Vue.js"),
    ("node", "Node.js"),
    ("nodejs", "Node.js"),
    ("node.js", "Node.js"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring"),
    ("rails", "Rails"),
    (".net", ".NET"),
    ("dotnet", ".NET"),
    ("sql", "SQL"),
    ("postgresql", "PostgreSQL"),
    ("postgres", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("mongodb", "MongoDB"),
    ("mongo", "MongoDB"),
    ("redis", "Redis"),
    ("elasticsearch", "Elasticsearch"),
    ("kafka", "Kafka"),
    ("graphql", "GraphQL"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("k8s", "Kubernetes"),
    ("terraform", "Terraform"),
    ("jenkins", "Jenkins"),
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("gcp", "GCP"),
    ("linux", "Linux"),
    ("git", "Git"),
    ("ci/cd", "CI/CD"),
    ("html", "HTML"),
    ("css", "CSS"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keys_are_lowercase() {
        for (key, _) in COUNTRIES.iter().chain(CURRENCIES).chain(SKILL_CAPS) {
            assert_eq!(*key, key.to_lowercase(), "non-lowercase key: {key}");
        }
    }

    #[test]
    fn test_canonical_values_are_fixed_points() {
        // Idempotence requires every canonical output to map to itself
        // when looked up again.
        for (_, canonical) in CONTRACT_TYPES {
            let lowered = canonical.to_lowercase();
            let resolved = CONTRACT_TYPES
                .iter()
                .find(|(key, _)| lowered.contains(key))
                .map(|(_, value)| *value);
            assert_eq!(resolved, Some(*canonical), "not a fixed point: {canonical}");
        }
        for (_, canonical) in WORK_MODELS {
            let lowered = canonical.to_lowercase();
            let resolved = WORK_MODELS
                .iter()
                .find(|(key, _)| lowered.contains(key))
                .map(|(_, value)| *value);
            assert_eq!(resolved, Some(*canonical), "not a fixed point: {canonical}");
        }
        for (_, canonical) in SENIORITIES {
            let lowered = canonical.to_lowercase();
            let resolved = SENIORITIES
                .iter()
                .find(|(key, _)| lowered.contains(key))
                .map(|(_, value)| *value);
            assert_eq!(resolved, Some(*canonical), "not a fixed point: {canonical}");
        }
    }

    #[test]
    fn test_table_sizes() {
        assert!(COUNTRIES.len() >= 80);
        assert!(CURRENCIES.len() >= 45);
        assert!(SKILL_CAPS.len() >= 35);
    }
}
