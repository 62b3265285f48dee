//! End-to-end pipeline tests over the mock transport.

use retrieval::{MockFetcher, Retriever, RetrieverConfig};

fn retriever(url: &str) -> Retriever {
    Retriever::new(RetrieverConfig::new(url))
}

#[tokio::test]
async fn schema_totality_on_garbage_html() {
    let fetcher = MockFetcher::new().with_page("https://jobs.example/1", ">>> utter ~~~ garbage <<<");
    let data = retriever("https://jobs.example/1").retrieve_with_fetcher(&fetcher).await;

    // Serialize and check the full shape survives even when nothing was
    // extractable.
    let value = serde_json::to_value(&data).unwrap();
    for field in ["job", "company", "metadata"] {
        assert!(value.get(field).is_some(), "missing top-level field: {field}");
    }
    assert_eq!(value["job"]["source_url"], "https://jobs.example/1");
    assert!(value["job"]["hard_skills"].is_array());
    assert!(value["company"]["data_sources"].is_array());
    assert!(value["metadata"]["scraped_at"].is_string());
}

#[tokio::test]
async fn jsonld_beats_conflicting_dom() {
    let html = r#"<html><head>
        <script type="application/ld+json">
        {"@type": "JobPosting",
         "title": "Senior Backend Engineer",
         "baseSalary": {"@type": "MonetaryAmount", "currency": "USD",
                        "value": {"minValue": 100000, "maxValue": 140000, "unitText": "YEAR"}},
         "jobLocation": {"@type": "Place",
                         "address": {"addressLocality": "Denver", "addressRegion": "CO", "addressCountry": "usa"}}}
        </script></head>
        <body><h1>Junior Gardener</h1><div class="job-location">Reykjavik, Iceland</div></body></html>"#;
    let fetcher = MockFetcher::new().with_page("https://jobs.example/2", html);
    let data = retriever("https://jobs.example/2").retrieve_with_fetcher(&fetcher).await;

    assert_eq!(data.job.title, "Senior Backend Engineer");
    assert_eq!(data.job.salary.min, Some(100000.0));
    assert_eq!(data.job.salary.max, Some(140000.0));
    assert_eq!(data.job.salary.currency, "USD");
    assert_eq!(data.job.salary.period, "year");
    assert_eq!(data.job.location.city, "Denver");
    assert_eq!(data.job.location.country, "US");
}

#[tokio::test]
async fn dom_fallback_without_jsonld() {
    let description = "We build reliable infrastructure for logistics companies. ".repeat(4);
    let html = format!(
        r#"<html><body><h1>Platform Engineer</h1><div class="job-description">{description}</div></body></html>"#
    );
    let fetcher = MockFetcher::new().with_page("https://jobs.example/3", html);
    let data = retriever("https://jobs.example/3").retrieve_with_fetcher(&fetcher).await;

    assert_eq!(data.job.title, "Platform Engineer");
    assert!(data.job.description_text.contains("reliable infrastructure"));
}

#[tokio::test]
async fn skills_dedup_and_cap() {
    let mut skills: Vec<String> = ["javascript", "JavaScript", "JAVASCRIPT", "JavaScript", "javaScript"]
        .iter()
        .map(|variant| format!("\"{variant}\""))
        .collect();
    skills.extend((0..35).map(|i| format!("\"skill-{i}\"")));
    let html = format!(
        r#"<html><head><script type="application/ld+json">
        {{"@type": "JobPosting", "title": "Engineer Title", "skills": [{}]}}
        </script></head><body></body></html>"#,
        skills.join(",")
    );
    let fetcher = MockFetcher::new().with_page("https://jobs.example/4", html);
    let data = retriever("https://jobs.example/4").retrieve_with_fetcher(&fetcher).await;

    let javascript_count = data
        .job
        .hard_skills
        .iter()
        .filter(|s| s.eq_ignore_ascii_case("javascript"))
        .count();
    assert_eq!(javascript_count, 1);
    assert_eq!(
        data.job.hard_skills.iter().filter(|s| *s == "JavaScript").count(),
        1
    );
    assert!(data.job.hard_skills.len() <= 30);
}

#[tokio::test]
async fn enrichment_isolation_wikipedia_failure() {
    let fetcher = MockFetcher::new()
        .with_page(
            "https://jobs.example/5",
            r#"<html><head><script type="application/ld+json">
            {"@type": "JobPosting", "title": "Engineer Title",
             "hiringOrganization": {"@type": "Organization", "name": "Globex"}}
            </script></head><body></body></html>"#,
        )
        .with_failure("https://en.wikipedia.org/wiki/Globex")
        .with_page(
            "https://www.linkedin.com/company/globex",
            r#"<html><head><title>Globex | LinkedIn</title>
               <meta name="description" content="Globex is a diversified multinational with interests in everything.">
               </head><body></body></html>"#,
        );

    let data = retriever("https://jobs.example/5").retrieve_with_fetcher(&fetcher).await;

    assert_eq!(data.company.linkedin_url, "https://www.linkedin.com/company/globex");
    assert!(data.company.wikipedia_url.is_empty());
    assert!(data.company.about_summary.contains("diversified"));
}

#[tokio::test]
async fn data_sources_excludes_rejected_pages() {
    let fetcher = MockFetcher::new()
        .with_page(
            "https://jobs.example/6",
            r#"<html><head><script type="application/ld+json">
            {"@type": "JobPosting", "title": "Engineer Title",
             "hiringOrganization": {"@type": "Organization", "name": "Globex"}}
            </script></head><body></body></html>"#,
        )
        .with_page(
            "https://www.linkedin.com/company/globex",
            "<html><head><title>Sign In | LinkedIn</title></head><body></body></html>",
        );

    let data = retriever("https://jobs.example/6").retrieve_with_fetcher(&fetcher).await;

    assert!(
        !data
            .company
            .data_sources
            .iter()
            .any(|url| url.contains("linkedin.com")),
        "rejected sign-in wall must not be recorded: {:?}",
        data.company.data_sources
    );
    assert!(data.company.linkedin_url.is_empty());
}

#[tokio::test]
async fn end_to_end_jsonld_with_company_site() {
    let fetcher = MockFetcher::new()
        .with_page(
            "https://jobs.example/7",
            r#"<html><head><script type="application/ld+json">
            {"@type": "JobPosting",
             "title": "Senior Backend Engineer",
             "hiringOrganization": {"@type": "Organization", "name": "Acme Corp", "url": "https://acme.example"}}
            </script></head><body></body></html>"#,
        )
        .with_page(
            "https://acme.example",
            r#"<html><head><meta name="description" content="Acme Corp builds industrial-grade rocketry and anvils."></head>
               <body>Founded in 1952. A manufacturing company headquartered in Phoenix, Arizona, USA.</body></html>"#,
        );

    let data = retriever("https://jobs.example/7").retrieve_with_fetcher(&fetcher).await;

    assert_eq!(data.job.title, "Senior Backend Engineer");
    assert_eq!(data.job.role_seniority, "senior");
    assert_eq!(data.company.name, "Acme Corp");
    assert_eq!(data.company.website, "https://acme.example");
    assert!(data
        .company
        .data_sources
        .contains(&"https://acme.example".to_string()));
    assert_eq!(data.company.founded_year, Some(1952));
}

#[tokio::test]
async fn end_to_end_unreachable_url_still_resolves() {
    let fetcher = MockFetcher::new();
    let data = retriever("https://dead.example/job").retrieve_with_fetcher(&fetcher).await;

    assert_eq!(data.job.source_url, "https://dead.example/job");
    assert_eq!(data.company, retrieval::Company::default());
    assert!(
        data.metadata
            .notes
            .iter()
            .any(|note| note.contains("failed") || note.contains("refused")),
        "notes must mention the failure: {:?}",
        data.metadata.notes
    );
}

#[tokio::test]
async fn end_to_end_salary_text_parsing() {
    let description = format!(
        "{} Compensation: $90,000 - $120,000 per year.",
        "Own our ingestion pipeline end to end. ".repeat(4)
    );
    let html = format!(
        r#"<html><body><h1>Data Engineer</h1><div class="job-description">{description}</div></body></html>"#
    );
    let fetcher = MockFetcher::new().with_page("https://jobs.example/8", html);
    let data = retriever("https://jobs.example/8").retrieve_with_fetcher(&fetcher).await;

    assert_eq!(data.job.salary.min, Some(90000.0));
    assert_eq!(data.job.salary.max, Some(120000.0));
    assert_eq!(data.job.salary.currency, "USD");
    assert_eq!(data.job.salary.period, "year");
}

#[tokio::test]
async fn salary_min_max_swapped() {
    let html = r#"<html><head><script type="application/ld+json">
        {"@type": "JobPosting", "title": "Engineer Title",
         "baseSalary": {"@type": "MonetaryAmount", "currency": "USD",
                        "value": {"minValue": 200000, "maxValue": 100000}}}
        </script></head><body></body></html>"#;
    let fetcher = MockFetcher::new().with_page("https://jobs.example/9", html);
    let data = retriever("https://jobs.example/9").retrieve_with_fetcher(&fetcher).await;

    assert_eq!(data.job.salary.min, Some(100000.0));
    assert_eq!(data.job.salary.max, Some(200000.0));
}
