//! Fixture job listings served by `GET /api/jobs`.
//!
//! Stand-in data for a real backing store. The listing endpoint only ever
//! exposes active postings.

use super::{Job, JobType};

/// All postings, active or not.
pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Senior Full Stack Developer".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            location: "Buenos Aires, Argentina (Hybrid)".to_string(),
            job_type: JobType::FullTime,
            salary: Some("$50,000 - $70,000".to_string()),
            description: "Full stack developer to join our product team and own features end to end."
                .to_string(),
            requirements: vec![
                "5+ years of web development experience".to_string(),
                "Strong SQL and NoSQL database knowledge".to_string(),
                "Experience with Git and agile workflows".to_string(),
            ],
            responsibilities: vec![
                "Build and maintain web applications".to_string(),
                "Review code and mentor junior developers".to_string(),
                "Work with design and product on new features".to_string(),
            ],
            benefits: Some(vec![
                "Health insurance".to_string(),
                "Hybrid schedule".to_string(),
                "Performance bonus".to_string(),
            ]),
            posted_date: "2025-11-05".to_string(),
            application_deadline: Some("2025-12-05".to_string()),
            is_active: true,
        },
        Job {
            id: "2".to_string(),
            title: "UX/UI Designer".to_string(),
            company: "Creative Agency".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Remote,
            salary: Some("$35,000 - $50,000".to_string()),
            description: "Designer to craft accessible, consistent interfaces across our products."
                .to_string(),
            requirements: vec![
                "3+ years of UX/UI experience".to_string(),
                "Solid portfolio and design-system experience".to_string(),
            ],
            responsibilities: vec![
                "Produce wireframes and prototypes".to_string(),
                "Run user research sessions".to_string(),
                "Maintain the design system".to_string(),
            ],
            benefits: Some(vec![
                "Fully remote".to_string(),
                "Flexible hours".to_string(),
            ]),
            posted_date: "2025-11-08".to_string(),
            application_deadline: Some("2025-12-08".to_string()),
            is_active: true,
        },
        Job {
            id: "3".to_string(),
            title: "Data Analyst".to_string(),
            company: "Data Corp".to_string(),
            location: "Cordoba, Argentina".to_string(),
            job_type: JobType::FullTime,
            salary: Some("$40,000 - $55,000".to_string()),
            description: "Analyst to turn raw product data into dashboards and decisions."
                .to_string(),
            requirements: vec![
                "2+ years of data analysis".to_string(),
                "Advanced SQL, Python or R".to_string(),
                "Power BI or Tableau".to_string(),
            ],
            responsibilities: vec![
                "Build dashboards and reports".to_string(),
                "Identify trends and present findings".to_string(),
                "Automate recurring analyses".to_string(),
            ],
            benefits: None,
            posted_date: "2025-11-10".to_string(),
            application_deadline: Some("2025-12-10".to_string()),
            is_active: true,
        },
        Job {
            id: "4".to_string(),
            title: "Digital Marketing Manager".to_string(),
            company: "E-commerce Plus".to_string(),
            location: "Rosario, Argentina".to_string(),
            job_type: JobType::FullTime,
            salary: Some("$45,000 - $60,000".to_string()),
            description: "Lead the online growth strategy across paid and organic channels."
                .to_string(),
            requirements: vec![
                "4+ years in digital marketing".to_string(),
                "E-commerce and paid-ads experience".to_string(),
                "SEO/SEM and web analytics".to_string(),
            ],
            responsibilities: vec![
                "Own the digital marketing strategy".to_string(),
                "Manage advertising budgets".to_string(),
                "Track KPIs and optimize conversions".to_string(),
            ],
            benefits: Some(vec![
                "Results-based bonus".to_string(),
                "Life insurance".to_string(),
            ]),
            posted_date: "2025-11-07".to_string(),
            application_deadline: Some("2025-12-07".to_string()),
            is_active: true,
        },
        Job {
            id: "5".to_string(),
            title: "Junior Frontend Developer".to_string(),
            company: "StartupTech".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Remote,
            salary: Some("$25,000 - $35,000".to_string()),
            description: "Entry-level role for developers eager to grow on a small product team."
                .to_string(),
            requirements: vec![
                "1+ year of experience".to_string(),
                "HTML, CSS, JavaScript".to_string(),
                "Basic Git".to_string(),
            ],
            responsibilities: vec![
                "Build UI components".to_string(),
                "Implement responsive layouts".to_string(),
                "Take part in code reviews".to_string(),
            ],
            benefits: Some(vec![
                "Fully remote".to_string(),
                "Mentoring and paid courses".to_string(),
            ]),
            posted_date: "2025-11-09".to_string(),
            application_deadline: Some("2025-12-15".to_string()),
            is_active: true,
        },
        // Closed posting, filtered out of the listing endpoint.
        Job {
            id: "6".to_string(),
            title: "Product Manager".to_string(),
            company: "SaaS Company".to_string(),
            location: "Buenos Aires, Argentina".to_string(),
            job_type: JobType::FullTime,
            salary: Some("$60,000 - $80,000".to_string()),
            description: "Product manager to drive the roadmap for our SaaS platform.".to_string(),
            requirements: vec![
                "3+ years as a product manager".to_string(),
                "SaaS product experience".to_string(),
            ],
            responsibilities: vec![
                "Define the product roadmap".to_string(),
                "Prioritize features with stakeholders".to_string(),
            ],
            benefits: None,
            posted_date: "2025-11-06".to_string(),
            application_deadline: None,
            is_active: false,
        },
    ]
}

/// Active postings only, in listing order.
pub fn active_jobs() -> Vec<Job> {
    sample_jobs().into_iter().filter(|job| job.is_active).collect()
}
