//! Keyword tables for document type detection

use shared_types::DocumentCategory;

pub const NDA_KEYWORDS: &[&str] = &["confidentiality", "non-disclosure", "recipient", "party"];

pub const EMPLOYMENT_KEYWORDS: &[&str] =
    &["employee", "employer", "salary", "benefits", "termination"];

pub const LEASE_KEYWORDS: &[&str] = &["tenant", "landlord", "premises", "rent", "lease"];

pub const CONSULTING_KEYWORDS: &[&str] = &["consultant", "contractor", "consulting services"];

pub const SERVICE_KEYWORDS: &[&str] = &["service", "deliverables", "statement of work", "client"];

pub const LICENSE_KEYWORDS: &[&str] = &[
    "license",
    "intellectual property",
    "software",
    "licensor",
    "licensee",
];

/// Categories with their keyword lists. Order here is the deterministic
/// tie-break order: the first-declared category wins an equal score.
pub const CATEGORY_KEYWORDS: &[(DocumentCategory, &[&str])] = &[
    (DocumentCategory::Nda, NDA_KEYWORDS),
    (DocumentCategory::Employment, EMPLOYMENT_KEYWORDS),
    (DocumentCategory::Lease, LEASE_KEYWORDS),
    (DocumentCategory::Consulting, CONSULTING_KEYWORDS),
    (DocumentCategory::Service, SERVICE_KEYWORDS),
    (DocumentCategory::License, LICENSE_KEYWORDS),
    (DocumentCategory::General, &[]),
];
