//! Static classification tables: the pattern catalog, type and category
//! mappings, alias tables, and the starter folder vocabulary.
//!
//! These are data, not logic. Catalog ordering is load-bearing: the filename
//! classifier is first-match-wins, so more specific rules must be declared
//! before more general ones that could falsely substring-match (for example
//! "Share Charge" before "Shareholders Agreement", whose "sha" trigger would
//! otherwise fire on "share_charge_abc").

use super::domain::FolderLevel;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Stable machine identifiers for storage buckets, distinct from their
/// display names.
pub mod folder_keys {
    pub const KYC: &str = "kyc";
    pub const FINANCIALS: &str = "financials";
    pub const CORRESPONDENCE: &str = "correspondence";
    pub const MISCELLANEOUS: &str = "miscellaneous";
    pub const APPRAISALS: &str = "appraisals";
    pub const PLANS: &str = "plans";
    pub const LEGAL: &str = "legal";
    pub const CREDIT_SUBMISSION: &str = "credit_submission";
    pub const MONITORING: &str = "monitoring";
    pub const INSURANCE: &str = "insurance";
}

use folder_keys::*;

/// One catalog rule: any keyword found as a substring of a normalized
/// filename selects the rule. `weight` is consulted only by the content
/// classifier.
#[derive(Debug)]
pub struct DocumentTypePattern {
    pub keywords: &'static [&'static str],
    pub file_type: &'static str,
    pub category: &'static str,
    pub folder: &'static str,
    pub weight: u32,
}

/// The authored-order pattern catalog. Immutable for the process lifetime.
pub fn document_type_patterns() -> &'static [DocumentTypePattern] {
    PATTERNS
}

static PATTERNS: &[DocumentTypePattern] = &[
    // Identity
    DocumentTypePattern {
        keywords: &["passport"],
        file_type: "Passport",
        category: "Identity",
        folder: KYC,
        weight: 10,
    },
    DocumentTypePattern {
        keywords: &["driving licence", "driving license", "drivers license"],
        file_type: "Driving Licence",
        category: "Identity",
        folder: KYC,
        weight: 10,
    },
    DocumentTypePattern {
        keywords: &["residence permit", "biometric residence"],
        file_type: "Residence Permit",
        category: "Identity",
        folder: KYC,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["proof of id", "certified id", "identity document"],
        file_type: "Proof of ID",
        category: "Identity",
        folder: KYC,
        weight: 8,
    },
    // Address
    DocumentTypePattern {
        keywords: &["utility bill"],
        file_type: "Utility Bill",
        category: "Address",
        folder: KYC,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["council tax"],
        file_type: "Council Tax Bill",
        category: "Address",
        folder: KYC,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["proof of address"],
        file_type: "Proof of Address",
        category: "Address",
        folder: KYC,
        weight: 8,
    },
    // Corporate
    DocumentTypePattern {
        keywords: &["certificate of incorporation", "incorporation certificate"],
        file_type: "Certificate of Incorporation",
        category: "Corporate",
        folder: KYC,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["articles of association"],
        file_type: "Articles of Association",
        category: "Corporate",
        folder: KYC,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["group structure", "structure chart"],
        file_type: "Group Structure Chart",
        category: "Corporate",
        folder: KYC,
        weight: 8,
    },
    // Financial
    DocumentTypePattern {
        keywords: &["bank statement"],
        file_type: "Bank Statement",
        category: "Financial",
        folder: FINANCIALS,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["management accounts"],
        file_type: "Management Accounts",
        category: "Financial",
        folder: FINANCIALS,
        weight: 10,
    },
    DocumentTypePattern {
        keywords: &[
            "audited accounts",
            "annual accounts",
            "statutory accounts",
            "financial statements",
        ],
        file_type: "Financial Statements",
        category: "Financial",
        folder: FINANCIALS,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["tax return", "sa302", "tax computation"],
        file_type: "Tax Return",
        category: "Financial",
        folder: FINANCIALS,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["cash flow forecast", "cashflow forecast", "cash flow projection"],
        file_type: "Cash Flow Forecast",
        category: "Financial",
        folder: FINANCIALS,
        weight: 8,
    },
    DocumentTypePattern {
        keywords: &["asset and liability", "assets and liabilities", "net worth statement"],
        file_type: "Asset & Liability Statement",
        category: "Financial",
        folder: FINANCIALS,
        weight: 8,
    },
    DocumentTypePattern {
        keywords: &["credit report", "credit check", "credit search"],
        file_type: "Credit Report",
        category: "Financial",
        folder: FINANCIALS,
        weight: 7,
    },
    // Valuation. "development appraisal" and "reinstatement cost" must sit
    // ahead of the bare "valuation"/"appraisal" triggers.
    DocumentTypePattern {
        keywords: &["development appraisal", "residual appraisal"],
        file_type: "Development Appraisal",
        category: "Valuation",
        folder: APPRAISALS,
        weight: 10,
    },
    DocumentTypePattern {
        keywords: &["reinstatement cost", "insurance valuation"],
        file_type: "Reinstatement Cost Assessment",
        category: "Insurance",
        folder: INSURANCE,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["red book"],
        file_type: "Red Book Valuation",
        category: "Valuation",
        folder: APPRAISALS,
        weight: 10,
    },
    DocumentTypePattern {
        keywords: &["valuation report", "valuation"],
        file_type: "Valuation Report",
        category: "Valuation",
        folder: APPRAISALS,
        weight: 8,
    },
    DocumentTypePattern {
        keywords: &["appraisal report", "appraisal"],
        file_type: "Appraisal",
        category: "Valuation",
        folder: APPRAISALS,
        weight: 8,
    },
    // Plans & planning
    DocumentTypePattern {
        keywords: &["planning permission", "planning consent", "decision notice"],
        file_type: "Planning Permission",
        category: "Plans & Planning",
        folder: PLANS,
        weight: 10,
    },
    DocumentTypePattern {
        keywords: &["building regulations", "building regs"],
        file_type: "Building Regulations Approval",
        category: "Plans & Planning",
        folder: PLANS,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["schedule of works", "scope of works"],
        file_type: "Schedule of Works",
        category: "Plans & Planning",
        folder: PLANS,
        weight: 8,
    },
    DocumentTypePattern {
        keywords: &["structural survey", "structural report"],
        file_type: "Structural Survey",
        category: "Plans & Planning",
        folder: PLANS,
        weight: 8,
    },
    DocumentTypePattern {
        keywords: &["asbestos"],
        file_type: "Asbestos Survey",
        category: "Plans & Planning",
        folder: PLANS,
        weight: 8,
    },
    DocumentTypePattern {
        keywords: &["floor plan", "site plan", "elevation drawing", "architect drawing"],
        file_type: "Drawings",
        category: "Plans & Planning",
        folder: PLANS,
        weight: 7,
    },
    // Legal & security. "share charge" strictly before the "sha" shorthand.
    DocumentTypePattern {
        keywords: &["share charge"],
        file_type: "Share Charge",
        category: "Legal",
        folder: LEGAL,
        weight: 10,
    },
    DocumentTypePattern {
        keywords: &["shareholders agreement", "sha"],
        file_type: "Shareholders Agreement",
        category: "Legal",
        folder: LEGAL,
        weight: 8,
    },
    DocumentTypePattern {
        keywords: &["personal guarantee", "deed of guarantee"],
        file_type: "Personal Guarantee",
        category: "Legal",
        folder: LEGAL,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["debenture"],
        file_type: "Debenture",
        category: "Legal",
        folder: LEGAL,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["legal charge", "first charge", "second charge"],
        file_type: "Legal Charge",
        category: "Legal",
        folder: LEGAL,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["facility agreement", "facility letter", "loan agreement"],
        file_type: "Facility Agreement",
        category: "Legal",
        folder: LEGAL,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["title deed", "title register", "official copy"],
        file_type: "Title Deeds",
        category: "Legal",
        folder: LEGAL,
        weight: 8,
    },
    DocumentTypePattern {
        keywords: &["lease agreement", "tenancy agreement", "occupational lease"],
        file_type: "Lease Agreement",
        category: "Legal",
        folder: LEGAL,
        weight: 7,
    },
    // Credit
    DocumentTypePattern {
        keywords: &["credit submission", "credit paper"],
        file_type: "Credit Submission",
        category: "Credit",
        folder: CREDIT_SUBMISSION,
        weight: 10,
    },
    DocumentTypePattern {
        keywords: &["term sheet", "heads of terms", "indicative terms"],
        file_type: "Term Sheet",
        category: "Credit",
        folder: CREDIT_SUBMISSION,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["offer letter", "facility offer"],
        file_type: "Offer Letter",
        category: "Credit",
        folder: CREDIT_SUBMISSION,
        weight: 8,
    },
    // Monitoring
    DocumentTypePattern {
        keywords: &["monitoring report", "monitoring surveyor", "initial monitoring"],
        file_type: "Monitoring Report",
        category: "Monitoring",
        folder: MONITORING,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["quantity surveyor", "qs report"],
        file_type: "QS Report",
        category: "Monitoring",
        folder: MONITORING,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["drawdown request", "drawdown notice"],
        file_type: "Drawdown Request",
        category: "Monitoring",
        folder: MONITORING,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["progress report", "site progress"],
        file_type: "Progress Report",
        category: "Monitoring",
        folder: MONITORING,
        weight: 7,
    },
    // Insurance. Named lines ahead of the generic policy trigger.
    DocumentTypePattern {
        keywords: &["contractors all risk", "contractor all risk"],
        file_type: "Contractors All Risks Policy",
        category: "Insurance",
        folder: INSURANCE,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["buildings insurance", "building insurance"],
        file_type: "Buildings Insurance",
        category: "Insurance",
        folder: INSURANCE,
        weight: 9,
    },
    DocumentTypePattern {
        keywords: &["insurance policy", "policy schedule", "insurance schedule"],
        file_type: "Insurance Policy",
        category: "Insurance",
        folder: INSURANCE,
        weight: 8,
    },
];

/// Canonical type assignment: category plus resolved folder and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeAssignment {
    pub category: &'static str,
    pub folder: &'static str,
    pub level: FolderLevel,
}

static TYPE_ASSIGNMENTS: OnceLock<HashMap<&'static str, TypeAssignment>> = OnceLock::new();

/// Look up the category/folder/level for a canonical document type.
pub fn assignment_for_type(file_type: &str) -> Option<TypeAssignment> {
    type_assignment_map().get(file_type).copied()
}

fn type_assignment_map() -> &'static HashMap<&'static str, TypeAssignment> {
    TYPE_ASSIGNMENTS.get_or_init(|| {
        let mut map = HashMap::new();
        for (file_type, category) in TYPE_CATEGORIES {
            let (folder, level) =
                folder_for_category(category).unwrap_or((MISCELLANEOUS, FolderLevel::Client));
            map.insert(
                *file_type,
                TypeAssignment {
                    category,
                    folder,
                    level,
                },
            );
        }
        map
    })
}

// Every file_type the catalog can produce must appear here.
static TYPE_CATEGORIES: &[(&str, &str)] = &[
    ("Passport", "Identity"),
    ("Driving Licence", "Identity"),
    ("Residence Permit", "Identity"),
    ("Proof of ID", "Identity"),
    ("Utility Bill", "Address"),
    ("Council Tax Bill", "Address"),
    ("Proof of Address", "Address"),
    ("Certificate of Incorporation", "Corporate"),
    ("Articles of Association", "Corporate"),
    ("Group Structure Chart", "Corporate"),
    ("Bank Statement", "Financial"),
    ("Management Accounts", "Financial"),
    ("Financial Statements", "Financial"),
    ("Tax Return", "Financial"),
    ("Cash Flow Forecast", "Financial"),
    ("Asset & Liability Statement", "Financial"),
    ("Credit Report", "Financial"),
    ("Development Appraisal", "Valuation"),
    ("Reinstatement Cost Assessment", "Insurance"),
    ("Red Book Valuation", "Valuation"),
    ("Valuation Report", "Valuation"),
    ("Appraisal", "Valuation"),
    ("Planning Permission", "Plans & Planning"),
    ("Building Regulations Approval", "Plans & Planning"),
    ("Schedule of Works", "Plans & Planning"),
    ("Structural Survey", "Plans & Planning"),
    ("Asbestos Survey", "Plans & Planning"),
    ("Drawings", "Plans & Planning"),
    ("Share Charge", "Legal"),
    ("Shareholders Agreement", "Legal"),
    ("Personal Guarantee", "Legal"),
    ("Debenture", "Legal"),
    ("Legal Charge", "Legal"),
    ("Facility Agreement", "Legal"),
    ("Title Deeds", "Legal"),
    ("Lease Agreement", "Legal"),
    ("Credit Submission", "Credit"),
    ("Term Sheet", "Credit"),
    ("Offer Letter", "Credit"),
    ("Monitoring Report", "Monitoring"),
    ("QS Report", "Monitoring"),
    ("Drawdown Request", "Monitoring"),
    ("Progress Report", "Monitoring"),
    ("Contractors All Risks Policy", "Insurance"),
    ("Buildings Insurance", "Insurance"),
    ("Insurance Policy", "Insurance"),
];

/// Category to folder placement for canonical categories.
pub fn folder_for_category(category: &str) -> Option<(&'static str, FolderLevel)> {
    CATEGORY_FOLDERS
        .iter()
        .find(|(name, _, _)| *name == category)
        .map(|(_, folder, level)| (*folder, *level))
}

static CATEGORY_FOLDERS: &[(&str, &str, FolderLevel)] = &[
    ("Identity", KYC, FolderLevel::Client),
    ("Address", KYC, FolderLevel::Client),
    ("Corporate", KYC, FolderLevel::Client),
    ("Financial", FINANCIALS, FolderLevel::Client),
    ("Valuation", APPRAISALS, FolderLevel::Project),
    ("Plans & Planning", PLANS, FolderLevel::Project),
    ("Legal", LEGAL, FolderLevel::Project),
    ("Credit", CREDIT_SUBMISSION, FolderLevel::Project),
    ("Monitoring", MONITORING, FolderLevel::Project),
    ("Insurance", INSURANCE, FolderLevel::Project),
    ("Other", MISCELLANEOUS, FolderLevel::Client),
];

/// Free-text category alias: maps arbitrary category labels to a placement
/// when no canonical type is known.
#[derive(Debug)]
pub struct CategoryAlias {
    pub alias: &'static str,
    pub level: FolderLevel,
    pub folder_type: &'static str,
}

pub fn category_aliases() -> &'static [CategoryAlias] {
    CATEGORY_ALIASES
}

static CATEGORY_ALIASES: &[CategoryAlias] = &[
    CategoryAlias { alias: "kyc", level: FolderLevel::Client, folder_type: KYC },
    CategoryAlias { alias: "identity", level: FolderLevel::Client, folder_type: KYC },
    CategoryAlias { alias: "identification", level: FolderLevel::Client, folder_type: KYC },
    CategoryAlias { alias: "proof of id", level: FolderLevel::Client, folder_type: KYC },
    CategoryAlias { alias: "address", level: FolderLevel::Client, folder_type: KYC },
    CategoryAlias { alias: "corporate", level: FolderLevel::Client, folder_type: KYC },
    CategoryAlias { alias: "company documents", level: FolderLevel::Client, folder_type: KYC },
    CategoryAlias { alias: "financial", level: FolderLevel::Client, folder_type: FINANCIALS },
    CategoryAlias { alias: "financials", level: FolderLevel::Client, folder_type: FINANCIALS },
    CategoryAlias { alias: "accounts", level: FolderLevel::Client, folder_type: FINANCIALS },
    CategoryAlias { alias: "bank statements", level: FolderLevel::Client, folder_type: FINANCIALS },
    CategoryAlias { alias: "correspondence", level: FolderLevel::Client, folder_type: CORRESPONDENCE },
    CategoryAlias { alias: "emails", level: FolderLevel::Client, folder_type: CORRESPONDENCE },
    CategoryAlias { alias: "valuation", level: FolderLevel::Project, folder_type: APPRAISALS },
    CategoryAlias { alias: "appraisals", level: FolderLevel::Project, folder_type: APPRAISALS },
    CategoryAlias { alias: "appraisal", level: FolderLevel::Project, folder_type: APPRAISALS },
    CategoryAlias { alias: "red book", level: FolderLevel::Project, folder_type: APPRAISALS },
    CategoryAlias { alias: "plans", level: FolderLevel::Project, folder_type: PLANS },
    CategoryAlias { alias: "planning", level: FolderLevel::Project, folder_type: PLANS },
    CategoryAlias { alias: "drawings", level: FolderLevel::Project, folder_type: PLANS },
    CategoryAlias { alias: "legal", level: FolderLevel::Project, folder_type: LEGAL },
    CategoryAlias { alias: "security documents", level: FolderLevel::Project, folder_type: LEGAL },
    CategoryAlias { alias: "security", level: FolderLevel::Project, folder_type: LEGAL },
    CategoryAlias { alias: "credit submission", level: FolderLevel::Project, folder_type: CREDIT_SUBMISSION },
    CategoryAlias { alias: "credit", level: FolderLevel::Project, folder_type: CREDIT_SUBMISSION },
    CategoryAlias { alias: "underwriting", level: FolderLevel::Project, folder_type: CREDIT_SUBMISSION },
    CategoryAlias { alias: "monitoring", level: FolderLevel::Project, folder_type: MONITORING },
    CategoryAlias { alias: "insurance", level: FolderLevel::Project, folder_type: INSURANCE },
    CategoryAlias { alias: "miscellaneous", level: FolderLevel::Client, folder_type: MISCELLANEOUS },
    CategoryAlias { alias: "misc", level: FolderLevel::Client, folder_type: MISCELLANEOUS },
    CategoryAlias { alias: "other", level: FolderLevel::Client, folder_type: MISCELLANEOUS },
];

/// Canonical type to the checklist requirement ids it typically satisfies,
/// used to prefill content-classification decisions.
pub fn checklist_ids_for_type(file_type: &str) -> &'static [&'static str] {
    CHECKLIST_HINTS
        .iter()
        .find(|(name, _)| *name == file_type)
        .map(|(_, ids)| *ids)
        .unwrap_or(&[])
}

static CHECKLIST_HINTS: &[(&str, &[&str])] = &[
    ("Passport", &["kyc-proof-of-id"]),
    ("Driving Licence", &["kyc-proof-of-id", "kyc-proof-of-address"]),
    ("Residence Permit", &["kyc-proof-of-id"]),
    ("Proof of ID", &["kyc-proof-of-id"]),
    ("Utility Bill", &["kyc-proof-of-address"]),
    ("Council Tax Bill", &["kyc-proof-of-address"]),
    ("Proof of Address", &["kyc-proof-of-address"]),
    ("Bank Statement", &["fin-bank-statements"]),
    ("Financial Statements", &["fin-annual-accounts"]),
    ("Management Accounts", &["fin-management-accounts"]),
    ("Tax Return", &["fin-tax-returns"]),
    ("Red Book Valuation", &["val-red-book"]),
    ("Valuation Report", &["val-red-book"]),
    ("Appraisal", &["val-red-book"]),
    ("Planning Permission", &["plan-permission"]),
    ("Facility Agreement", &["leg-facility-agreement"]),
    ("Personal Guarantee", &["leg-personal-guarantee"]),
    ("Buildings Insurance", &["ins-buildings-policy"]),
    ("Insurance Policy", &["ins-buildings-policy"]),
];

/// Semantic filename-alias pattern consulted by the checklist matcher's
/// third tier.
#[derive(Debug)]
pub struct FilenameAliasPattern {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
}

pub fn filename_alias_patterns() -> &'static [FilenameAliasPattern] {
    FILENAME_ALIAS_PATTERNS
}

static FILENAME_ALIAS_PATTERNS: &[FilenameAliasPattern] = &[
    FilenameAliasPattern {
        key: "proof of address",
        aliases: &["utility bill", "council tax", "bank statement", "tenancy agreement"],
    },
    FilenameAliasPattern {
        key: "proof of id",
        aliases: &["passport", "driving licence", "drivers license", "identity card"],
    },
    FilenameAliasPattern {
        key: "bank statement",
        aliases: &["bank statement", "account statement"],
    },
    FilenameAliasPattern {
        key: "valuation report",
        aliases: &["valuation", "red book", "appraisal"],
    },
    FilenameAliasPattern {
        key: "planning permission",
        aliases: &["planning", "decision notice"],
    },
    FilenameAliasPattern {
        key: "insurance policy",
        aliases: &["insurance", "policy schedule"],
    },
    FilenameAliasPattern {
        key: "annual accounts",
        aliases: &["accounts", "financial statements"],
    },
];

/// Display-named starter folder created for every new client or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub level: FolderLevel,
}

pub fn starter_folder_templates(level: FolderLevel) -> &'static [FolderTemplate] {
    match level {
        FolderLevel::Client => CLIENT_FOLDERS,
        FolderLevel::Project => PROJECT_FOLDERS,
    }
}

static CLIENT_FOLDERS: &[FolderTemplate] = &[
    FolderTemplate { key: KYC, name: "KYC", level: FolderLevel::Client },
    FolderTemplate { key: FINANCIALS, name: "Financials", level: FolderLevel::Client },
    FolderTemplate { key: CORRESPONDENCE, name: "Correspondence", level: FolderLevel::Client },
    FolderTemplate { key: MISCELLANEOUS, name: "Miscellaneous", level: FolderLevel::Client },
];

static PROJECT_FOLDERS: &[FolderTemplate] = &[
    FolderTemplate { key: APPRAISALS, name: "Appraisals", level: FolderLevel::Project },
    FolderTemplate { key: PLANS, name: "Plans & Drawings", level: FolderLevel::Project },
    FolderTemplate { key: LEGAL, name: "Legal & Security", level: FolderLevel::Project },
    FolderTemplate { key: CREDIT_SUBMISSION, name: "Credit Submission", level: FolderLevel::Project },
    FolderTemplate { key: MONITORING, name: "Monitoring", level: FolderLevel::Project },
    FolderTemplate { key: INSURANCE, name: "Insurance", level: FolderLevel::Project },
];
