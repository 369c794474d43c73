use crate::infra::{InMemoryChecklistRepository, InMemoryFolderRepository};
use clap::Args;
use loandesk::error::AppError;
use loandesk::workflows::filing::repository::DocumentOwner;
use loandesk::workflows::filing::{import_checklist_from_path, DocumentFilingService};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Filename to classify, e.g. "Passport_JohnSmith.pdf"
    pub(crate) file_name: String,
    /// Extracted text content to classify alongside the filename
    #[arg(long)]
    pub(crate) summary: Option<String>,
    /// Comma-separated extracted keywords
    #[arg(long)]
    pub(crate) keywords: Option<String>,
    /// Load checklist requirements from a CRM CSV export instead of the seed
    #[arg(long)]
    pub(crate) checklist: Option<PathBuf>,
    /// Classify as if a project were selected
    #[arg(long)]
    pub(crate) project: bool,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let checklists = match &args.checklist {
        Some(path) => {
            let items = import_checklist_from_path(path)?;
            Arc::new(InMemoryChecklistRepository::with_items(items))
        }
        None => Arc::new(InMemoryChecklistRepository::seeded()),
    };
    let folders = Arc::new(InMemoryFolderRepository::default());
    let service = DocumentFilingService::new(checklists, folders);

    let owner = if args.project {
        DocumentOwner::project("demo-client", "demo-project")
    } else {
        DocumentOwner::client("demo-client")
    };

    let keywords: Vec<String> = args
        .keywords
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let recommendation =
        service.classify_document(&owner, &args.file_name, args.summary.as_deref(), &keywords)?;

    println!("File:       {}", args.file_name);
    match &recommendation.file_type {
        Some(file_type) => println!("Type:       {file_type} ({:.0}%)", recommendation.confidence * 100.0),
        None => println!("Type:       unclassified"),
    }
    if let Some(category) = &recommendation.category {
        println!("Category:   {category}");
    }
    println!(
        "Folder:     {} ({})",
        recommendation.resolution.folder_type,
        recommendation.resolution.level.label()
    );
    if let Some(reason) = &recommendation.resolution.reason {
        println!("Note:       {reason}");
    }

    if recommendation.checklist_matches.is_empty() {
        println!("Checklist:  no plausible matches");
    } else {
        println!("Checklist:");
        for result in &recommendation.checklist_matches {
            println!(
                "  {:<28} {:.2}  {}",
                result.requirement_id.0, result.score, result.reason
            );
        }
    }

    Ok(())
}
