use crate::config::Pacing;
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportMethod {
    File,
    Github,
    Url,
}

impl ImportMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportMethod::File => "file",
            ImportMethod::Github => "github",
            ImportMethod::Url => "url",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "file" => Some(ImportMethod::File),
            "github" => Some(ImportMethod::Github),
            "url" => Some(ImportMethod::Url),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ImportMethod::File => "Upload Files",
            ImportMethod::Github => "GitHub Repository",
            ImportMethod::Url => "URL Import",
        }
    }

    pub fn formats(&self) -> &'static str {
        match self {
            ImportMethod::File => "React, Vue, Svelte, HTML/CSS",
            ImportMethod::Github => "Public & Private repos",
            ImportMethod::Url => "Any public website",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessingStep {
    Uploading,
    Analyzing,
    Extracting,
    Generating,
    Complete,
}

impl ProcessingStep {
    pub const ALL: [ProcessingStep; 5] = [
        ProcessingStep::Uploading,
        ProcessingStep::Analyzing,
        ProcessingStep::Extracting,
        ProcessingStep::Generating,
        ProcessingStep::Complete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProcessingStep::Uploading => "Uploading code",
            ProcessingStep::Analyzing => "Analyzing structure",
            ProcessingStep::Extracting => "Extracting tokens",
            ProcessingStep::Generating => "Generating system",
            ProcessingStep::Complete => "Complete",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|step| step == self)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportRequest {
    pub method: ImportMethod,
    pub project_name: String,
    /// Repository or site address; never fetched.
    pub source: Option<String>,
}

/// Walks the processing steps with their fixed delay. Nothing is read or
/// written; the caller just lands on the overview afterwards.
pub fn run_import(
    request: &ImportRequest,
    pacing: &Pacing,
    mut on_step: impl FnMut(ProcessingStep),
) -> Route {
    tracing::info!(
        method = request.method.as_str(),
        project = %request.project_name,
        "starting import"
    );
    for step in ProcessingStep::ALL {
        on_step(step);
        tracing::debug!(step = step.label(), "import step");
        pacing.wait(pacing.import_step);
    }
    pacing.wait(pacing.import_redirect);
    Route::CreatorOverview { imported: true }
}
