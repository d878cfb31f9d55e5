//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use makalah_ast::{
    ContentTree, EducationLevel, GenerationMode, LanguageStyle, PaperMetadata,
};
use makalah_core::{
    render_html, render_outline, render_text, validate_metadata, PaperSession,
};
use makalah_ooxml::{export, read_paragraphs};
use makalah_oracle::{ContentOracle, FixtureOracle, GeminiOracle};

use crate::config::{starter_config_toml, Settings, CONFIG_FILE_NAME};

/// Output format for `inspect`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

/// Output format for `preview`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PreviewFormat {
    /// Standalone HTML page, printable from the browser
    #[default]
    Html,
    /// Plain text
    Text,
    /// Table of contents only
    Outline,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Smp,
    Sma,
    Mahasiswa,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Formal,
    SemiFormal,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Quick,
    Deep,
}

impl From<LevelArg> for EducationLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Smp => EducationLevel::Smp,
            LevelArg::Sma => EducationLevel::Sma,
            LevelArg::Mahasiswa => EducationLevel::Mahasiswa,
        }
    }
}

impl From<StyleArg> for LanguageStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Formal => LanguageStyle::Formal,
            StyleArg::SemiFormal => LanguageStyle::SemiFormal,
        }
    }
}

impl From<ModeArg> for GenerationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Quick => GenerationMode::Quick,
            ModeArg::Deep => GenerationMode::Deep,
        }
    }
}

#[derive(Parser)]
#[command(name = "makalah")]
#[command(author, version, about = "Academic paper generator for Indonesian students", long_about = None)]
struct Cli {
    /// Configuration file (default: ./makalah.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a paper with the content oracle and export it as DOCX
    Generate(GenerateArgs),

    /// Export a paper from saved metadata and content
    Render {
        /// Metadata file (.toml or .json)
        metadata: PathBuf,

        /// Content tree JSON file
        content: PathBuf,

        /// Output DOCX file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Preview a paper as HTML or text
    Preview {
        /// Metadata file (.toml or .json)
        metadata: PathBuf,

        /// Content tree JSON file
        content: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: PreviewFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the paragraphs of a generated DOCX
    Inspect {
        /// Input DOCX file
        input: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a starter makalah.toml and paper.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

/// Arguments of the `generate` command
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Metadata file (.toml or .json); flags below override its fields
    #[arg(short, long)]
    pub metadata: Option<PathBuf>,

    /// Paper title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Author name
    #[arg(short, long)]
    pub author: Option<String>,

    #[arg(long)]
    pub institution: Option<String>,

    /// Course name
    #[arg(long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub lecturer: Option<String>,

    /// Academic year, e.g. 2024/2025
    #[arg(long)]
    pub academic_year: Option<String>,

    /// Estimated length in pages
    #[arg(long)]
    pub pages: Option<u32>,

    #[arg(long, value_enum)]
    pub level: Option<LevelArg>,

    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    #[arg(long)]
    pub no_preface: bool,

    #[arg(long)]
    pub no_closing: bool,

    #[arg(long)]
    pub no_bibliography: bool,

    /// Use a saved content tree instead of calling the oracle
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Output DOCX file or directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save the oracle's content tree as JSON
    #[arg(long)]
    pub save_content: Option<PathBuf>,

    /// Also write an HTML preview
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Generate(args) => {
            generate_command(&args, config)?;
        }
        Commands::Render {
            metadata,
            content,
            output,
        } => {
            render_command(&metadata, &content, output.as_deref(), config)?;
        }
        Commands::Preview {
            metadata,
            content,
            format,
            output,
        } => {
            preview_command(&metadata, &content, format, output.as_deref(), config)?;
        }
        Commands::Inspect { input, format } => {
            inspect_command(&input, format)?;
        }
        Commands::Init { dir, force } => {
            init_command(&dir, force)?;
        }
    }

    Ok(())
}

/// Execute the generate command, returning the written DOCX path
pub fn generate_command(args: &GenerateArgs, config: Option<&Path>) -> Result<PathBuf> {
    println!("makalah v{}", makalah_core::VERSION);

    let settings = Settings::load(config).context("Failed to load configuration")?;
    let metadata = metadata_from_args(args)?;
    validate_metadata(&metadata).context("Invalid paper metadata")?;
    println!("Generating: {}", metadata.title);

    let oracle: Box<dyn ContentOracle> = match &args.content {
        Some(path) => Box::new(
            FixtureOracle::load(path)
                .with_context(|| format!("Failed to load content: {}", path.display()))?,
        ),
        None => Box::new(
            GeminiOracle::new(settings.oracle.clone())
                .context("Failed to set up the content oracle")?,
        ),
    };

    let session = PaperSession::new();
    let cycle = session
        .try_begin()
        .context("A generation is already in progress")?;

    println!("  Requesting content ({})...", oracle.name());
    tracing::info!(oracle = oracle.name(), mode = ?metadata.mode, "requesting content");
    let content = oracle.generate(&metadata).map_err(|e| {
        tracing::warn!(kind = e.kind(), "content oracle failed");
        anyhow::Error::new(e).context("Failed to generate paper content")
    })?;
    println!(
        "    {} chapters, {} sub-chapters",
        content.chapters.len(),
        content.sub_chapter_count()
    );

    if let Some(path) = &args.save_content {
        let json = serde_json::to_string_pretty(&content)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write content: {}", path.display()))?;
        println!("  Saved content: {}", path.display());
    }

    let paper = cycle.commit(metadata, content);
    println!("  Assembled {} blocks", paper.document.len());

    if let Some(path) = &args.preview {
        write_html_preview(&paper.document, &settings, path)?;
    }

    let output_path = write_docx(&paper.document, &settings, args.output.as_deref())?;

    println!();
    println!("Generate complete!");
    println!("  Output: {}", output_path.display());
    Ok(output_path)
}

/// Execute the render command, returning the written DOCX path
pub fn render_command(
    metadata: &Path,
    content: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<PathBuf> {
    println!("makalah v{}", makalah_core::VERSION);
    println!("Rendering: {}", content.display());

    let settings = Settings::load(config).context("Failed to load configuration")?;
    let (metadata, content) = load_paper(metadata, content)?;

    let doc = makalah_core::assemble(&metadata, &content);
    println!("  Assembled {} blocks", doc.len());

    let output_path = write_docx(&doc, &settings, output)?;

    println!();
    println!("Render complete!");
    println!("  Output: {}", output_path.display());
    Ok(output_path)
}

/// Execute the preview command
pub fn preview_command(
    metadata: &Path,
    content: &Path,
    format: PreviewFormat,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<()> {
    let settings = Settings::load(config).context("Failed to load configuration")?;
    let (metadata, content) = load_paper(metadata, content)?;
    let doc = makalah_core::assemble(&metadata, &content);

    let rendered = match format {
        PreviewFormat::Html => render_html(&doc, &settings.style),
        PreviewFormat::Text => render_text(&doc),
        PreviewFormat::Outline => render_outline(&doc),
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write preview: {}", path.display()))?;
            println!("Preview written: {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Execute the inspect command
pub fn inspect_command(input: &Path, format: OutputFormat) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read file: {}", input.display()))?;
    let paragraphs = read_paragraphs(&bytes)
        .with_context(|| format!("Failed to read DOCX: {}", input.display()))?;

    match format {
        OutputFormat::Text => {
            println!("{}: {} paragraphs", input.display(), paragraphs.len());
            for (i, para) in paragraphs.iter().enumerate() {
                if para.page_break {
                    println!("{:>4}  --- page break ---", i);
                } else {
                    println!(
                        "{:>4}  [{}] {}",
                        i,
                        para.style.as_deref().unwrap_or("-"),
                        para.text.replace('\n', " / ")
                    );
                }
            }
        }
        OutputFormat::Json => {
            let items: Vec<_> = paragraphs
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "text": p.text,
                        "style": p.style,
                        "pageBreak": p.page_break,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }
    Ok(())
}

/// Execute the init command
pub fn init_command(dir: &Path, force: bool) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let files = [
        (CONFIG_FILE_NAME, starter_config_toml()),
        ("paper.toml", starter_paper_toml()?),
    ];
    for (name, contents) in files {
        let path = dir.join(name);
        if path.exists() && !force {
            println!("  Skipping existing {} (use --force to overwrite)", path.display());
            continue;
        }
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  Created {}", path.display());
    }
    Ok(())
}

/// Load a metadata file, TOML or JSON by extension
pub fn load_metadata(path: &Path) -> Result<PaperMetadata> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse metadata: {}", path.display()))
    } else {
        toml::from_str(&text).with_context(|| format!("Failed to parse metadata: {}", path.display()))
    }
}

fn load_content(path: &Path) -> Result<ContentTree> {
    let oracle = FixtureOracle::load(path)
        .with_context(|| format!("Failed to load content: {}", path.display()))?;
    Ok(oracle.content().clone())
}

fn load_paper(metadata: &Path, content: &Path) -> Result<(PaperMetadata, ContentTree)> {
    Ok((load_metadata(metadata)?, load_content(content)?))
}

/// Build metadata from an optional file plus flag overrides
fn metadata_from_args(args: &GenerateArgs) -> Result<PaperMetadata> {
    let mut meta = match &args.metadata {
        Some(path) => load_metadata(path)?,
        None => PaperMetadata::default(),
    };

    if let Some(title) = &args.title {
        meta.title = title.clone();
    }
    if let Some(author) = &args.author {
        meta.author = author.clone();
    }
    if let Some(institution) = &args.institution {
        meta.institution = institution.clone();
    }
    if let Some(subject) = &args.subject {
        meta.subject = subject.clone();
    }
    if let Some(lecturer) = &args.lecturer {
        meta.lecturer = Some(lecturer.clone());
    }
    if let Some(year) = &args.academic_year {
        meta.academic_year = year.clone();
    }
    if let Some(pages) = args.pages {
        meta.estimated_pages = pages;
    }
    if let Some(level) = args.level {
        meta.education_level = level.into();
    }
    if let Some(style) = args.style {
        meta.language_style = style.into();
    }
    if let Some(mode) = args.mode {
        meta.mode = mode.into();
    }
    if args.no_preface {
        meta.include_preface = false;
    }
    if args.no_closing {
        meta.include_closing = false;
    }
    if args.no_bibliography {
        meta.include_bibliography = false;
    }
    Ok(meta)
}

fn write_docx(
    doc: &makalah_ast::AssembledDocument,
    settings: &Settings,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let file = export(doc, &settings.style, &doc.title).context("Failed to export DOCX")?;
    let output_path = match output {
        Some(p) if p.is_dir() => p.join(&file.filename),
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(&file.filename),
    };

    println!("  Writing: {}", output_path.display());
    fs::write(&output_path, &file.bytes)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
    println!("  Size: {} bytes", file.bytes.len());
    tracing::info!(path = %output_path.display(), bytes = file.bytes.len(), "docx written");
    Ok(output_path)
}

fn write_html_preview(
    doc: &makalah_ast::AssembledDocument,
    settings: &Settings,
    path: &Path,
) -> Result<()> {
    let html = render_html(doc, &settings.style);
    fs::write(path, html)
        .with_context(|| format!("Failed to write preview: {}", path.display()))?;
    println!("  Preview: {}", path.display());
    Ok(())
}

fn starter_paper_toml() -> Result<String> {
    let example = PaperMetadata::new("Judul Makalah", "Nama Penulis")
        .with_institution("Nama Institusi")
        .with_subject("Mata Kuliah")
        .with_lecturer("Nama Dosen")
        .with_academic_year("2024/2025");
    let body = toml::to_string_pretty(&example).context("Failed to serialize metadata")?;
    Ok(format!("# makalah paper metadata\n\n{}", body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate_flags() {
        let args = vec![
            "makalah",
            "generate",
            "--title",
            "Dampak Urbanisasi",
            "--author",
            "Budi",
            "--level",
            "sma",
            "--mode",
            "deep",
            "--no-preface",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Generate(args) => {
                let meta = metadata_from_args(&args).unwrap();
                assert_eq!(meta.title, "Dampak Urbanisasi");
                assert_eq!(meta.education_level, EducationLevel::Sma);
                assert_eq!(meta.mode, GenerationMode::Deep);
                assert!(!meta.include_preface);
                assert!(meta.include_closing);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_parse_render() {
        let args = vec![
            "makalah",
            "render",
            "paper.toml",
            "content.json",
            "--output",
            "out.docx",
            "--config",
            "custom.toml",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));

        match cli.command {
            Commands::Render {
                metadata,
                content,
                output,
            } => {
                assert_eq!(metadata, PathBuf::from("paper.toml"));
                assert_eq!(content, PathBuf::from("content.json"));
                assert_eq!(output, Some(PathBuf::from("out.docx")));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_parse_preview_default_format() {
        let args = vec!["makalah", "preview", "paper.toml", "content.json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Preview { format, output, .. } => {
                assert!(matches!(format, PreviewFormat::Html));
                assert!(output.is_none());
            }
            _ => panic!("Expected Preview command"),
        }
    }

    #[test]
    fn test_cli_parse_inspect_json() {
        let args = vec!["makalah", "inspect", "paper.docx", "--format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Inspect { input, format } => {
                assert_eq!(input, PathBuf::from("paper.docx"));
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_cli_parse_init_default_dir() {
        let cli = Cli::try_parse_from(vec!["makalah", "init"]).unwrap();
        match cli.command {
            Commands::Init { dir, force } => {
                assert_eq!(dir, PathBuf::from("."));
                assert!(!force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_flags_override_metadata_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.json");
        fs::write(
            &path,
            r#"{"title":"Dari Berkas","author":"Siti","estimatedPages":12}"#,
        )
        .unwrap();

        let args = GenerateArgs {
            metadata: Some(path),
            title: Some("Dari Flag".into()),
            ..Default::default()
        };
        let meta = metadata_from_args(&args).unwrap();
        assert_eq!(meta.title, "Dari Flag");
        assert_eq!(meta.author, "Siti");
        assert_eq!(meta.estimated_pages, 12);
    }

    #[test]
    fn test_starter_paper_toml_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.toml");
        fs::write(&path, starter_paper_toml().unwrap()).unwrap();
        let meta = load_metadata(&path).unwrap();
        assert_eq!(meta.title, "Judul Makalah");
        assert_eq!(meta.lecturer.as_deref(), Some("Nama Dosen"));
        assert!(validate_metadata(&meta).is_ok());
    }
}
