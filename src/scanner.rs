//! The scan orchestrator that drives discovery, description and matching.

use crate::discovery;
use crate::error::{Result, ScanError};
use crate::highlight::Highlighter;
use crate::matcher::KeywordMatcher;
use crate::pluralize::{EnglishPluralizer, Pluralize};
use crate::provider::{DescriptionProvider, DEFAULT_MODEL, DEFAULT_PROMPT};
use crate::tokenizer::tokenize;
use crate::types::ScanSummary;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// Scans a directory of images for a keyword in their descriptions.
///
/// `ImageScanner` owns the pieces of one scanning pipeline: the
/// description provider, the pluralizer handed to the matcher, and the
/// highlighter used for match output. Files are processed strictly one at
/// a time; the scanner keeps no state between runs beyond its
/// configuration.
///
/// Create an `ImageScanner` using the [`ImageScannerBuilder`].
///
/// # Examples
///
/// ```rust
/// use snapgrep::prelude::*;
/// use std::path::Path;
///
/// // A provider that answers without a network round trip.
/// struct CannedProvider;
///
/// impl DescriptionProvider for CannedProvider {
///   fn describe(&self, _image: &Path, _model: &str, _prompt: &str) -> Result<String, ProviderError> {
///     Ok("A cat on a sofa.".to_string())
///   }
/// }
///
/// let scanner = ImageScanner::builder()
///   .provider(Box::new(CannedProvider))
///   .build()
///   .unwrap();
///
/// // A directory that does not exist is logged and skipped, not fatal.
/// let summary = scanner.scan(Path::new("no-such-directory"), "cat").unwrap();
/// assert_eq!(summary.images_found, 0);
/// ```
pub struct ImageScanner {
  /// Source of image descriptions.
  provider: Box<dyn DescriptionProvider>,
  /// Supplies plural keyword forms to the matcher.
  pluralizer: Box<dyn Pluralize>,
  /// Formats the match line for found keywords.
  highlighter: Highlighter,
  /// Model name passed to the provider for every image.
  model: String,
  /// Prompt passed to the provider for every image.
  prompt: String,
  /// Whether immediate subdirectories are scanned as well.
  recurse: bool,
}

impl ImageScanner {
  /// Creates a new `ImageScannerBuilder` to construct a scanner.
  pub fn builder() -> ImageScannerBuilder {
    ImageScannerBuilder::new()
  }

  /// Runs one scan of `dir` for `keyword`.
  ///
  /// ## Run phases
  ///
  /// 1. **Validating**: the directory path and keyword must not be empty
  ///    or only whitespace, otherwise the run fails with
  ///    [`ScanError::Config`] before anything is scanned.
  /// 2. **Scanning**: image files directly inside `dir` are described and
  ///    matched one at a time, in discovery order. A missing directory is
  ///    logged and skipped; a provider failure skips only that file.
  /// 3. **Subdirectories**: with `recurse` enabled, each immediate
  ///    subdirectory goes through the same scanning step. Exactly one
  ///    level is descended.
  /// 4. **Reporting**: the total time and match count are printed and the
  ///    summary is returned.
  ///
  /// # Arguments
  ///
  /// * `dir` - Directory containing the images.
  /// * `keyword` - Word or phrase to look for in the descriptions.
  ///
  /// # Returns
  ///
  /// The [`ScanSummary`] with the counters for this run. Finding no match
  /// is still a successful run.
  pub fn scan(&self, dir: &Path, keyword: &str) -> Result<ScanSummary> {
    validate(dir, keyword)?;
    let keyword = keyword.trim();
    debug!("searching for '{keyword}'");

    let matcher = KeywordMatcher::new(keyword, self.pluralizer.as_ref());
    let started = Instant::now();
    let mut summary = ScanSummary::default();

    if dir.is_dir() {
      self.scan_directory(dir, &matcher, &mut summary);

      if self.recurse {
        match discovery::list_subdirectories(dir) {
          Ok(subdirs) => {
            for subdir in subdirs {
              println!("=== Scanning subdirectory: {} ===", subdir.display());
              self.scan_directory(&subdir, &matcher, &mut summary);
            }
          }
          Err(err) => warn!("{err}"),
        }
      }
    } else {
      warn!("{}", ScanError::DirectoryNotFound(dir.to_path_buf()));
    }

    summary.elapsed = started.elapsed();
    println!("Total time taken: {}", summary.elapsed_display());
    println!("Matches found: {}", summary.matches_found);
    Ok(summary)
  }

  /// Scans the image files directly inside one directory.
  ///
  /// Failures in here never abort the run: they are logged and the scan
  /// moves on to the next file or directory.
  fn scan_directory(&self, dir: &Path, matcher: &KeywordMatcher, summary: &mut ScanSummary) {
    let files = match discovery::list_image_files(dir) {
      Ok(files) => files,
      Err(err) => {
        warn!("{err}");
        return;
      }
    };

    println!("=== Number of image files found: {} ===", files.len());
    summary.images_found += files.len();
    if files.is_empty() {
      debug!("nothing to describe in {}", dir.display());
      return;
    }

    for (index, path) in files.iter().enumerate() {
      match self.scan_file(index + 1, path, matcher) {
        Ok(true) => summary.matches_found += 1,
        Ok(false) => {}
        Err(err) => warn!("skipping {}: {err}", path.display()),
      }
    }
  }

  /// Describes and matches a single image file.
  ///
  /// Returns whether the description contained the keyword.
  fn scan_file(&self, index: usize, path: &Path, matcher: &KeywordMatcher) -> Result<bool> {
    println!("{}| Describing {}", index, path.display());

    let description = self.provider.describe(path, &self.model, &self.prompt)?;
    debug!("description: {description}");

    let result = matcher.matches(&tokenize(&description));
    if !result.found {
      return Ok(false);
    }

    let announcement = if result.plural_used {
      format!("Match found! (pluralized form: {})", result.matched_form)
    } else {
      String::from("Match found!")
    };
    println!("{}", self.highlighter.mark(&announcement));
    println!("{}", self.highlighter.highlight(&description, &result.matched_form));
    println!();
    Ok(true)
  }
}

/// Rejects unusable run configuration before any scanning starts.
fn validate(dir: &Path, keyword: &str) -> Result<()> {
  if dir.as_os_str().to_string_lossy().trim().is_empty() {
    return Err(ScanError::Config("directory must not be empty".into()));
  }
  if keyword.trim().is_empty() {
    return Err(ScanError::Config("keyword must not be empty".into()));
  }
  Ok(())
}

/// A builder for creating `ImageScanner` instances.
///
/// A description provider is the one required piece; everything else has
/// a default. The pluralizer defaults to [`EnglishPluralizer`], the
/// highlighter to green console markers, and the model and prompt to the
/// crate-wide Ollama defaults.
///
/// # Examples
///
/// ```rust
/// use snapgrep::prelude::*;
/// use std::path::Path;
///
/// struct CannedProvider;
///
/// impl DescriptionProvider for CannedProvider {
///   fn describe(&self, _image: &Path, _model: &str, _prompt: &str) -> Result<String, ProviderError> {
///     Ok(String::new())
///   }
/// }
///
/// let scanner = ImageScanner::builder()
///   .provider(Box::new(CannedProvider))
///   .highlighter(Highlighter::with_markers("<<", ">>"))
///   .model("llava:13b")
///   .recurse(true)
///   .build()
///   .unwrap();
/// ```
#[derive(Default)]
pub struct ImageScannerBuilder {
  provider: Option<Box<dyn DescriptionProvider>>,
  pluralizer: Option<Box<dyn Pluralize>>,
  highlighter: Option<Highlighter>,
  model: Option<String>,
  prompt: Option<String>,
  recurse: bool,
}

impl ImageScannerBuilder {
  /// Creates a new, empty `ImageScannerBuilder`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the description provider. Required.
  pub fn provider(mut self, provider: Box<dyn DescriptionProvider>) -> Self {
    self.provider = Some(provider);
    self
  }

  /// Replaces the pluralizer handed to the matcher.
  pub fn pluralizer(mut self, pluralizer: Box<dyn Pluralize>) -> Self {
    self.pluralizer = Some(pluralizer);
    self
  }

  /// Replaces the highlighter used for match output.
  pub fn highlighter(mut self, highlighter: Highlighter) -> Self {
    self.highlighter = Some(highlighter);
    self
  }

  /// Sets the model name passed to the provider.
  pub fn model(mut self, model: impl Into<String>) -> Self {
    self.model = Some(model.into());
    self
  }

  /// Sets the prompt passed to the provider.
  pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
    self.prompt = Some(prompt.into());
    self
  }

  /// Enables or disables scanning of immediate subdirectories.
  pub fn recurse(mut self, recurse: bool) -> Self {
    self.recurse = recurse;
    self
  }

  /// Builds the `ImageScanner` with the configured components.
  ///
  /// # Returns
  ///
  /// The scanner, or [`ScanError::Config`] when no provider was set.
  pub fn build(self) -> Result<ImageScanner> {
    let provider = self
      .provider
      .ok_or_else(|| ScanError::Config("a description provider is required".into()))?;

    Ok(ImageScanner {
      provider,
      pluralizer: self.pluralizer.unwrap_or_else(|| Box::new(EnglishPluralizer)),
      highlighter: self.highlighter.unwrap_or_default(),
      model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
      prompt: self.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
      recurse: self.recurse,
    })
  }
}
