//! Entry point for checking one file.

use imos_model::{CheckResult, MetadataAttributes};
use imos_standards::ReferenceTables;

use crate::checks;
use crate::file_name::{FileNameTokens, tokenize};

/// File name validator bound to a set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct FileNameValidator<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> FileNameValidator<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Tokenize `path` once for rule-by-rule evaluation.
    pub fn prepare(&self, path: &str) -> FileNameCheck<'a> {
        FileNameCheck {
            tokens: tokenize(path),
            tables: self.tables,
        }
    }

    /// Run every file name rule for `path`.
    pub fn validate<M>(&self, path: &str, metadata: &M) -> Vec<CheckResult>
    where
        M: MetadataAttributes + ?Sized,
    {
        self.prepare(path).run(metadata)
    }
}

/// Tokens of one file plus the tables to check them against.
///
/// Each `check_*` method mirrors one rule and may return no results when the
/// rule does not apply.
#[derive(Debug, Clone)]
pub struct FileNameCheck<'a> {
    tokens: FileNameTokens,
    tables: &'a ReferenceTables,
}

impl FileNameCheck<'_> {
    pub fn tokens(&self) -> &FileNameTokens {
        &self.tokens
    }

    pub fn check_extension_name(&self) -> Vec<CheckResult> {
        checks::extension::check(&self.tokens)
    }

    pub fn check_file_name(&self) -> Vec<CheckResult> {
        checks::field_count::check(&self.tokens)
    }

    pub fn check_file_name_field1(&self) -> Vec<CheckResult> {
        checks::prefix::check(&self.tokens)
    }

    pub fn check_file_name_field2(&self) -> Vec<CheckResult> {
        checks::facility::check(&self.tokens, self.tables)
    }

    pub fn check_file_name_field3(&self) -> Vec<CheckResult> {
        checks::data_code::check(&self.tokens)
    }

    pub fn check_file_name_field4<M>(&self, metadata: &M) -> Vec<CheckResult>
    where
        M: MetadataAttributes + ?Sized,
    {
        checks::start_date::check(&self.tokens, metadata)
    }

    pub fn check_file_name_field5<M>(&self, metadata: &M) -> Vec<CheckResult>
    where
        M: MetadataAttributes + ?Sized,
    {
        checks::platform::check(&self.tokens, metadata, self.tables)
    }

    pub fn check_file_name_field6<M>(&self, metadata: &M) -> Vec<CheckResult>
    where
        M: MetadataAttributes + ?Sized,
    {
        checks::file_version::check(&self.tokens, metadata)
    }

    pub fn check_file_name_field7_to_field10(&self) -> Vec<CheckResult> {
        checks::trailing::check(&self.tokens)
    }

    /// Run every rule in report order.
    pub fn run<M>(&self, metadata: &M) -> Vec<CheckResult>
    where
        M: MetadataAttributes + ?Sized,
    {
        let span = tracing::debug_span!("file_name_check", file = %self.tokens.base_name);
        let _guard = span.enter();

        let results = checks::run_all(&self.tokens, metadata, self.tables);
        let failed = results.iter().filter(|r| !r.passed).count();
        tracing::debug!(
            fields = self.tokens.field_count(),
            results = results.len(),
            failed,
            "File name check complete"
        );
        results
    }
}
