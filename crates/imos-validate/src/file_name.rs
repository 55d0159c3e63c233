//! File name tokenization.
//!
//! `IMOS_ANMN-NRS_TZ_20200102T030405Z_NRSMAI_FV01_END-20200201T000000Z.nc`
//! becomes extension `nc` and the `_`-separated fields
//! `IMOS`, `ANMN-NRS`, `TZ`, ... in order.

/// Tokens derived from a file path.
///
/// `fields` always holds at least one (possibly empty) entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameTokens {
    /// Final path component.
    pub base_name: String,
    /// Base name without the extension.
    pub name: String,
    /// Text after the last `.`, or empty when there is no `.`.
    pub extension: String,
    /// `name` split on `_`.
    pub fields: Vec<String>,
}

/// Number of fixed-position fields before the optional trailing group.
pub const FIXED_FIELD_COUNT: usize = 6;

impl FileNameTokens {
    /// Field by 1-based position.
    pub fn field(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.fields.get(idx))
            .map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Fields beyond position six (fields 7 to 10 in a valid name).
    pub fn trailing_fields(&self) -> &[String] {
        self.fields.get(FIXED_FIELD_COUNT..).unwrap_or(&[])
    }
}

/// Split a path into extension and name fields.
///
/// Never fails; malformed paths yield degenerate tokens.
pub fn tokenize(path: &str) -> FileNameTokens {
    let base_name = path
        .rsplit(std::path::is_separator)
        .next()
        .unwrap_or_default()
        .to_string();

    let parts: Vec<&str> = base_name.split('.').collect();
    let (name, extension) = match parts.as_slice() {
        [] => (String::new(), String::new()),
        [only] => ((*only).to_string(), String::new()),
        [stem @ .., last] => (stem.join("."), (*last).to_string()),
    };

    let fields = name.split('_').map(str::to_string).collect();

    FileNameTokens {
        base_name,
        name,
        extension,
        fields,
    }
}
