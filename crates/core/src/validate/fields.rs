//! Field completeness of drafts.
//!
//! Every draft kind declares which of its fields are mandatory; one generic
//! check decides whether the draft is complete, blank, or partially filled.

use rc_protocol::{AuthorDraft, BranchDraft, GlobalAuthorDraft, GroupDraft, ReportDraft};

/// The value of a mandatory field, as far as completeness is concerned.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    /// Text is filled when it has non-whitespace content, a list when any value has.
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::List(values) => values.iter().any(|v| !v.trim().is_empty()),
        }
    }
}

/// A named mandatory field.
#[derive(Debug, Clone, Copy)]
pub struct RequiredField<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> RequiredField<'a> {
    pub fn text(name: &'static str, value: &'a str) -> Self {
        Self {
            name,
            value: FieldValue::Text(value),
        }
    }

    pub fn list(name: &'static str, value: &'a [String]) -> Self {
        Self {
            name,
            value: FieldValue::List(value),
        }
    }
}

/// Declares the mandatory fields of a draft kind.
pub trait Completeness {
    fn required_fields(&self) -> Vec<RequiredField<'_>>;

    /// Names of the mandatory fields that are still empty, in declaration order.
    fn missing_fields(&self) -> Vec<&'static str> {
        self.required_fields()
            .into_iter()
            .filter(|field| !field.value.is_filled())
            .map(|field| field.name)
            .collect()
    }

    fn is_complete(&self) -> bool {
        self.required_fields()
            .iter()
            .all(|field| field.value.is_filled())
    }

    /// True when none of the mandatory fields was touched.
    fn is_blank(&self) -> bool {
        self.required_fields()
            .iter()
            .all(|field| !field.value.is_filled())
    }
}

impl Completeness for BranchDraft {
    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![
            RequiredField::text("branch name", &self.name),
            RequiredField::list("file formats", &self.file_formats),
            RequiredField::list("ignore glob list", &self.ignore_glob_list),
            RequiredField::list("ignore commit list", &self.ignore_commit_list),
            RequiredField::list("ignore author list", &self.ignore_author_list),
        ]
    }
}

impl Completeness for AuthorDraft {
    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![
            RequiredField::text("branch name", &self.branch),
            RequiredField::text("git host id", &self.git_host_id),
            RequiredField::list("emails", &self.emails),
            RequiredField::text("display name", &self.display_name),
            RequiredField::list("git author names", &self.git_author_names),
            RequiredField::list("ignore glob list", &self.ignore_glob_list),
        ]
    }
}

impl Completeness for GroupDraft {
    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![RequiredField::text("group name", &self.name)]
    }
}

impl Completeness for GlobalAuthorDraft {
    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![
            RequiredField::text("git id", &self.git_id),
            RequiredField::list("emails", &self.emails),
            RequiredField::text("display name", &self.display_name),
            RequiredField::list("author names", &self.author_names),
            RequiredField::list("ignore glob list", &self.ignore_glob_list),
        ]
    }
}

impl Completeness for ReportDraft {
    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![RequiredField::text("title", &self.title)]
    }
}
