//! CSV renderers for `repo-config.csv`, `author-config.csv` and `group-config.csv`.
//!
//! All three share the same rules:
//! - a header row, `\n` line endings, UTF-8
//! - one row per (repository, entry) pair in insertion order
//! - list values joined with `;`, without escaping a `;` inside a value
//! - a cell is quoted only when it contains `,`, `"` or a line break

use rc_protocol::{AuthorEntry, BranchEntry, GroupEntry, OutputKind, RepoBatch};

use super::error::{RenderError, RenderResult};

pub const REPO_CONFIG_HEADERS: [&str; 12] = [
    "Repository's Location",
    "Branch",
    "File formats",
    "Ignore Glob List",
    "Ignore standalone config",
    "Ignore Commits List",
    "Ignore Authors List",
    "Shallow Cloning",
    "Find Previous Authors",
    "File Size Limit",
    "Ignore File Size Limit",
    "Skip Ignored File Analysis",
];

pub const AUTHOR_CONFIG_HEADERS: [&str; 7] = [
    "Repository's Location",
    "Branch",
    "Author's Git Host ID",
    "Author's Emails",
    "Author's Display Name",
    "Author's Git Author Name",
    "Ignore Glob List",
];

pub const GROUP_CONFIG_HEADERS: [&str; 3] = ["Repository's Location", "Group Name", "Globs"];

/// Separator between the values of a list cell.
pub const LIST_SEPARATOR: &str = ";";

fn join(values: &[String]) -> String {
    values.join(LIST_SEPARATOR)
}

fn flag(value: bool) -> String {
    if value { "yes" } else { "" }.to_string()
}

pub fn repo_config_csv(batch: &RepoBatch<BranchEntry>) -> RenderResult<Vec<u8>> {
    write_table(
        OutputKind::RepoConfig,
        &REPO_CONFIG_HEADERS,
        batch.rows().map(|(repo, branch, entry)| {
            vec![
                repo.to_string(),
                branch.to_string(),
                join(&entry.file_formats),
                join(&entry.ignore_glob_list),
                flag(entry.ignore_standalone_config),
                join(&entry.ignore_commit_list),
                join(&entry.ignore_author_list),
                flag(entry.shallow_cloning),
                flag(entry.find_previous_authors),
                entry.effective_file_size_limit().to_string(),
                flag(entry.ignore_file_size_limit),
                flag(entry.skip_ignored_file_analysis),
            ]
        }),
    )
}

pub fn author_config_csv(batch: &RepoBatch<AuthorEntry>) -> RenderResult<Vec<u8>> {
    write_table(
        OutputKind::AuthorConfig,
        &AUTHOR_CONFIG_HEADERS,
        batch.rows().map(|(repo, branch, entry)| {
            vec![
                repo.to_string(),
                branch.to_string(),
                entry.git_host_id.clone(),
                join(&entry.emails),
                entry.display_name.clone(),
                join(&entry.git_author_names),
                join(&entry.ignore_glob_list),
            ]
        }),
    )
}

pub fn group_config_csv(batch: &RepoBatch<GroupEntry>) -> RenderResult<Vec<u8>> {
    write_table(
        OutputKind::GroupConfig,
        &GROUP_CONFIG_HEADERS,
        batch
            .rows()
            .map(|(repo, group, entry)| vec![repo.to_string(), group.to_string(), join(&entry.globs)]),
    )
}

fn write_table<I>(kind: OutputKind, headers: &[&str], rows: I) -> RenderResult<Vec<u8>>
where
    I: Iterator<Item = Vec<String>>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .map_err(|source| RenderError::Csv { kind, source })?;

    for row in rows {
        writer
            .write_record(&row)
            .map_err(|source| RenderError::Csv { kind, source })?;
    }

    writer.into_inner().map_err(|e| RenderError::CsvFlush {
        kind,
        source: e.into_error(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn branch_entry() -> BranchEntry {
        BranchEntry {
            file_formats: list(&["a", "b", "c"]),
            ignore_glob_list: list(&["x/**", "y/**"]),
            ignore_commit_list: list(&["abc123", "def..fed"]),
            ignore_author_list: list(&["bot"]),
            find_previous_authors: true,
            ignore_standalone_config: false,
            shallow_cloning: true,
            ignore_file_size_limit: false,
            skip_ignored_file_analysis: true,
            file_size_limit: -5,
        }
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_repo_config_row() {
        let mut batch = RepoBatch::new();
        batch.insert("https://github.com/foo/bar.git", "master", branch_entry());

        let csv = text(repo_config_csv(&batch).unwrap());
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some(
                "Repository's Location,Branch,File formats,Ignore Glob List,Ignore standalone config,\
                 Ignore Commits List,Ignore Authors List,Shallow Cloning,Find Previous Authors,\
                 File Size Limit,Ignore File Size Limit,Skip Ignored File Analysis"
            )
        );
        assert_eq!(
            lines.next(),
            Some("https://github.com/foo/bar.git,master,a;b;c,x/**;y/**,,abc123;def..fed,bot,yes,yes,0,,yes")
        );
        assert_eq!(lines.next(), None);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_file_size_limit_kept_when_positive() {
        let mut batch = RepoBatch::new();
        batch.insert(
            "repo",
            "main",
            BranchEntry {
                file_size_limit: 500_000,
                ..branch_entry()
            },
        );

        let csv = text(repo_config_csv(&batch).unwrap());
        assert!(csv.contains(",500000,"), "{csv}");
    }

    #[test]
    fn test_header_only_for_empty_batch() {
        let csv = text(group_config_csv(&RepoBatch::new()).unwrap());
        assert_eq!(csv, "Repository's Location,Group Name,Globs\n");
    }

    #[test]
    fn test_cells_with_commas_are_quoted() {
        let mut batch = RepoBatch::new();
        batch.insert(
            "repo",
            "main",
            AuthorEntry {
                git_host_id: "jdoe".to_string(),
                emails: list(&["j@x.org"]),
                display_name: "Doe, John".to_string(),
                git_author_names: list(&["John \"JD\" Doe"]),
                ignore_glob_list: list(&["*.md"]),
            },
        );

        let csv = text(author_config_csv(&batch).unwrap());
        assert_eq!(
            csv.lines().nth(1),
            Some(r#"repo,main,jdoe,j@x.org,"Doe, John","John ""JD"" Doe",*.md"#)
        );
    }

    #[test]
    fn test_semicolons_inside_values_are_not_escaped() {
        let mut batch = RepoBatch::new();
        batch.insert(
            "repo",
            "docs",
            GroupEntry {
                globs: list(&["a;b", "c"]),
            },
        );

        let csv = text(group_config_csv(&batch).unwrap());
        assert_eq!(csv.lines().nth(1), Some("repo,docs,a;b;c"));
    }
}
