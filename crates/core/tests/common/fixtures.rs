//! Test fixtures for drafts, forms and intake documents.

use rc_protocol::{
    AuthorDraft, BranchDraft, GlobalAuthorDraft, GlobalConfigDraft, GroupDraft, RepoForm,
};

pub const REPO_A: &str = "https://github.com/foo/bar.git";
#[allow(dead_code)]
pub const REPO_B: &str = "https://github.com/baz/qux.git";

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// A branch draft with every mandatory field filled.
pub fn branch(name: &str) -> BranchDraft {
    BranchDraft {
        name: name.to_string(),
        file_formats: strings(&["java"]),
        ignore_glob_list: strings(&["docs/**"]),
        ignore_commit_list: strings(&["abc123"]),
        ignore_author_list: strings(&["bot"]),
        ..BranchDraft::default()
    }
}

#[allow(dead_code)]
pub fn author(branch: &str, git_host_id: &str) -> AuthorDraft {
    AuthorDraft {
        branch: branch.to_string(),
        git_host_id: git_host_id.to_string(),
        emails: vec![format!("{git_host_id}@example.com")],
        display_name: git_host_id.to_string(),
        git_author_names: strings(&[git_host_id]),
        ignore_glob_list: strings(&["test/**"]),
    }
}

#[allow(dead_code)]
pub fn group(name: &str, globs: &[&str]) -> GroupDraft {
    GroupDraft {
        name: name.to_string(),
        globs: strings(globs),
    }
}

#[allow(dead_code)]
pub fn global_author(git_id: &str) -> GlobalAuthorDraft {
    GlobalAuthorDraft {
        git_id: git_id.to_string(),
        emails: vec![format!("{git_id}@example.com")],
        display_name: git_id.to_string(),
        author_names: strings(&[git_id]),
        ignore_glob_list: strings(&["Test/**"]),
    }
}

#[allow(dead_code)]
pub fn global_config(authors: Vec<GlobalAuthorDraft>) -> GlobalConfigDraft {
    GlobalConfigDraft {
        ignore_glob_list: strings(&[" **/generated/** "]),
        formats: strings(&["Java", " MD "]),
        ignore_commit_list: strings(&["abc123..def456"]),
        ignore_author_list: strings(&["bot"]),
        authors,
    }
}

pub fn form<D>(location: &str, drafts: Vec<D>) -> RepoForm<D> {
    RepoForm::new(location, drafts)
}
