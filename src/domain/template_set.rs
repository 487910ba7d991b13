//! The fixed set of files template sync deploys into a working tree.

/// One fetch-if-missing entry: path relative to the template base on the
/// remote side, and relative to the working tree locally.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    pub remote: &'static str,
    pub dest: &'static str,
}

impl TemplateEntry {
    const fn mirrored(path: &'static str) -> Self {
        Self { remote: path, dest: path }
    }
}

/// Slash-command definitions, workflow configuration, and the workflow
/// specification documents. Existing local copies are never overwritten.
pub const TEMPLATE_ENTRIES: [TemplateEntry; 6] = [
    TemplateEntry::mirrored(".claude/commands/branch.md"),
    TemplateEntry::mirrored(".claude/commands/commit.md"),
    TemplateEntry::mirrored(".claude/commands/pr.md"),
    TemplateEntry::mirrored(".github/workflow-config.yml"),
    TemplateEntry::mirrored("docs/specification/branching.md"),
    TemplateEntry::mirrored("docs/specification/changelog.md"),
];

/// Project-level configuration template, fetched last and only when absent.
/// It ships as a skeleton and needs manual editing afterwards.
pub const PROJECT_CONFIG_TEMPLATE: TemplateEntry = TemplateEntry::mirrored("CLAUDE.md");
