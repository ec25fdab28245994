//! End-to-end merge scenarios on real temporary directories.
//!
//! These exercise the full stack: catalog loading, the merge service, and
//! the production adapters (local filesystem, XML descriptor store,
//! handlebars renderer).

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use graft_adapters::{
    GitWorkingTree, HandlebarsRenderer, LocalFilesystem, MemoryFilesystem, TemplateCatalog,
    XmlDescriptorStore, load_project,
};
use graft_core::application::{DescriptorStore, MergeService};
use graft_core::domain::{CloudTemplate, Project, ProjectConfiguration};

// ── fixtures ──────────────────────────────────────────────────────────────────

const FOO_CONFIG: &str = r#"{
    "package": "com.acme.foo",
    "language": "java",
    "groupId": "com.acme",
    "artifactId": "foo"
}"#;

const BAR_CONFIG: &str = r#"{
    "package": "com.acme.bar",
    "language": "java",
    "groupId": "com.acme",
    "artifactId": "bar"
}"#;

fn write(root: &Path, rel: &str, content: &str) {
    let full = root.join(rel);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

fn service() -> MergeService {
    MergeService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(HandlebarsRenderer::new()),
        Box::new(XmlDescriptorStore::new()),
        Box::new(GitWorkingTree::new()),
    )
}

/// Catalog with one template named `tpl`, target directory beside it.
fn workspace(template_files: &[(&str, &str)], target_files: &[(&str, &str)]) -> (TempDir, TempDir) {
    let catalog = TempDir::new().unwrap();
    let tpl_dir = catalog.path().join("templates/tpl");
    fs::create_dir_all(&tpl_dir).unwrap();
    for (rel, content) in template_files {
        write(&tpl_dir, rel, content);
    }

    let target = TempDir::new().unwrap();
    for (rel, content) in target_files {
        write(target.path(), rel, content);
    }

    (catalog, target)
}

// ── package rewrite scenario ──────────────────────────────────────────────────

#[test]
fn package_paths_and_content_follow_the_target() {
    let (catalog, target_dir) = workspace(
        &[
            ("graft.json", FOO_CONFIG),
            (
                "src/main/java/com/acme/foo/Service.java",
                "package com.acme.foo;\n\nimport com.acme.foo.util.Helper;\n\npublic class Service {}\n",
            ),
            (
                "src/test/java/com/acme/foo/ServiceTest.java",
                "package com.acme.foo;\n\nclass ServiceTest {}\n",
            ),
        ],
        &[("graft.json", BAR_CONFIG)],
    );

    let template = TemplateCatalog::open(catalog.path())
        .unwrap()
        .template("tpl")
        .unwrap();
    let target = load_project(target_dir.path()).unwrap();

    let outcome = service().merge(&template, &target, false).unwrap();

    let main = target_dir
        .path()
        .join("src/main/java/com/acme/bar/Service.java");
    let test = target_dir
        .path()
        .join("src/test/java/com/acme/bar/ServiceTest.java");
    assert!(main.is_file(), "rewritten main source missing");
    assert!(test.is_file(), "rewritten test source missing");

    let content = fs::read_to_string(main).unwrap();
    assert!(content.contains("package com.acme.bar;"));
    assert!(content.contains("com.acme.bar.util.Helper"));
    assert!(!content.contains("com.acme.foo"));

    assert_eq!(outcome.copied.len(), 2);
    assert!(outcome.path_rewrite_misses.is_empty());
}

// ── collision scenario ────────────────────────────────────────────────────────

#[test]
fn existing_readme_survives_the_merge() {
    let (catalog, target_dir) = workspace(
        &[("graft.json", FOO_CONFIG), ("README.md", "# from template\n")],
        &[("graft.json", BAR_CONFIG), ("README.md", "# my project\n")],
    );

    let template = TemplateCatalog::open(catalog.path())
        .unwrap()
        .template("tpl")
        .unwrap();
    let target = load_project(target_dir.path()).unwrap();

    let outcome = service().merge(&template, &target, false).unwrap();

    assert_eq!(
        fs::read_to_string(target_dir.path().join("README.md")).unwrap(),
        "# my project\n"
    );
    assert_eq!(outcome.skipped, vec![std::path::PathBuf::from("README.md")]);
    assert!(outcome.has_warnings());
}

// ── deferred render scenario ──────────────────────────────────────────────────

#[test]
fn render_marker_expands_against_target_configuration() {
    let (catalog, target_dir) = workspace(
        &[
            ("graft.json", FOO_CONFIG),
            (
                "src/main/resources/application.yml.render",
                "spring:\n  application:\n    name: {{artifactId}}\nbase-package: {{package}}\n",
            ),
        ],
        &[("graft.json", BAR_CONFIG)],
    );

    let template = TemplateCatalog::open(catalog.path())
        .unwrap()
        .template("tpl")
        .unwrap();
    let target = load_project(target_dir.path()).unwrap();

    let outcome = service().merge(&template, &target, false).unwrap();

    let rendered = target_dir.path().join("src/main/resources/application.yml");
    let marker = target_dir
        .path()
        .join("src/main/resources/application.yml.render");

    let content = fs::read_to_string(rendered).unwrap();
    assert!(content.contains("name: bar"));
    assert!(content.contains("base-package: com.acme.bar"));
    assert!(!marker.exists(), "render marker must be deleted");
    assert_eq!(
        outcome.rendered,
        vec![std::path::PathBuf::from("src/main/resources/application.yml")]
    );
}

// ── descriptor merge scenario ─────────────────────────────────────────────────

#[test]
fn template_dependencies_are_adopted_with_target_precedence() {
    let template_pom = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <groupId>com.template</groupId>
    <artifactId>tpl</artifactId>
    <version>0.0.1</version>
    <dependencies>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>
        <dependency>
            <groupId>org.junit.jupiter</groupId>
            <artifactId>junit-jupiter</artifactId>
            <version>5.9.0</version>
        </dependency>
    </dependencies>
</project>
"#;
    let target_pom = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <groupId>com.acme</groupId>
    <artifactId>bar</artifactId>
    <version>1.0.0</version>
    <dependencies>
        <dependency>
            <groupId>org.junit.jupiter</groupId>
            <artifactId>junit-jupiter</artifactId>
            <version>5.10.0</version>
        </dependency>
    </dependencies>
</project>
"#;

    let (catalog, target_dir) = workspace(
        &[("graft.json", FOO_CONFIG), ("pom.xml", template_pom)],
        &[("graft.json", BAR_CONFIG), ("pom.xml", target_pom)],
    );

    let template = TemplateCatalog::open(catalog.path())
        .unwrap()
        .template("tpl")
        .unwrap();
    let target = load_project(target_dir.path()).unwrap();

    service().merge(&template, &target, false).unwrap();

    let merged = XmlDescriptorStore::new()
        .load(&target_dir.path().join("pom.xml"))
        .unwrap();

    // Target coordinates win; template-only dependency is adopted.
    assert_eq!(merged.group_id.as_deref(), Some("com.acme"));
    assert_eq!(merged.version.as_deref(), Some("1.0.0"));
    assert_eq!(merged.dependency_list().len(), 2);
    let junit = merged
        .dependency_list()
        .iter()
        .find(|d| d.artifact_id == "junit-jupiter")
        .unwrap();
    assert_eq!(junit.version.as_deref(), Some("5.10.0"));
}

// ── multi-module scenario ─────────────────────────────────────────────────────

#[test]
fn multi_module_merge_reconciles_submodules_and_cleans_root() {
    let template_pom = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <groupId>com.template</groupId>
    <artifactId>tpl-parent</artifactId>
    <version>0.0.1</version>
    <packaging>pom</packaging>
    <modules>
        <module>core</module>
        <module>web</module>
    </modules>
</project>
"#;
    let submodule_pom = |artifact: &str| {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <parent>
        <groupId>com.template</groupId>
        <artifactId>tpl-parent</artifactId>
        <version>0.0.1</version>
    </parent>
    <artifactId>{artifact}</artifactId>
</project>
"#
        )
    };
    let target_pom = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <groupId>com.acme</groupId>
    <artifactId>bar</artifactId>
    <version>2.0.0</version>
    <dependencies>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter</artifactId>
        </dependency>
        <dependency>
            <groupId>org.junit.jupiter</groupId>
            <artifactId>junit-jupiter</artifactId>
        </dependency>
    </dependencies>
    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
            </plugin>
        </plugins>
    </build>
</project>
"#;

    let core_pom = submodule_pom("core");
    let web_pom = submodule_pom("web");
    let (catalog, target_dir) = workspace(
        &[
            ("graft.json", FOO_CONFIG),
            ("pom.xml", template_pom),
            ("core/pom.xml", &core_pom),
            ("web/pom.xml", &web_pom),
            ("core/src/main/java/com/acme/foo/Core.java", "package com.acme.foo;\n"),
        ],
        &[
            ("graft.json", BAR_CONFIG),
            ("pom.xml", target_pom),
            ("src/main/java/com/acme/bar/Old.java", "package com.acme.bar;\n"),
        ],
    );

    let template = TemplateCatalog::open(catalog.path())
        .unwrap()
        .template("tpl")
        .unwrap();
    let target = load_project(target_dir.path()).unwrap();

    let outcome = service().merge(&template, &target, true).unwrap();

    // Submodule descriptors were placed and their parents now point at the
    // target root's own coordinates.
    let store = XmlDescriptorStore::new();
    for module in ["core", "web"] {
        let model = store
            .load(&target_dir.path().join(module).join("pom.xml"))
            .unwrap();
        let parent = model.parent.expect("submodule must keep a parent");
        assert_eq!(parent.group_id, "com.acme");
        assert_eq!(parent.artifact_id, "bar");
        assert_eq!(parent.version, "2.0.0");
    }
    assert_eq!(outcome.reconciled_modules.len(), 2);

    // Root src/ is gone; submodule sources survived, package-rewritten.
    assert!(!target_dir.path().join("src").exists());
    assert!(
        target_dir
            .path()
            .join("core/src/main/java/com/acme/bar/Core.java")
            .is_file()
    );

    // The merged root descriptor lost every framework starter entry.
    let root = store.load(&target_dir.path().join("pom.xml")).unwrap();
    assert!(
        root.dependency_list()
            .iter()
            .all(|d| d.group_id != "org.springframework.boot")
    );
    assert_eq!(root.dependency_list().len(), 1);
    assert!(
        root.plugin_list()
            .iter()
            .all(|p| p.group_id != "org.springframework.boot")
    );
    // Module declarations were adopted from the template.
    assert_eq!(root.module_names(), ["core", "web"]);
}

// ── in-memory adapter substitution ────────────────────────────────────────────

#[test]
fn merge_runs_against_the_memory_filesystem() {
    let fs = MemoryFilesystem::new();
    fs.seed("/tpl/docs/guide.md", b"written for com.acme.foo\n");

    let service = MergeService::new(
        Box::new(fs.clone()),
        Box::new(HandlebarsRenderer::new()),
        Box::new(XmlDescriptorStore::new()),
        Box::new(GitWorkingTree::new()),
    );
    let template = CloudTemplate::new(
        "tpl",
        Project::new("/tpl", ProjectConfiguration::with_package("com.acme.foo")),
    );
    let target = Project::new("/work", ProjectConfiguration::with_package("com.acme.bar"));

    let outcome = service.merge(&template, &target, false).unwrap();

    assert_eq!(outcome.copied.len(), 1);
    assert_eq!(
        fs.text(Path::new("/work/docs/guide.md")).unwrap(),
        "written for com.acme.bar\n"
    );
}

// ── idempotence of the additive step ──────────────────────────────────────────

#[test]
fn re_running_a_merge_is_safe_for_copied_files() {
    let (catalog, target_dir) = workspace(
        &[
            ("graft.json", FOO_CONFIG),
            ("docs/guide.md", "guide for com.acme.foo\n"),
        ],
        &[("graft.json", BAR_CONFIG)],
    );

    let template = TemplateCatalog::open(catalog.path())
        .unwrap()
        .template("tpl")
        .unwrap();
    let target = load_project(target_dir.path()).unwrap();
    let svc = service();

    svc.merge(&template, &target, false).unwrap();
    // Simulate a local edit between runs.
    write(target_dir.path(), "docs/guide.md", "edited locally\n");
    let second = svc.merge(&template, &target, false).unwrap();

    assert_eq!(
        fs::read_to_string(target_dir.path().join("docs/guide.md")).unwrap(),
        "edited locally\n"
    );
    assert_eq!(second.skipped, vec![std::path::PathBuf::from("docs/guide.md")]);
}
