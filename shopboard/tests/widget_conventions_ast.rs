use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const WIDGET_FILES: [&str; 5] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_layout_then_every_widget_complies() {
    let widgets_dir = src_dir().join("widgets");
    let mut violations = Vec::new();

    let declared =
        declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let on_disk = child_dirs(&widgets_dir);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared widgets {declared:?} do not match directories \
             {on_disk:?}",
            widgets_dir.display()
        ));
    }

    for widget in &on_disk {
        let dir = widgets_dir.join(widget);
        for file in WIDGET_FILES {
            if !dir.join(file).is_file() {
                violations.push(format!("{}: missing {file}", dir.display()));
            }
        }

        let view_dir = dir.join("view");
        if !view_dir.join("mod.rs").is_file() {
            violations.push(format!("{}: missing mod.rs", view_dir.display()));
            continue;
        }
        for path in rust_files(&view_dir) {
            let prefix = if path.ends_with("mod.rs") {
                snake_to_pascal_case(widget)
            } else {
                file_stem_pascal_case(&path)
            };
            validate_view_file(&path, &prefix, &mut violations);
        }
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_primitives_when_validating_then_each_renders_one_view() {
    let dir = src_dir().join("components/primitive");
    let mut violations = Vec::new();

    for path in rust_files(&dir) {
        if path.ends_with("mod.rs") {
            continue;
        }
        let prefix = file_stem_pascal_case(&path);
        validate_view_file(&path, &prefix, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "component convention violations:\n{}",
        violations.join("\n")
    );
}

fn src_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let file = parse(mod_rs);
    let mut declared = BTreeSet::new();
    for item in &file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module '{}' must be declared as pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            _ => {},
        }
    }
    declared
}

fn validate_view_file(
    path: &Path,
    expected_prefix: &str,
    violations: &mut Vec<String>,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    let file = parse(path);

    for forbidden in [
        "log::",
        "std::fs::",
        "Task::",
        "iced::Task",
        "crate::state::",
        "crate::app::",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: side effects or app coupling in a view: {forbidden}",
                path.display()
            ));
        }
    }
    for forbidden in ["Instant::now", ".elapsed("] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: views must not read the clock: {forbidden}",
                path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names = Vec::new();
    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard imports are forbidden",
                    path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected one pub(crate) fn view, found {view_count}",
            path.display()
        ));
    }
    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected one *Props struct, found {props_names:?}",
            path.display()
        ));
    }
    for name in props_names {
        if !name.starts_with(expected_prefix) {
            violations.push(format!(
                "{}: props '{name}' must start with '{expected_prefix}'",
                path.display()
            ));
        }
    }
}

fn parse(path: &Path) -> syn::File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn child_dirs(dir: &Path) -> BTreeSet<String> {
    read_dir(dir)
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            path.file_name().map(|name| name.to_string_lossy().to_string())
        })
        .collect()
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = read_dir(dir)
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .collect();
    files.sort();
    files
}

fn read_dir(dir: &Path) -> impl Iterator<Item = PathBuf> {
    fs::read_dir(dir)
        .unwrap_or_else(|err| {
            panic!("failed to read dir {}: {err}", dir.display())
        })
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read entry: {err}"))
                .path()
        })
}

fn file_stem_pascal_case(path: &Path) -> String {
    let stem = path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal: String = first.to_uppercase().collect();
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
