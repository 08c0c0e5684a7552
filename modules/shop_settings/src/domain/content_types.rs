//! Content types the shop declares: three post types and one taxonomy

use crate::contract::{ContentKind, ContentType};
use indexmap::IndexMap;

const POST_TYPES: &[&str] = &["product", "order", "customer"];

/// (taxonomy, attached post type)
const TAXONOMIES: &[(&str, &str)] = &[("section", "product")];

const POST_SUPPORTS: &[&str] = &["title", "thumbnail", "revisions", "post-formats"];

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn labels(pairs: Vec<(&str, String)>) -> IndexMap<String, String> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn post_type_labels(name: &str) -> IndexMap<String, String> {
    let one = capitalize(name);
    let many = format!("{one}s");
    labels(vec![
        ("name", many.clone()),
        ("singular_name", one.clone()),
        ("menu_name", many.clone()),
        ("name_admin_bar", many.clone()),
        ("add_new", "Add New".to_string()),
        ("add_new_item", format!("Add New {one}")),
        ("new_item", format!("New {one}")),
        ("edit_item", format!("Edit {one}")),
        ("view_item", format!("View {one}")),
        ("all_items", many.clone()),
        ("search_items", format!("Search {many}")),
        ("not_found", format!("No {many} Found")),
    ])
}

fn taxonomy_labels(name: &str) -> IndexMap<String, String> {
    let one = capitalize(name);
    let many = format!("{one}s");
    labels(vec![
        ("name", many.clone()),
        ("singular_name", one.clone()),
        ("search_items", format!("Search {many}")),
        ("all_items", format!("All {many}")),
        ("parent_item", format!("Parent {one}")),
        ("parent_item_colon", format!("Parent {one}:")),
        ("edit_item", format!("Edit {one}")),
        ("update_item", format!("Update {one}")),
        ("add_new_item", format!("Add New {one}")),
        ("new_item_name", format!("New {one} Name")),
        ("menu_name", many),
    ])
}

/// Build the fixed catalog, post types first
pub fn catalog() -> Vec<ContentType> {
    let post_types = POST_TYPES.iter().map(|name| ContentType {
        name: name.to_string(),
        kind: ContentKind::PostType,
        hierarchical: true,
        supports: POST_SUPPORTS.iter().map(|s| s.to_string()).collect(),
        object_types: Vec::new(),
        show_in_rest: false,
        slug: name.to_string(),
        labels: post_type_labels(name),
    });

    let taxonomies = TAXONOMIES.iter().map(|(name, child)| ContentType {
        name: name.to_string(),
        kind: ContentKind::Taxonomy,
        hierarchical: true,
        supports: Vec::new(),
        object_types: vec![child.to_string()],
        show_in_rest: true,
        slug: name.to_string(),
        labels: taxonomy_labels(name),
    });

    post_types.chain(taxonomies).collect()
}
