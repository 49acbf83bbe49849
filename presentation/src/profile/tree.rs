//! Profile page tree
//!
//! A profile page is a list of named categories, each holding named content
//! nodes. The host owns the tree; extensions only append to it through
//! [`ProfileTree`].

use askama::Template;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("Node '{node}' refers to unknown category '{category}'")]
    UnknownCategory { category: String, node: String },

    #[error("Node '{0}' already exists")]
    DuplicateNode(String),
}

/// A titled section of the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub title: String,
}

impl Category {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }
}

/// A piece of HTML content inside a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub category: String,
    pub name: String,
    pub content: String,
}

impl Node {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Mutation surface of the host's profile tree.
pub trait ProfileTree {
    fn add_category(&mut self, category: Category) -> Result<(), TreeError>;

    /// The node's category must already have been added.
    fn add_node(&mut self, node: Node) -> Result<(), TreeError>;
}

/// In-memory profile tree, rendered as HTML sections in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MyProfileTree {
    categories: Vec<Category>,
    nodes: Vec<Node>,
}

impl MyProfileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn nodes_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Node> {
        self.nodes.iter().filter(move |n| n.category == category)
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Renders every category as a `<section>`, one per line. Node content
    /// is already HTML and is inserted as is.
    pub fn render_html(&self) -> Result<String, askama::Error> {
        let sections = self
            .categories
            .iter()
            .map(|category| Section {
                category,
                nodes: self.nodes_in(&category.name).collect(),
            })
            .collect();
        ProfileTreeTemplate { sections }.render()
    }
}

struct Section<'a> {
    category: &'a Category,
    nodes: Vec<&'a Node>,
}

#[derive(Template)]
#[template(path = "profile_tree.html")]
struct ProfileTreeTemplate<'a> {
    sections: Vec<Section<'a>>,
}

impl ProfileTree for MyProfileTree {
    fn add_category(&mut self, category: Category) -> Result<(), TreeError> {
        if self.categories.iter().any(|c| c.name == category.name) {
            return Err(TreeError::DuplicateCategory(category.name));
        }
        self.categories.push(category);
        Ok(())
    }

    fn add_node(&mut self, node: Node) -> Result<(), TreeError> {
        if !self.categories.iter().any(|c| c.name == node.category) {
            return Err(TreeError::UnknownCategory {
                category: node.category,
                node: node.name,
            });
        }
        if self.node(&node.name).is_some() {
            return Err(TreeError::DuplicateNode(node.name));
        }
        self.nodes.push(node);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_category_and_node() {
        let mut tree = MyProfileTree::new();
        assert!(tree.is_empty());

        tree.add_category(Category::new("contact", "Contact"))
            .unwrap();
        tree.add_node(Node::new("contact", "email", "a@example.org"))
            .unwrap();

        assert_eq!(tree.categories().len(), 1);
        assert_eq!(tree.nodes_in("contact").count(), 1);
        assert_eq!(tree.node("email").unwrap().content, "a@example.org");
    }

    #[test]
    fn test_node_requires_category() {
        let mut tree = MyProfileTree::new();
        let err = tree
            .add_node(Node::new("missing", "n", "x"))
            .unwrap_err();
        assert_eq!(
            err,
            TreeError::UnknownCategory {
                category: "missing".to_string(),
                node: "n".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut tree = MyProfileTree::new();
        tree.add_category(Category::new("c", "C")).unwrap();
        assert_eq!(
            tree.add_category(Category::new("c", "Again")),
            Err(TreeError::DuplicateCategory("c".to_string()))
        );

        tree.add_node(Node::new("c", "n", "1")).unwrap();
        assert_eq!(
            tree.add_node(Node::new("c", "n", "2")),
            Err(TreeError::DuplicateNode("n".to_string()))
        );
    }

    #[test]
    fn test_render_html() {
        let mut tree = MyProfileTree::new();
        tree.add_category(Category::new("cohortdetails", "Cohorts & groups"))
            .unwrap();
        tree.add_node(Node::new("cohortdetails", "cohortprofile", "<dt><dd>A</dd></dt>"))
            .unwrap();

        assert_eq!(
            tree.render_html().unwrap(),
            "<section class=\"node_category\" id=\"cohortdetails\"><h3>Cohorts &amp; groups</h3><ul><li class=\"contentnode\"><dt><dd>A</dd></dt></li></ul></section>"
        );
    }

    #[test]
    fn test_render_sections_one_per_line() {
        let mut tree = MyProfileTree::new();
        tree.add_category(Category::new("contact", "Contact"))
            .unwrap();
        tree.add_category(Category::new("empty", "<b>")).unwrap();

        let html = tree.render_html().unwrap();
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("<section class=\"node_category\" id=\"contact\">"));
        assert_eq!(
            lines[1],
            "<section class=\"node_category\" id=\"empty\"><h3>&lt;b&gt;</h3><ul></ul></section>"
        );
    }

    #[test]
    fn test_render_empty_tree() {
        assert_eq!(MyProfileTree::new().render_html().unwrap(), "");
    }
}
