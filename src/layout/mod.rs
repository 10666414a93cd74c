//! Declarative page layout.
//!
//! The page is a tree of typed [`Node`]s built once at startup. It serializes
//! to JSON for `/api/layout` and renders to HTML through [`html`].

pub mod html;

use serde::Serialize;

use crate::models::{Dataset, FilterMode};

pub const PAGE_TITLE: &str = "FIFA World Cup Winners & Runner-Ups";

pub const FILTER_TYPE_ID: &str = "filter_type";
pub const COUNTRY_CONTAINER_ID: &str = "country_container";
pub const COUNTRY_DROPDOWN_ID: &str = "country_dropdown";
pub const YEAR_CONTAINER_ID: &str = "year_container";
pub const YEAR_DROPDOWN_ID: &str = "year_dropdown";
pub const GRAPH_ID: &str = "worldcup_map";

/// Value carried by a radio or dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Year(u16),
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Text(s) => f.write_str(s),
            OptionValue::Year(y) => write!(f, "{}", y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: OptionValue::Text(value.into()),
        }
    }

    pub fn year(year: u16) -> Self {
        Self {
            label: year.to_string(),
            value: OptionValue::Year(year),
        }
    }
}

/// One element of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Container {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        class_name: String,
        hidden: bool,
        children: Vec<Node>,
    },
    Heading {
        text: String,
        class_name: String,
    },
    Label {
        text: String,
        html_for: String,
    },
    RadioItems {
        id: String,
        options: Vec<SelectOption>,
        value: String,
    },
    Dropdown {
        id: String,
        options: Vec<SelectOption>,
    },
    Graph {
        id: String,
        height: String,
    },
}

impl Node {
    fn container(class_name: &str, children: Vec<Node>) -> Self {
        Node::Container {
            id: None,
            class_name: class_name.to_string(),
            hidden: false,
            children,
        }
    }

    fn hidden_container(id: &str, children: Vec<Node>) -> Self {
        Node::Container {
            id: Some(id.to_string()),
            class_name: String::new(),
            hidden: true,
            children,
        }
    }

    fn label(text: &str, html_for: &str) -> Self {
        Node::Label {
            text: text.to_string(),
            html_for: html_for.to_string(),
        }
    }

    /// The element id, if this node has one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Container { id, .. } => id.as_deref(),
            Node::RadioItems { id, .. } | Node::Dropdown { id, .. } | Node::Graph { id, .. } => {
                Some(id.as_str())
            }
            Node::Heading { .. } | Node::Label { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Depth-first search for the node with `id`.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Options of a radio group or dropdown.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Node::RadioItems { options, .. } | Node::Dropdown { options, .. } => options.as_slice(),
            _ => &[],
        }
    }
}

/// Build the page tree. Option lists come straight from the dataset:
/// countries in summary order, years in file order.
pub fn build_layout(dataset: &Dataset) -> Node {
    let filter_options = FilterMode::ALL
        .iter()
        .map(|mode| SelectOption::text(mode.label(), mode.as_str()))
        .collect();

    let country_options = dataset
        .summary()
        .countries()
        .map(|c| SelectOption::text(c, c))
        .collect();

    let year_options = dataset.years().map(SelectOption::year).collect();

    Node::container(
        "container-fluid",
        vec![
            Node::Heading {
                text: PAGE_TITLE.to_string(),
                class_name: "text-center mb-4".to_string(),
            },
            Node::container(
                "p-3 bg-light rounded",
                vec![
                    Node::label("Filter:", FILTER_TYPE_ID),
                    Node::RadioItems {
                        id: FILTER_TYPE_ID.to_string(),
                        options: filter_options,
                        value: FilterMode::default().as_str().to_string(),
                    },
                ],
            ),
            Node::hidden_container(
                COUNTRY_CONTAINER_ID,
                vec![
                    Node::label("Select a Country:", COUNTRY_DROPDOWN_ID),
                    Node::Dropdown {
                        id: COUNTRY_DROPDOWN_ID.to_string(),
                        options: country_options,
                    },
                ],
            ),
            Node::hidden_container(
                YEAR_CONTAINER_ID,
                vec![
                    Node::label("Select a Year:", YEAR_DROPDOWN_ID),
                    Node::Dropdown {
                        id: YEAR_DROPDOWN_ID.to_string(),
                        options: year_options,
                    },
                ],
            ),
            Node::Graph {
                id: GRAPH_ID.to_string(),
                height: "65vh".to_string(),
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchRecord;
    use pretty_assertions::assert_eq;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            MatchRecord::new(1930, "Uruguay", "Argentina"),
            MatchRecord::new(1978, "Argentina", "Netherlands"),
            MatchRecord::new(1986, "Argentina", "West Germany"),
        ])
    }

    fn values(node: &Node) -> Vec<String> {
        node.options().iter().map(|o| o.value.to_string()).collect()
    }

    #[test]
    fn test_filter_options() {
        let layout = build_layout(&dataset());
        let radio = layout.find(FILTER_TYPE_ID).unwrap();

        assert_eq!(values(radio), vec!["all", "country", "year"]);
        match radio {
            Node::RadioItems { value, .. } => assert_eq!(value, "all"),
            other => panic!("expected radio items, got {:?}", other),
        }
    }

    #[test]
    fn test_country_options_match_summary() {
        let data = dataset();
        let layout = build_layout(&data);
        let dropdown = layout.find(COUNTRY_DROPDOWN_ID).unwrap();

        let expected: Vec<String> = data.summary().countries().map(String::from).collect();
        assert_eq!(values(dropdown), expected);
        assert_eq!(
            values(dropdown),
            vec!["Argentina", "Uruguay", "Netherlands", "West Germany"]
        );
    }

    #[test]
    fn test_year_options_in_file_order() {
        let layout = build_layout(&dataset());
        let dropdown = layout.find(YEAR_DROPDOWN_ID).unwrap();
        assert_eq!(values(dropdown), vec!["1930", "1978", "1986"]);
        assert_eq!(dropdown.options()[0].value, OptionValue::Year(1930));
    }

    #[test]
    fn test_selectors_start_hidden() {
        let layout = build_layout(&dataset());
        for id in [COUNTRY_CONTAINER_ID, YEAR_CONTAINER_ID] {
            match layout.find(id) {
                Some(Node::Container { hidden, .. }) => assert!(*hidden, "{id} should be hidden"),
                other => panic!("expected container {id}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_graph_present() {
        let layout = build_layout(&dataset());
        assert!(matches!(layout.find(GRAPH_ID), Some(Node::Graph { .. })));
        assert!(layout.find("missing").is_none());
    }

    #[test]
    fn test_layout_json() {
        let json = serde_json::to_value(build_layout(&dataset())).unwrap();
        assert_eq!(json["type"], "container");
        assert_eq!(json["children"][0]["type"], "heading");
        assert_eq!(json["children"][0]["text"], PAGE_TITLE);
        assert_eq!(json["children"][3]["children"][1]["options"][0]["value"], 1930);
    }
}
